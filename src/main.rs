use log::{error, info};
use macroquad::prelude::*;
use life_menu::{
    AppConfig, GridConfig, InteractionController, RunMode,
    application::{FrameTimer, InputEvent, InputSource, Renderer},
    input::{self, MacroquadInput},
    rendering::MacroquadRenderer,
    ui::{Menu, MenuAction},
};

fn window_conf(grid: &GridConfig) -> Conf {
    let (width, height) = grid.window_size();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: i32::try_from(width).unwrap_or(i32::MAX),
        window_height: i32::try_from(height).unwrap_or(i32::MAX),
        window_resizable: false,
        ..Default::default()
    }
}

/// Show the menu until the user starts a run or quits, then play it out.
async fn run(config: AppConfig) {
    prevent_quit();

    let mut menu = Menu::new(&config.run, screen_width());
    let kind = loop {
        match menu.update() {
            MenuAction::Start(kind) => break kind,
            MenuAction::Quit => {
                info!("Quit from menu");
                return;
            }
            MenuAction::None => {}
        }
        menu.draw();
        next_frame().await;
    };
    let run_config = menu.run_config();
    // The Play/Auto Play press is still reported for this frame; let it go
    // by before the run polls input so it does not land on the grid.
    next_frame().await;

    let mut controller = InteractionController::new(config.grid);
    if let Err(err) = controller.start(kind, &run_config, &mut ::rand::rng()) {
        error!("Could not start run: {}", err);
        return;
    }

    let mut input = MacroquadInput::new();
    let mut renderer = MacroquadRenderer::new(config.grid.cell_size);
    let mut timer = FrameTimer::new();
    let mut pending: Vec<InputEvent> = Vec::new();
    let mut ticked = false;

    while controller.mode().is_running() {
        let delta = input::tick_rate_delta();
        if delta != 0 {
            controller.set_tick_rate(controller.tick_rate().saturating_add_signed(delta));
        }
        pending.extend(input.drain());

        let quit = pending.contains(&InputEvent::Quit);
        if timer.due(get_frame_time(), controller.tick_rate()) || quit {
            if ticked && !quit {
                controller.finish_tick();
            }
            if controller.tick(pending.drain(..), &mut renderer) == RunMode::Terminated {
                break;
            }
            ticked = true;
        } else if let Some(grid) = controller.grid() {
            renderer.render(grid, controller.palette());
        }
        next_frame().await;
    }
    info!("Run finished after {} generations", controller.generation());
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = AppConfig::load()?;
    info!("Grid {}x{}, {}px cells", config.grid.width, config.grid.height, config.grid.cell_size);

    macroquad::Window::from_config(window_conf(&config.grid), run(config));
    Ok(())
}
