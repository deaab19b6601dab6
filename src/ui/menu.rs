use macroquad::prelude::*;
use crate::application::{NAMED_COLORS, Palette, Rgb, RunConfig, RunKind, named_index};
use crate::application::config::{MAX_MENU_PERCENT, MAX_TICK_RATE, MIN_TICK_RATE};
use super::{Button, Selector, Slider, Toggle, BUTTON_HEIGHT, MENU_WIDTH, ROW_SPACING};

/// What the user picked on this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(RunKind),
    Quit,
}

/// Pre-run configuration screen
pub struct Menu {
    play: Button,
    auto_play: Button,
    randomize: Toggle,
    clock_speed: Slider,
    percent: Slider,
    dead: Selector,
    alive: Selector,
    border: Selector,
    quit: Button,
    colors: Palette,
}

fn color_selector(rect: Rect, label: &str, color: Rgb) -> Selector {
    let items = NAMED_COLORS.iter().map(|(name, _)| name.to_string()).collect();
    let mut selector = Selector::new(rect, label, items);
    selector.set_selected(named_index(color).unwrap_or(0));
    selector
}

impl Menu {
    pub fn new(config: &RunConfig, screen_width: f32) -> Self {
        let x = (screen_width - MENU_WIDTH) / 2.0;
        let row = |i: usize| Rect::new(x, 110.0 + i as f32 * ROW_SPACING, MENU_WIDTH, BUTTON_HEIGHT);

        let mut menu = Self {
            play: Button::new(row(0), "Play"),
            auto_play: Button::new(row(1), "Auto Play"),
            randomize: Toggle::new(row(2), "Randomize colors", config.randomize_colors),
            clock_speed: Slider::new(
                row(3),
                "Clock speed",
                (f64::from(MIN_TICK_RATE), f64::from(MAX_TICK_RATE)),
                1.0,
                f64::from(config.tick_rate),
            ),
            percent: Slider::new(row(4), "Percent of cells alive", (0.0, MAX_MENU_PERCENT), 0.1, config.percent),
            dead: color_selector(row(5), "Dead cell color", config.colors.dead),
            alive: color_selector(row(6), "Alive cell color", config.colors.alive),
            border: color_selector(row(7), "Border color", config.colors.border),
            quit: Button::new(row(8), "Quit"),
            colors: config.colors,
        };
        menu.sync_color_lock();
        menu
    }

    fn sync_color_lock(&mut self) {
        let random = self.randomize.is_on();
        for selector in [&mut self.dead, &mut self.alive, &mut self.border] {
            if random {
                selector.lock("Random");
            } else {
                selector.unlock();
            }
        }
    }

    /// Handle a left click at `mouse_pos`
    pub fn click(&mut self, mouse_pos: (f32, f32)) -> MenuAction {
        if self.play.is_hovered(mouse_pos) {
            return MenuAction::Start(RunKind::Manual);
        }
        if self.auto_play.is_hovered(mouse_pos) {
            return MenuAction::Start(RunKind::Automatic);
        }
        if self.quit.is_hovered(mouse_pos) {
            return MenuAction::Quit;
        }
        if self.randomize.click(mouse_pos) {
            self.sync_color_lock();
        }
        if self.dead.click(mouse_pos) {
            self.colors.dead = NAMED_COLORS[self.dead.selected()].1;
        }
        if self.alive.click(mouse_pos) {
            self.colors.alive = NAMED_COLORS[self.alive.selected()].1;
        }
        if self.border.click(mouse_pos) {
            self.colors.border = NAMED_COLORS[self.border.selected()].1;
        }
        self.drag(mouse_pos);
        MenuAction::None
    }

    /// Follow a held pointer across the sliders
    pub fn drag(&mut self, mouse_pos: (f32, f32)) {
        self.clock_speed.drag(mouse_pos);
        self.percent.drag(mouse_pos);
    }

    /// Poll macroquad input for this frame
    pub fn update(&mut self) -> MenuAction {
        let mouse_pos = mouse_position();
        if is_key_pressed(KeyCode::Escape) || is_quit_requested() {
            return MenuAction::Quit;
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            return self.click(mouse_pos);
        }
        if is_mouse_button_down(MouseButton::Left) {
            self.drag(mouse_pos);
        }
        MenuAction::None
    }

    /// Settings as currently shown
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            percent: self.percent.value(),
            tick_rate: self.clock_speed.value().round() as u32,
            colors: self.colors,
            randomize_colors: self.randomize.is_on(),
        }
    }

    pub fn draw(&self) {
        let mouse_pos = mouse_position();
        clear_background(Color::from_rgba(40, 41, 35, 255));

        let title = "Game of Life";
        let size = measure_text(title, None, 48, 1.0);
        draw_text(title, (screen_width() - size.width) / 2.0, 70.0, 48.0, WHITE);

        self.play.draw(mouse_pos);
        self.auto_play.draw(mouse_pos);
        self.randomize.draw(mouse_pos);
        self.clock_speed.draw(mouse_pos);
        self.percent.draw(mouse_pos);
        self.dead.draw(mouse_pos);
        self.alive.draw(mouse_pos);
        self.border.draw(mouse_pos);
        self.quit.draw(mouse_pos);
    }
}
