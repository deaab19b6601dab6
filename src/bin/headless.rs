//! Runs an automatic simulation in the terminal, without a window.
//!
//! Usage: `headless [ticks] [seed]`. Configuration comes from the same
//! `LIFE_MENU_CONFIG` file as the windowed front-end.

use anyhow::Context;
use life_menu::{
    AppConfig, Grid, InteractionController, RunKind, TickPacer,
    application::{InputEvent, InputSource, Palette, Renderer},
};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;

/// Emits nothing for `remaining` ticks, then quits
struct Countdown {
    remaining: u32,
}

impl InputSource for Countdown {
    fn drain(&mut self) -> Vec<InputEvent> {
        if self.remaining == 0 {
            return vec![InputEvent::Quit];
        }
        self.remaining -= 1;
        Vec::new()
    }
}

/// Prints each frame as rows of `#` and `.`
struct TextRenderer<W: Write> {
    out: W,
    frame: u64,
}

impl<W: Write> TextRenderer<W> {
    fn write_frame(&mut self, grid: &Grid) -> std::io::Result<()> {
        writeln!(self.out, "frame {} ({} alive)", self.frame, grid.population())?;
        let mut line = String::with_capacity(grid.width());
        for (x, _, cell) in grid.iter_cells() {
            line.push(if cell.is_alive() { '#' } else { '.' });
            if x + 1 == grid.width() {
                writeln!(self.out, "{}", line)?;
                line.clear();
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, grid: &Grid, _palette: &Palette) {
        self.frame += 1;
        if let Err(err) = self.write_frame(grid) {
            error!("Failed to write frame {}: {}", self.frame, err);
        }
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, default: T, name: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(text) => text.parse().with_context(|| format!("invalid {} '{}'", name, text)),
        None => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let mut args = std::env::args().skip(1);
    let ticks: u32 = parse_arg(args.next(), 10, "tick count")?;
    let seed: u64 = parse_arg(args.next(), 0xC0FFEE, "seed")?;

    let config = AppConfig::load()?;
    let mut controller = InteractionController::new(config.grid);
    controller.start(RunKind::Automatic, &config.run, &mut StdRng::seed_from_u64(seed))?;

    let mut input = Countdown { remaining: ticks };
    let mut renderer = TextRenderer {
        out: std::io::stdout().lock(),
        frame: 0,
    };
    controller.run(&mut input, &mut renderer, &mut TickPacer::new());
    info!("Stopped after {} generations", controller.generation());
    Ok(())
}
