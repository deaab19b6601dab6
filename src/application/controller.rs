//! Run loop that turns input events into grid edits and generations.
//!
//! Manual runs advance one generation per tick while the step key is held and
//! accept pointer edits. Automatic runs ignore everything except quit and
//! advance twice per tick: once before rendering and once after the wait
//! (`finish_tick`). That doubles the effective speed relative to the tick
//! rate. It looks unintentional but changing it would change how fast
//! automatic runs play, so both advances stay.

use super::{GridConfig, Pacer, Palette, RunConfig, config::clamp_tick_rate};
use crate::domain::{Cell, Grid, GridError};
use log::{debug, info, trace};
use rand::Rng;
use thiserror::Error;

/// Mouse buttons the controller understands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Paints a cell alive
    Primary,
    /// Erases a cell
    Secondary,
}

/// One input event, already drained from the platform queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerDown {
        button: PointerButton,
        screen_x: i32,
        screen_y: i32,
    },
    KeyState { step_key_held: bool },
}

/// Supplies the events that arrived since the previous tick
pub trait InputSource {
    fn drain(&mut self) -> Vec<InputEvent>;
}

/// Draws the grid once per tick
pub trait Renderer {
    fn render(&mut self, grid: &Grid, palette: &Palette);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    Manual,
    Automatic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    Idle,
    RunningManual,
    RunningAutomatic,
    Terminated,
}

impl RunMode {
    pub const fn is_running(self) -> bool {
        matches!(self, RunMode::RunningManual | RunMode::RunningAutomatic)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    #[error("cannot start a run while {0:?}")]
    NotIdle(RunMode),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Owns the grid for the duration of one run.
pub struct InteractionController {
    grid_config: GridConfig,
    mode: RunMode,
    grid: Option<Grid>,
    palette: Palette,
    tick_rate: u32,
    step_held: bool,
    generation: u64,
}

impl InteractionController {
    pub fn new(grid_config: GridConfig) -> Self {
        Self {
            grid_config,
            mode: RunMode::Idle,
            grid: None,
            palette: Palette::default(),
            tick_rate: RunConfig::default().tick_rate,
            step_held: false,
            generation: 0,
        }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// The live grid, present only while a run is in progress
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    /// Generations computed in the current run
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Change the tick rate while running; clamped to the menu's range.
    pub fn set_tick_rate(&mut self, rate: u32) {
        let clamped = clamp_tick_rate(rate);
        if clamped != self.tick_rate {
            debug!("Tick rate {} -> {}", self.tick_rate, clamped);
        }
        self.tick_rate = clamped;
    }

    /// Build a fresh grid from `config` and enter the requested run mode.
    pub fn start<R: Rng>(&mut self, kind: RunKind, config: &RunConfig, rng: &mut R) -> Result<(), ControllerError> {
        if self.mode != RunMode::Idle {
            return Err(ControllerError::NotIdle(self.mode));
        }
        let config = config.clone().sanitized();
        let mut grid = Grid::new(self.grid_config.width, self.grid_config.height)?;
        grid.seed_random(config.percent, rng)?;

        self.palette = if config.randomize_colors {
            Palette::randomized(rng)
        } else {
            config.colors
        };
        self.tick_rate = config.tick_rate;
        self.step_held = false;
        self.generation = 0;
        self.mode = match kind {
            RunKind::Manual => RunMode::RunningManual,
            RunKind::Automatic => RunMode::RunningAutomatic,
        };
        info!(
            "Starting {:?} run: {}x{} grid, {} alive, {} ticks/s",
            kind,
            grid.width(),
            grid.height(),
            grid.population(),
            self.tick_rate
        );
        self.grid = Some(grid);
        Ok(())
    }

    /// First half of a tick: handle input, maybe advance, then render.
    ///
    /// Returns the mode after the tick. A quit event ends the run before
    /// anything is drawn.
    pub fn tick<I, R>(&mut self, events: I, renderer: &mut R) -> RunMode
    where
        I: IntoIterator<Item = InputEvent>,
        R: Renderer + ?Sized,
    {
        match self.mode {
            RunMode::RunningManual => {
                for event in events {
                    match event {
                        InputEvent::Quit => return self.terminate(),
                        InputEvent::PointerDown { button, screen_x, screen_y } => {
                            self.edit(button, screen_x, screen_y)
                        }
                        InputEvent::KeyState { step_key_held } => self.step_held = step_key_held,
                    }
                }
                if self.step_held {
                    self.advance();
                }
            }
            RunMode::RunningAutomatic => {
                if events.into_iter().any(|event| event == InputEvent::Quit) {
                    return self.terminate();
                }
                self.advance();
            }
            RunMode::Idle | RunMode::Terminated => return self.mode,
        }

        if let Some(grid) = &self.grid {
            renderer.render(grid, &self.palette);
        }
        self.mode
    }

    /// Second half of a tick, after the wait. Automatic runs advance again.
    pub fn finish_tick(&mut self) {
        if self.mode == RunMode::RunningAutomatic {
            self.advance();
        }
    }

    /// Drive ticks until the input source asks to quit.
    pub fn run<S, R, P>(&mut self, input: &mut S, renderer: &mut R, pacer: &mut P) -> RunMode
    where
        S: InputSource + ?Sized,
        R: Renderer + ?Sized,
        P: Pacer + ?Sized,
    {
        while self.mode.is_running() {
            if self.tick(input.drain(), renderer) == RunMode::Terminated {
                break;
            }
            pacer.wait(self.tick_rate);
            self.finish_tick();
        }
        self.mode
    }

    /// Map a screen position to a cell, if it falls on the grid.
    pub fn screen_to_cell(&self, screen_x: i32, screen_y: i32) -> Option<(usize, usize)> {
        let cell_size = i64::from(self.grid_config.cell_size.max(1));
        let x = usize::try_from(i64::from(screen_x).div_euclid(cell_size)).ok()?;
        let y = usize::try_from(i64::from(screen_y).div_euclid(cell_size)).ok()?;
        (x < self.grid_config.width && y < self.grid_config.height).then_some((x, y))
    }

    fn edit(&mut self, button: PointerButton, screen_x: i32, screen_y: i32) {
        let Some((x, y)) = self.screen_to_cell(screen_x, screen_y) else {
            debug!("Ignoring click at ({}, {}) outside the grid", screen_x, screen_y);
            return;
        };
        let cell = match button {
            PointerButton::Primary => Cell::Alive,
            PointerButton::Secondary => Cell::Dead,
        };
        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        if let Err(err) = grid.set(x, y, cell) {
            debug!("Ignoring edit: {}", err);
        }
    }

    fn advance(&mut self) {
        if let Some(grid) = self.grid.as_mut() {
            grid.advance();
            self.generation += 1;
            trace!("Generation {}: {} alive", self.generation, grid.population());
        }
    }

    fn terminate(&mut self) -> RunMode {
        info!("Quit received after {} generations", self.generation);
        self.grid = None;
        self.step_held = false;
        self.mode = RunMode::Terminated;
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::VecDeque;

    /// Keeps a copy of every grid it is asked to draw
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<Grid>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, grid: &Grid, _palette: &Palette) {
            self.frames.push(grid.clone());
        }
    }

    /// Replays scripted ticks, then quits
    struct ScriptedInput {
        ticks: VecDeque<Vec<InputEvent>>,
    }

    impl InputSource for ScriptedInput {
        fn drain(&mut self) -> Vec<InputEvent> {
            self.ticks.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
        }
    }

    #[derive(Default)]
    struct CountingPacer {
        waits: Vec<u32>,
    }

    impl Pacer for CountingPacer {
        fn wait(&mut self, tick_rate: u32) {
            self.waits.push(tick_rate);
        }
    }

    fn empty_run() -> RunConfig {
        RunConfig {
            percent: 0.0,
            ..RunConfig::default()
        }
    }

    fn click(button: PointerButton, x: usize, y: usize) -> InputEvent {
        // Aim at the middle of the 40px cell
        InputEvent::PointerDown {
            button,
            screen_x: x as i32 * 40 + 20,
            screen_y: y as i32 * 40 + 20,
        }
    }

    fn alive(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    fn manual_controller() -> InteractionController {
        let mut controller = InteractionController::new(GridConfig::default());
        controller
            .start(RunKind::Manual, &empty_run(), &mut StdRng::seed_from_u64(0))
            .unwrap();
        controller
    }

    #[test_log::test]
    fn test_starts_idle_without_grid() {
        let controller = InteractionController::new(GridConfig::default());
        assert_eq!(controller.mode(), RunMode::Idle);
        assert!(controller.grid().is_none());
    }

    #[test_log::test]
    fn test_clicks_paint_and_erase() {
        let mut controller = manual_controller();
        let mut renderer = RecordingRenderer::default();
        let events = vec![
            click(PointerButton::Primary, 3, 4),
            click(PointerButton::Primary, 4, 4),
            click(PointerButton::Primary, 7, 7),
            click(PointerButton::Secondary, 7, 7),
        ];
        assert_eq!(controller.tick(events, &mut renderer), RunMode::RunningManual);
        assert_eq!(alive(&renderer.frames[0]), vec![(3, 4), (4, 4)]);
        assert_eq!(controller.generation(), 0);
    }

    #[test_log::test]
    fn test_out_of_bounds_clicks_are_ignored() {
        let mut controller = manual_controller();
        let mut renderer = RecordingRenderer::default();
        let events = vec![
            InputEvent::PointerDown { button: PointerButton::Primary, screen_x: 1200, screen_y: 10 },
            InputEvent::PointerDown { button: PointerButton::Primary, screen_x: 10, screen_y: 800 },
            InputEvent::PointerDown { button: PointerButton::Primary, screen_x: -1, screen_y: 10 },
        ];
        assert_eq!(controller.tick(events, &mut renderer), RunMode::RunningManual);
        assert_eq!(controller.grid().map(Grid::population), Some(0));
    }

    #[test]
    fn test_screen_to_cell_uses_integer_division() {
        let controller = InteractionController::new(GridConfig::default());
        assert_eq!(controller.screen_to_cell(0, 0), Some((0, 0)));
        assert_eq!(controller.screen_to_cell(39, 39), Some((0, 0)));
        assert_eq!(controller.screen_to_cell(40, 79), Some((1, 1)));
        assert_eq!(controller.screen_to_cell(1199, 799), Some((29, 19)));
        assert_eq!(controller.screen_to_cell(1200, 0), None);
        assert_eq!(controller.screen_to_cell(-39, 0), None);
    }

    #[test_log::test]
    fn test_step_key_advances_while_held() {
        let mut controller = manual_controller();
        let mut renderer = RecordingRenderer::default();
        let blinker = vec![
            click(PointerButton::Primary, 3, 4),
            click(PointerButton::Primary, 4, 4),
            click(PointerButton::Primary, 5, 4),
            InputEvent::KeyState { step_key_held: true },
        ];
        controller.tick(blinker, &mut renderer);
        assert_eq!(alive(&renderer.frames[0]), vec![(4, 3), (4, 4), (4, 5)]);

        // Still held: no new event needed to keep stepping
        controller.tick(Vec::new(), &mut renderer);
        assert_eq!(alive(&renderer.frames[1]), vec![(3, 4), (4, 4), (5, 4)]);

        controller.tick(vec![InputEvent::KeyState { step_key_held: false }], &mut renderer);
        assert_eq!(renderer.frames[2], renderer.frames[1]);
        assert_eq!(controller.generation(), 2);

        // finish_tick never advances a manual run
        controller.finish_tick();
        assert_eq!(controller.generation(), 2);
    }

    #[test_log::test]
    fn test_automatic_mode_advances_twice_per_tick() {
        let mut controller = InteractionController::new(GridConfig {
            width: 3,
            height: 3,
            cell_size: 10,
        });
        let full = RunConfig {
            percent: 1.0,
            ..RunConfig::default()
        };
        controller
            .start(RunKind::Automatic, &full, &mut StdRng::seed_from_u64(0))
            .unwrap();
        let mut renderer = RecordingRenderer::default();

        // Clicks are ignored in automatic mode
        let events = vec![click(PointerButton::Secondary, 0, 0)];
        assert_eq!(controller.tick(events, &mut renderer), RunMode::RunningAutomatic);
        assert_eq!(alive(&renderer.frames[0]), vec![(0, 0), (2, 0), (0, 2), (2, 2)]);

        controller.finish_tick();
        assert_eq!(controller.generation(), 2);
        assert_eq!(controller.grid().map(Grid::population), Some(0));
    }

    #[test_log::test]
    fn test_quit_terminates_and_drops_grid() {
        let mut controller = manual_controller();
        let mut renderer = RecordingRenderer::default();
        let events = vec![InputEvent::Quit, click(PointerButton::Primary, 1, 1)];
        assert_eq!(controller.tick(events, &mut renderer), RunMode::Terminated);
        assert!(renderer.frames.is_empty());
        assert!(controller.grid().is_none());

        // Terminated is final
        assert_eq!(controller.tick(Vec::new(), &mut renderer), RunMode::Terminated);
        let restart = controller.start(RunKind::Manual, &empty_run(), &mut StdRng::seed_from_u64(0));
        assert_eq!(restart, Err(ControllerError::NotIdle(RunMode::Terminated)));
    }

    #[test_log::test]
    fn test_start_twice_is_rejected() {
        let mut controller = manual_controller();
        let again = controller.start(RunKind::Automatic, &empty_run(), &mut StdRng::seed_from_u64(0));
        assert_eq!(again, Err(ControllerError::NotIdle(RunMode::RunningManual)));
    }

    #[test_log::test]
    fn test_run_loop_paces_and_stops_on_quit() {
        let mut controller = InteractionController::new(GridConfig::default());
        let config = RunConfig {
            percent: 0.0,
            tick_rate: 12,
            ..RunConfig::default()
        };
        controller
            .start(RunKind::Automatic, &config, &mut StdRng::seed_from_u64(0))
            .unwrap();
        let mut input = ScriptedInput {
            ticks: VecDeque::from(vec![Vec::new(), Vec::new(), Vec::new()]),
        };
        let mut renderer = RecordingRenderer::default();
        let mut pacer = CountingPacer::default();

        let mode = controller.run(&mut input, &mut renderer, &mut pacer);
        assert_eq!(mode, RunMode::Terminated);
        assert_eq!(renderer.frames.len(), 3);
        assert_eq!(pacer.waits, vec![12, 12, 12]);
    }

    #[test_log::test]
    fn test_run_loop_is_noop_when_idle() {
        let mut controller = InteractionController::new(GridConfig::default());
        let mut input = ScriptedInput { ticks: VecDeque::new() };
        let mut renderer = RecordingRenderer::default();
        let mut pacer = CountingPacer::default();
        assert_eq!(controller.run(&mut input, &mut renderer, &mut pacer), RunMode::Idle);
        assert!(pacer.waits.is_empty());
    }

    #[test_log::test]
    fn test_start_sanitizes_and_randomizes_colors() {
        let mut controller = InteractionController::new(GridConfig::default());
        let config = RunConfig {
            percent: 7.0,
            tick_rate: 0,
            randomize_colors: true,
            ..RunConfig::default()
        };
        controller
            .start(RunKind::Manual, &config, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(controller.grid().map(Grid::population), Some(600));
        assert_eq!(controller.tick_rate(), 1);

        controller.set_tick_rate(90);
        assert_eq!(controller.tick_rate(), 60);
    }
}
