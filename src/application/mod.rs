pub mod config;
mod controller;
mod pacer;
mod palette;

pub use config::{AppConfig, GridConfig, RunConfig};
pub use controller::{
    ControllerError, InputEvent, InputSource, InteractionController, PointerButton, Renderer,
    RunKind, RunMode,
};
pub use pacer::{FrameTimer, Pacer, TickPacer};
pub use palette::{NAMED_COLORS, Palette, Rgb, named_index};
