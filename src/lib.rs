// Domain layer - grid and transition rule
pub mod domain;

// Application layer - run configuration and the interaction loop
pub mod application;

// Infrastructure layer - macroquad UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError};
pub use application::{AppConfig, GridConfig, InteractionController, RunConfig, RunKind, RunMode, TickPacer};
