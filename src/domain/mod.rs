mod cell;
mod error;
mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
