use thiserror::Error;

/// Errors raised by grid construction and cell access.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("grid dimensions {width}x{height} must be positive and fit in memory")]
    InvalidDimensions { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("seeding fraction {0} is outside [0, 1]")]
    InvalidProbability(f64),
}
