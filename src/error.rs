use thiserror::Error;

/// Precondition violations raised by grid operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
}

/// Errors raised while reading `SimConfig` from the environment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid value")]
    Parse { var: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Invalid(#[from] GridError),
}
