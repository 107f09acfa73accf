use std::fmt;

/// Errors reported by the engine's fallible operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LifeError {
    /// A rule mentions a neighbor count outside `0..=8`.
    InvalidRule { count: u8 },
    /// A coordinate cannot be keyed without colliding with another one.
    CoordinateOutOfRange { x: i64, y: i64 },
    /// Fill probability outside `[0, 1]`.
    InvalidDensity(f64),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRule { count } => {
                write!(f, "neighbor count {} is outside of 0..=8", count)
            }
            Self::CoordinateOutOfRange { x, y } => {
                write!(f, "coordinate ({}, {}) is outside of the supported range", x, y)
            }
            Self::InvalidDensity(density) => {
                write!(f, "density {} is outside of [0, 1]", density)
            }
        }
    }
}

impl std::error::Error for LifeError {}
