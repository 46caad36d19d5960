//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// One or both dimensions are zero.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A dimension does not fit the `i32` coordinate space, or the cell
    /// count does not fit in memory.
    DimensionTooLarge {
        /// Which dimension overflowed.
        name: &'static str,
        /// The rejected value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
