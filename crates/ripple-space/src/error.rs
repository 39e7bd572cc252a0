//! Error types for grid construction.

use ripple_core::WaveError;
use std::fmt;

/// Errors arising from grid construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceError {
    /// Half-width or spacing is not finite and positive.
    InvalidExtent {
        /// The requested half-width `a`.
        half_width: f64,
        /// The requested spacing `h`.
        spacing: f64,
    },
    /// An axis has fewer points than the boundary stencil needs.
    TooFewPoints {
        /// Number of points the axis would have.
        axis_len: usize,
        /// Minimum number of points required.
        min: usize,
    },
    /// The axis or grid would exceed the supported size.
    TooManyPoints {
        /// Number of points or cells requested. Infinite if `2a/h` overflowed.
        requested: f64,
        /// Maximum allowed.
        max: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent {
                half_width,
                spacing,
            } => write!(
                f,
                "half_width ({half_width}) and spacing ({spacing}) must be finite and > 0"
            ),
            Self::TooFewPoints { axis_len, min } => {
                write!(f, "axis has {axis_len} points, at least {min} required")
            }
            Self::TooManyPoints { requested, max } => {
                write!(f, "grid needs {requested} points, at most {max} supported")
            }
        }
    }
}

impl std::error::Error for SpaceError {}

impl From<SpaceError> for WaveError {
    fn from(e: SpaceError) -> Self {
        WaveError::invalid(format!("grid: {e}"))
    }
}
