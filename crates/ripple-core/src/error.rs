//! Error types for solver construction.
//!
//! All validation happens before a solver exists. Once constructed,
//! advancing a simulation cannot fail, so there is no runtime error type.

use std::error::Error;
use std::fmt;

/// Errors raised while constructing a wave solver.
///
/// Construction is all-or-nothing: on any of these errors no solver
/// object is created.
#[derive(Clone, Debug, PartialEq)]
pub enum WaveError {
    /// A domain, boundary, or initial-condition parameter is invalid.
    ///
    /// Covers CFL violations, non-finite or non-positive domain values,
    /// unrecognized boundary tags, boundary variants used in the wrong
    /// dimension, and initial conditions of the wrong shape.
    InvalidParameters {
        /// Human-readable description of the violated constraint.
        reason: String,
    },
    /// The requested spatial dimension is not 1 or 2.
    UnsupportedDimension {
        /// The dimension that was requested.
        ndim: u32,
    },
}

impl WaveError {
    /// Shorthand for building an [`InvalidParameters`](Self::InvalidParameters) error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { reason } => write!(f, "invalid parameters: {reason}"),
            Self::UnsupportedDimension { ndim } => {
                write!(f, "unsupported dimension {ndim}: must be 1 or 2")
            }
        }
    }
}

impl Error for WaveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_parameters() {
        let err = WaveError::invalid("dt too large");
        assert_eq!(format!("{err}"), "invalid parameters: dt too large");
    }

    #[test]
    fn display_unsupported_dimension() {
        let err = WaveError::UnsupportedDimension { ndim: 3 };
        let msg = format!("{err}");
        assert!(msg.contains('3'));
        assert!(msg.contains("1 or 2"));
    }
}
