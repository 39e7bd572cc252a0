//! Axis sampling shared by the 1D and 2D grids.

use crate::error::SpaceError;
use crate::padding::Padding;

/// Minimum number of points per axis.
///
/// The mirrored boundary reads cell 2 and cell `n - 3`, so three points is
/// the smallest axis on which every boundary variant is well defined.
pub const MIN_AXIS_POINTS: usize = 3;

/// Maximum number of points per axis, ghost cells included.
pub const MAX_AXIS_POINTS: usize = 1 << 20;

/// Relative slack when deciding whether `2a/h` is a whole number of cells.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Sample one axis of the domain `[-a, a]` every `h` units.
///
/// Points are `-a + k*h` for `k = 0..=m` with `m = floor(2a/h)`, computed
/// by multiplication rather than accumulation so rounding does not drift
/// along the axis. [`Padding::GhostCells`] extends `k` to `-1..=m+1`.
///
/// # Errors
///
/// Returns [`SpaceError::InvalidExtent`] for non-finite or non-positive
/// inputs, [`SpaceError::TooFewPoints`] if the axis would have fewer
/// than [`MIN_AXIS_POINTS`] points, and [`SpaceError::TooManyPoints`] if
/// it would have more than [`MAX_AXIS_POINTS`].
///
/// # Examples
///
/// ```
/// use ripple_space::{axis_points, Padding};
///
/// let xs = axis_points(1.0, 0.04, Padding::Flush).unwrap();
/// assert_eq!(xs.len(), 51);
/// assert_eq!(xs[0], -1.0);
/// assert!((xs[50] - 1.0).abs() < 1e-12);
/// ```
pub fn axis_points(half_width: f64, spacing: f64, padding: Padding) -> Result<Vec<f64>, SpaceError> {
    if !half_width.is_finite() || half_width <= 0.0 || !spacing.is_finite() || spacing <= 0.0 {
        return Err(SpaceError::InvalidExtent {
            half_width,
            spacing,
        });
    }

    let ghost = padding.ghost_width();
    let ratio = 2.0 * half_width / spacing;
    let requested = (ratio * (1.0 + STEP_COUNT_TOLERANCE)).floor() + 1.0 + 2.0 * ghost as f64;
    // An extreme a/h can overflow the ratio to infinity.
    if !requested.is_finite() || requested > MAX_AXIS_POINTS as f64 {
        return Err(SpaceError::TooManyPoints {
            requested,
            max: MAX_AXIS_POINTS,
        });
    }
    let len = requested as usize;
    if len < MIN_AXIS_POINTS {
        return Err(SpaceError::TooFewPoints {
            axis_len: len,
            min: MIN_AXIS_POINTS,
        });
    }

    let first = -(ghost as f64);
    Ok((0..len)
        .map(|i| -half_width + (first + i as f64) * spacing)
        .collect())
}
