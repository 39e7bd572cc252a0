//! Initial displacement and velocity fields.
//!
//! An [`InitialCondition`] maps the full coordinate array of a grid to one
//! value per cell. Any pointwise closure `Fn(&Coord) -> f64` is one
//! already; array-at-a-time closures are wrapped in [`FieldFn`].

use std::f64::consts::PI;
use std::fmt;

use ripple_core::Coord;

/// Produces a field from grid coordinates.
pub trait InitialCondition {
    /// Evaluate at every coordinate, returning one value per cell in order.
    fn evaluate(&self, coords: &[Coord]) -> Vec<f64>;
}

impl<F> InitialCondition for F
where
    F: Fn(&Coord) -> f64,
{
    fn evaluate(&self, coords: &[Coord]) -> Vec<f64> {
        coords.iter().map(self).collect()
    }
}

/// Adapter for closures that evaluate the whole coordinate array at once.
///
/// The closure must return exactly `coords.len()` values; the solver
/// builder rejects anything else.
///
/// ```
/// use ripple_core::Coord;
/// use ripple_solver::{FieldFn, InitialCondition};
/// use smallvec::smallvec;
///
/// let ramp = FieldFn(|coords: &[Coord]| coords.iter().map(|c| 2.0 * c[0]).collect::<Vec<f64>>());
/// let coords: Vec<Coord> = vec![smallvec![0.5], smallvec![1.0]];
/// assert_eq!(ramp.evaluate(&coords), vec![1.0, 2.0]);
/// ```
#[derive(Clone, Copy)]
pub struct FieldFn<F>(pub F);

impl<F> InitialCondition for FieldFn<F>
where
    F: Fn(&[Coord]) -> Vec<f64>,
{
    fn evaluate(&self, coords: &[Coord]) -> Vec<f64> {
        (self.0)(coords)
    }
}

impl<F> fmt::Debug for FieldFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldFn(..)")
    }
}

/// The field that is zero everywhere.
pub fn zero() -> impl Fn(&Coord) -> f64 + Copy {
    |_: &Coord| 0.0
}

/// `cos(k * x)`, constant along y in 2D. `cosine_x(PI)` is the classic
/// standing-wave start on `[-1, 1]`.
pub fn cosine_x(k: f64) -> impl Fn(&Coord) -> f64 + Copy {
    move |c: &Coord| (k * c[0]).cos()
}

/// `cos(pi * x)`.
pub fn standing_wave() -> impl Fn(&Coord) -> f64 + Copy {
    cosine_x(PI)
}

/// Gaussian bump `amplitude * exp(-|x - center|^2 / width^2)`.
///
/// `center` supplies one component per axis; missing components are zero.
pub fn gaussian(center: &[f64], width: f64, amplitude: f64) -> impl Fn(&Coord) -> f64 + Clone {
    let center: Coord = center.iter().copied().collect();
    let inv_w2 = 1.0 / (width * width);
    move |c: &Coord| {
        let r2: f64 = c
            .iter()
            .enumerate()
            .map(|(axis, &x)| {
                let d = x - center.get(axis).copied().unwrap_or(0.0);
                d * d
            })
            .sum();
        amplitude * (-r2 * inv_w2).exp()
    }
}
