//! Standard solver fixtures.
//!
//! - [`scenario_params`]: `a = 1, h = 0.04, c = 1, dt = 0.99 h / (c sqrt 2)`
//! - [`cosine_line`]: 1D `cos(pi x)` start with zero velocity
//! - [`bump_line`] / [`bump_plane`]: centered Gaussian, symmetric about the origin
//! - [`zero_solver`]: all-zero displacement and velocity

use ripple_core::{Dimension, DomainParams};
use ripple_solver::{initial, BoundarySpec, WaveSolver};

/// Spacing used by the standard scenario (`n = 50` on `[-1, 1]`).
pub const SCENARIO_SPACING: f64 = 0.04;

/// Domain on `[-1, 1]` with unit speed and `dt = courant * h / sqrt(ndim)`.
pub fn domain(spacing: f64, courant: f64, dim: Dimension) -> DomainParams {
    let dt = courant * spacing / (dim.ndim() as f64).sqrt();
    DomainParams::new(1.0, spacing, 1.0, dt).unwrap()
}

/// The standard scenario: 0.99 of the 2D CFL limit at `h = 0.04`.
pub fn scenario_params() -> DomainParams {
    let h = SCENARIO_SPACING;
    DomainParams::new(1.0, h, 1.0, h / 2.0_f64.sqrt() * 0.99).unwrap()
}

/// 1D solver starting from `cos(pi x)` at rest, on [`scenario_params`].
pub fn cosine_line(boundary: BoundarySpec) -> WaveSolver {
    WaveSolver::builder()
        .dimension(Dimension::One)
        .domain(scenario_params())
        .boundary(boundary)
        .initial_displacement(initial::standing_wave())
        .initial_velocity(initial::zero())
        .build()
        .unwrap()
}

/// 1D solver starting from a Gaussian bump at the origin.
pub fn bump_line(boundary: BoundarySpec) -> WaveSolver {
    WaveSolver::builder()
        .dimension(Dimension::One)
        .domain(domain(0.05, 0.9, Dimension::One))
        .boundary(boundary)
        .initial_displacement(initial::gaussian(&[0.0], 0.25, 1.0))
        .build()
        .unwrap()
}

/// 2D solver starting from a Gaussian bump at the origin.
pub fn bump_plane(boundary: BoundarySpec) -> WaveSolver {
    WaveSolver::builder()
        .dimension(Dimension::Two)
        .domain(domain(0.1, 0.9, Dimension::Two))
        .boundary(boundary)
        .initial_displacement(initial::gaussian(&[0.0, 0.0], 0.3, 1.0))
        .build()
        .unwrap()
}

/// Solver with zero displacement and zero velocity.
pub fn zero_solver(dim: Dimension, boundary: BoundarySpec) -> WaveSolver {
    WaveSolver::builder()
        .dimension(dim)
        .domain(domain(0.1, 0.9, dim))
        .boundary(boundary)
        .initial_displacement(initial::zero())
        .initial_velocity(initial::zero())
        .build()
        .unwrap()
}
