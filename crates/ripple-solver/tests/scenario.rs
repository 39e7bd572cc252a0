//! Integration test: the 1D `cos(pi x)` scenario.
//!
//! `a = 1, h = 0.04 (n = 50), c = 1, dt = 0.99 h / (c sqrt 2)`, zero
//! initial velocity, free (mirrored) edges.

use std::f64::consts::PI;

use ripple_core::{FieldView, StepIndex};
use ripple_solver::stencil;
use ripple_solver::BoundarySpec;
use ripple_test_utils::{assert_close, assert_fields_close, cosine_line, scenario_params};

#[test]
fn grid_matches_domain() {
    let solver = cosine_line(BoundarySpec::neumann());
    // 51 physical points plus one ghost cell on each side.
    assert_eq!(solver.shape(), &[53]);
    let xs: Vec<f64> = solver.coordinates().iter().map(|c| c[0]).collect();
    assert_close(xs[1], -1.0, 1e-12);
    assert_close(xs[51], 1.0, 1e-12);
    assert_close(xs[0], -1.04, 1e-12);
    assert_close(xs[26], 0.0, 1e-12);
}

#[test]
fn step_zero_equals_displacement_at_interior_points() {
    let solver = cosine_line(BoundarySpec::neumann());
    assert_eq!(solver.step_index(), StepIndex(0));
    let u = solver.field();
    let n = u.len();
    for (i, c) in solver.coordinates().iter().enumerate().take(n - 1).skip(1) {
        assert_eq!(u[i], (PI * c[0]).cos(), "cell {i}");
    }
    assert_eq!(solver.previous_field()[1..n - 1], u[1..n - 1]);
}

#[test]
fn first_step_follows_explicit_update() {
    let mut solver = cosine_line(BoundarySpec::neumann());
    let params = scenario_params();
    let (h, c, dt) = (params.spacing(), params.wave_speed(), params.dt());

    let prev = solver.previous_field().to_vec();
    let curr = solver.field().to_vec();
    let mut lap = vec![0.0; curr.len()];
    stencil::laplacian_1d(&curr, h, &mut lap);
    let expected: Vec<f64> = (0..curr.len())
        .map(|i| 2.0 * curr[i] - prev[i] + (c * dt).powi(2) * lap[i])
        .collect();

    solver.advance();
    let u = solver.field();
    let n = u.len();
    assert_fields_close(&u[1..n - 1], &expected[1..n - 1], 1e-12);
    assert_eq!(u[0], u[2]);
    assert_eq!(u[n - 1], u[n - 3]);
    assert_close(solver.time(), dt, 1e-18);
}

#[test]
fn standing_wave_inverts_after_half_period() {
    // cos(pi x) is a Neumann eigenmode: u(0, t) ~ cos(pi c t), so the
    // center swings from 1 to -1 by t = 1.
    let mut solver = cosine_line(BoundarySpec::neumann());
    let center = solver.lattice().center();
    assert_close(solver.field()[center], 1.0, 1e-12);
    let steps = (1.0 / scenario_params().dt()).round() as u64;
    solver.advance_by(steps);
    assert_close(solver.field()[center], -1.0, 1e-2);
    assert!(solver.is_finite());
}
