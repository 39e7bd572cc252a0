//! Benchmark profiles and utilities for the Ripple wave simulator.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking and
//! examples:
//!
//! - [`reference_profile`]: 2D, 200 intervals per axis (~41K cells), point source
//! - [`stress_profile`]: 2D, 600 intervals per axis (~363K cells)
//! - [`line_profile`]: 1D, 10K intervals, driven left edge
//! - [`random_bumps`]: deterministic multi-bump initial displacement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::f64::consts::PI;

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ripple_core::{Coord, Dimension};
use ripple_engine::SimulationConfig;
use ripple_solver::{BoundarySpec, EdgeCondition, EdgeDrive, PointSource};

/// Build the reference profile: `[-1, 1]^2` with 200 intervals per axis.
///
/// Mirrored edges, 0.5-amplitude source at 3 cycles per unit time,
/// `dt` at the 2D CFL limit, one unit of simulated time.
pub fn reference_profile() -> SimulationConfig {
    SimulationConfig {
        dimension: Dimension::Two,
        grid_points: 200,
        boundary: BoundarySpec::neumann().with_source(PointSource::new(0.5, 3.0)),
        ..SimulationConfig::default()
    }
}

/// Build the stress profile: same as [`reference_profile`] at 600 intervals.
pub fn stress_profile() -> SimulationConfig {
    SimulationConfig {
        grid_points: 600,
        ..reference_profile()
    }
}

/// Build a 1D profile with 10K intervals and a driven left edge.
///
/// The drive runs at `omega = 4 pi` and switches off at `t = 0.25`.
pub fn line_profile() -> SimulationConfig {
    SimulationConfig {
        dimension: Dimension::One,
        grid_points: 10_000,
        courant_divisor: 1.0,
        boundary: BoundarySpec::new(EdgeCondition::DrivenNeumann(EdgeDrive::new(
            4.0 * PI,
            0.25,
        ))),
        ..SimulationConfig::default()
    }
}

/// Uniform sample in `[0, 1)` from the top 53 bits of a `u64`.
fn unit_f64(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

/// Initial displacement made of `count` Gaussian bumps on `[-1, 1]^ndim`.
///
/// Centers and amplitudes come from a ChaCha8 stream seeded with `seed`,
/// so the same seed always yields the same field.
pub fn random_bumps(count: usize, ndim: usize, seed: u64) -> impl Fn(&Coord) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bumps: Vec<(Vec<f64>, f64)> = (0..count)
        .map(|_| {
            let center = (0..ndim).map(|_| 1.6 * unit_f64(&mut rng) - 0.8).collect();
            let amplitude = unit_f64(&mut rng) - 0.5;
            (center, amplitude)
        })
        .collect();
    let inv_w2 = 1.0 / (0.1 * 0.1);
    move |c: &Coord| {
        bumps
            .iter()
            .map(|(center, amplitude)| {
                let r2: f64 = center
                    .iter()
                    .zip(c.iter())
                    .map(|(x0, x)| (x - x0) * (x - x0))
                    .sum();
                amplitude * (-r2 * inv_w2).exp()
            })
            .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn reference_profile_validates() {
        reference_profile().validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile().validate().unwrap();
    }

    #[test]
    fn line_profile_validates() {
        line_profile().validate().unwrap();
    }

    #[test]
    fn random_bumps_deterministic() {
        let a = random_bumps(5, 2, 42);
        let b = random_bumps(5, 2, 42);
        let c = random_bumps(5, 2, 43);
        let p: Coord = smallvec![0.1, -0.3];
        assert_eq!(a(&p), b(&p));
        assert_ne!(a(&p), c(&p));
    }

    #[test]
    fn unit_samples_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let u = unit_f64(&mut rng);
            assert!((0.0..1.0).contains(&u));
        }
    }
}
