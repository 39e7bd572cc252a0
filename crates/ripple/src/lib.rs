//! Ripple: an explicit finite-difference solver for the scalar wave equation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Ripple sub-crates. For most users, adding `ripple` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ripple::prelude::*;
//! use std::ops::ControlFlow;
//!
//! // 1D string on [-1, 1], 50 intervals, fixed ends, plucked in the middle.
//! let config = SimulationConfig {
//!     dimension: Dimension::One,
//!     grid_points: 50,
//!     boundary: BoundarySpec::dirichlet(),
//!     ..SimulationConfig::default()
//! };
//! let pluck = |c: &Coord| 1.0 - c[0].abs();
//! let mut sim = Simulation::new(config, pluck, initial::zero()).unwrap();
//!
//! let mut peak = 0.0_f64;
//! let report = sim.run(&mut |frame: &Snapshot<'_>| {
//!     peak = peak.max(frame.max_abs());
//!     ControlFlow::Continue(())
//! });
//! assert_eq!(report.frames, sim.frame_count());
//! assert!(peak > 0.0 && peak < 1.5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ripple-core` | Domain parameters, dimension, errors, field view |
//! | [`space`] | `ripple-space` | 1D and 2D grids, padding convention |
//! | [`solver`] | `ripple-solver` | Stencils, boundary policy, leapfrog integrator |
//! | [`engine`] | `ripple-engine` | Configuration, lockstep loop, frame stream |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`ripple-core`).
///
/// Contains [`types::DomainParams`] with the CFL check, [`types::Dimension`],
/// [`types::WaveError`] and the read-only [`types::FieldView`] trait.
pub use ripple_core as types;

/// Regular grids (`ripple-space`).
///
/// Provides the [`space::Space`] trait and the [`space::Line1D`] and
/// [`space::Grid2D`] backends.
pub use ripple_space as space;

/// The wave solver (`ripple-solver`).
///
/// [`solver::WaveSolver`] plus its boundary policy, stencils, initial
/// conditions and diagnostics.
pub use ripple_solver as solver;

/// Frame loop (`ripple-engine`).
///
/// [`engine::Simulation`] for lockstep stepping, [`engine::FrameStream`]
/// for a background producer.
pub use ripple_engine as engine;

/// Common imports for typical Ripple usage.
///
/// ```rust
/// use ripple::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use ripple_core::{Coord, Dimension, DomainParams, FieldView, StepIndex, WaveError};

    // Space
    pub use ripple_space::{Grid2D, Line1D, Padding, Space};

    // Solver
    pub use ripple_solver::{
        initial, BoundarySpec, EdgeCondition, EdgeDrive, EdgeValues, FieldFn, FieldSnapshot,
        InitialCondition, PointSource, WaveSolver,
    };

    // Engine
    pub use ripple_engine::{
        ConfigError, FrameSink, FrameStream, RunReport, Simulation, SimulationConfig, Snapshot,
        StepMetrics, StepResult,
    };
}
