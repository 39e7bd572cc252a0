//! Explicit finite-difference wave-equation solver.
//!
//! Integrates `u_tt = c^2 * lap(u)` on the grids from `ripple-space` with
//! the leapfrog (central-difference) scheme.
//!
//! # Step order (each `advance`)
//!
//! 1. [`stencil`]: Laplacian of the current field, periodic indexing
//! 2. [`WaveSolver`]: `u_next = 2 u - u_prev + (c dt)^2 lap(u)`
//! 3. [`boundary`]: point source, then edge correction, at `t = step * dt`
//! 4. buffer swap
//!
//! The solver is built with [`WaveSolver::builder`]; all validation
//! happens there and `advance` itself cannot fail.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod boundary;
pub mod diagnostics;
pub mod initial;
pub mod lattice;
pub mod snapshot;
pub mod stencil;
pub mod wave;

pub use boundary::{BoundarySpec, EdgeCondition, EdgeDrive, EdgeValues, PointSource};
pub use initial::{FieldFn, InitialCondition};
pub use lattice::Lattice;
pub use snapshot::FieldSnapshot;
pub use wave::{WaveSolver, WaveSolverBuilder};
