//! Regular grids for Ripple simulations.
//!
//! This crate defines the [`Space`] trait, the read-only description of a
//! discretized domain, along with the two concrete grids the solver runs
//! on.
//!
//! # Backends
//!
//! - [`Line1D`]: points `-a, -a+h, ..., a` on a line
//! - [`Grid2D`]: the row-major tensor product of that axis with itself
//!
//! Both take a [`Padding`] that decides whether one ghost cell is added
//! beyond `±a` on each side.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod grid2d;
pub mod line1d;
pub mod padding;
pub mod space;

#[cfg(test)]
pub(crate) mod compliance;

pub use axis::{axis_points, MAX_AXIS_POINTS, MIN_AXIS_POINTS};
pub use error::SpaceError;
pub use grid2d::{Grid2D, MAX_GRID_CELLS};
pub use line1d::Line1D;
pub use padding::Padding;
pub use space::Space;
