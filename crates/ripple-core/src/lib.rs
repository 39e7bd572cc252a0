//! Core types and traits for the Ripple wave simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Ripple workspace:
//! domain parameters and the CFL bound, step identifiers, error types,
//! and the read-only field view handed to renderers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod id;
pub mod traits;

pub use domain::{Dimension, DomainParams};
pub use error::WaveError;
pub use id::{Coord, StepIndex};
pub use traits::{max_abs, FieldView};
