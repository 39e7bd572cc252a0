//! Frame loop for Ripple wave simulations.
//!
//! A renderer plugs in as a [`FrameSink`]; the engine calls the solver's
//! `advance` once per frame and hands the sink a read-only [`Snapshot`].
//! Two modes are provided:
//!
//! - [`Simulation`]: lockstep, on the caller's thread. The snapshot
//!   borrows the solver, so the next step cannot run while it is held.
//! - [`FrameStream`]: the simulation runs on a background thread and
//!   publishes owned snapshots through a bounded channel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod frame;
pub mod lockstep;
pub mod metrics;
pub mod realtime;
pub mod sink;

pub use config::{ConfigError, SimulationConfig};
pub use frame::Snapshot;
pub use lockstep::{Simulation, StepResult};
pub use metrics::{RunReport, StepMetrics};
pub use realtime::FrameStream;
pub use sink::FrameSink;
