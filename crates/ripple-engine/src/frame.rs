//! Borrowed per-frame view of the solver state.

use ripple_core::{FieldView, StepIndex};
use ripple_solver::{FieldSnapshot, WaveSolver};

/// Read-only view of the field handed to a [`FrameSink`](crate::FrameSink).
///
/// Borrows the solver buffers directly, so producing it costs nothing.
/// Use [`to_owned_snapshot`](Snapshot::to_owned_snapshot) to keep a frame
/// past the next step.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'w> {
    values: &'w [f64],
    shape: &'w [usize],
    step: StepIndex,
    time: f64,
    frame: u64,
}

impl<'w> Snapshot<'w> {
    pub(crate) fn of(solver: &'w WaveSolver, frame: u64) -> Self {
        Self {
            values: solver.field(),
            shape: solver.shape(),
            step: solver.step_index(),
            time: solver.time(),
            frame,
        }
    }

    /// Zero-based frame number within the run.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Copy the field out of the solver.
    pub fn to_owned_snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(self.values, self.shape, self.step, self.time)
    }
}

impl FieldView for Snapshot<'_> {
    fn values(&self) -> &[f64] {
        self.values
    }

    fn shape(&self) -> &[usize] {
        self.shape
    }

    fn step_index(&self) -> StepIndex {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }
}
