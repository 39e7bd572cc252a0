//! Owned copy of the field at one step.

use ripple_core::{FieldView, StepIndex};
use smallvec::SmallVec;

/// A detached copy of the field, safe to hold across `advance` calls or
/// send to another thread.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
    values: Vec<f64>,
    shape: SmallVec<[usize; 2]>,
    step: StepIndex,
    time: f64,
}

impl FieldSnapshot {
    /// Copy `values` into a new snapshot.
    pub fn new(values: &[f64], shape: &[usize], step: StepIndex, time: f64) -> Self {
        Self {
            values: values.to_vec(),
            shape: SmallVec::from_slice(shape),
            step,
            time,
        }
    }

    /// Consume the snapshot, returning the field values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl FieldView for FieldSnapshot {
    fn values(&self) -> &[f64] {
        &self.values
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn step_index(&self) -> StepIndex {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_accessors() {
        let snap = FieldSnapshot::new(&[1.0, -3.0, 2.0], &[3], StepIndex(4), 0.4);
        assert_eq!(snap.shape(), &[3]);
        assert_eq!(snap.step_index(), StepIndex(4));
        assert_eq!(snap.max_abs(), 3.0);
        assert!(snap.is_finite());
        assert_eq!(snap.into_values(), vec![1.0, -3.0, 2.0]);
    }
}
