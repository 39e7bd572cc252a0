//! Read-only access to a published field.

use crate::id::StepIndex;

/// Read-only view of the scalar field at one step.
///
/// This is what renderers and diagnostics consume. Implementors never hand
/// out mutable access, so nothing outside the solver can change the field
/// between steps.
pub trait FieldView {
    /// Field values in row-major order (a single row in 1D).
    fn values(&self) -> &[f64];

    /// Grid shape: `[len]` in 1D, `[rows, cols]` in 2D.
    fn shape(&self) -> &[usize];

    /// The step at which this field was produced.
    fn step_index(&self) -> StepIndex;

    /// Absolute simulation time of this field.
    fn time(&self) -> f64;

    /// Largest absolute value in the field, `0.0` for an empty field.
    ///
    /// NaN anywhere in the field makes the result NaN, see [`max_abs`].
    fn max_abs(&self) -> f64 {
        max_abs(self.values())
    }

    /// Whether every value is finite.
    fn is_finite(&self) -> bool {
        self.values().iter().all(|v| v.is_finite())
    }
}

/// Largest absolute value, `0.0` for an empty slice. NaN is propagated.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |m, &v| {
        if v.is_nan() || m.is_nan() {
            f64::NAN
        } else {
            m.max(v.abs())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Field(Vec<f64>);

    impl FieldView for Field {
        fn values(&self) -> &[f64] {
            &self.0
        }
        fn shape(&self) -> &[usize] {
            &[]
        }
        fn step_index(&self) -> StepIndex {
            StepIndex(0)
        }
        fn time(&self) -> f64 {
            0.0
        }
    }

    #[test]
    fn default_max_abs_propagates_nan() {
        assert_eq!(Field(vec![]).max_abs(), 0.0);
        assert_eq!(Field(vec![0.5, -2.0]).max_abs(), 2.0);
        let field = Field(vec![1.0, f64::NAN, -3.0]);
        assert!(field.max_abs().is_nan());
        assert!(!field.is_finite());
    }
}
