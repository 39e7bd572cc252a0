//! Strongly-typed identifiers and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Monotonically increasing step counter.
///
/// Step 0 is the state produced by construction. Each call to the
/// solver's `advance()` increments it by one, and the absolute simulation
/// time of the published field is `step * dt`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepIndex(pub u64);

impl StepIndex {
    /// The step following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Absolute simulation time at this step for a given `dt`.
    pub fn time(self, dt: f64) -> f64 {
        self.0 as f64 * dt
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepIndex {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A physical coordinate of a grid cell.
///
/// `[x]` on a 1D line, `[x, y]` on a 2D grid. `SmallVec<[f64; 2]>` keeps
/// both cases inline without a heap allocation per cell.
pub type Coord = SmallVec<[f64; 2]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_index_next_and_time() {
        let s = StepIndex(3);
        assert_eq!(s.next(), StepIndex(4));
        assert!((s.time(0.5) - 1.5).abs() < 1e-15);
        assert_eq!(StepIndex::default(), StepIndex(0));
    }

    #[test]
    fn step_index_display() {
        assert_eq!(format!("{}", StepIndex::from(42)), "42");
    }
}
