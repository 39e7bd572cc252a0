//! Ghost-cell padding convention for grid construction.

/// Whether a grid carries one ghost cell beyond the physical domain.
///
/// Mirrored (Neumann) boundaries overwrite the outermost cell with the
/// value two cells inward, so they need one extra cell on each side of
/// `[-a, a]` to keep the physical edge inside the evolving region.
/// Fixed-value (Dirichlet) boundaries pin the edge itself and need none.
///
/// # Examples
///
/// ```
/// use ripple_space::{Line1D, Padding, Space};
///
/// let flush = Line1D::new(1.0, 0.5, Padding::Flush).unwrap();
/// assert_eq!(flush.points(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
///
/// let ghost = Line1D::new(1.0, 0.5, Padding::GhostCells).unwrap();
/// assert_eq!(ghost.cell_count(), 7);
/// assert_eq!(ghost.points()[0], -1.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Padding {
    /// Axis spans exactly `[-a, a]`.
    #[default]
    Flush,
    /// Axis spans `[-a - h, a + h]`: one ghost cell on each side.
    GhostCells,
}

impl Padding {
    /// Number of extra cells added at each end of an axis.
    pub fn ghost_width(self) -> usize {
        match self {
            Self::Flush => 0,
            Self::GhostCells => 1,
        }
    }
}
