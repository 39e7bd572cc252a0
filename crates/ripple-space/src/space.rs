//! The core `Space` trait and `dyn Space` downcast support.

use crate::padding::Padding;
use ripple_core::Coord;
use std::any::Any;

/// Read-only description of a discretized domain.
///
/// A space owns the coordinate arrays generated once at construction and
/// never changes afterwards. Renderers receive it as `&dyn Space` to label
/// axes; the solver uses the concrete backends directly.
///
/// # Thread Safety
///
/// `Send + Sync` so that a space can travel with a simulation onto a
/// background frame-producing thread.
pub trait Space: Any + Send + Sync + 'static {
    /// Number of spatial dimensions.
    fn ndim(&self) -> usize;

    /// Grid shape: `[len]` in 1D, `[rows, cols]` in 2D.
    fn shape(&self) -> &[usize];

    /// Total number of cells in the space.
    fn cell_count(&self) -> usize {
        self.shape().iter().product()
    }

    /// Physical coordinates of every cell in row-major order.
    fn coordinates(&self) -> &[Coord];

    /// Grid spacing `h`.
    fn spacing(&self) -> f64;

    /// Half-width `a` of the physical domain `[-a, a]`.
    fn half_width(&self) -> f64;

    /// Ghost-cell convention the grid was built with.
    fn padding(&self) -> Padding;

    /// Whether the flat index lies on the outermost ring of the grid.
    fn is_edge(&self, index: usize) -> bool;
}

impl dyn Space {
    /// Attempt to downcast a trait object to a concrete Space type.
    pub fn downcast_ref<T: Space>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
