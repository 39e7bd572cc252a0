//! 1D line grid.

use crate::axis::axis_points;
use crate::error::SpaceError;
use crate::padding::Padding;
use crate::space::Space;
use ripple_core::Coord;
use smallvec::smallvec;

/// A one-dimensional grid over `[-a, a]`.
///
/// Cell `i` sits at `points()[i]`. With [`Padding::GhostCells`] the first
/// and last cells lie one spacing outside the physical domain.
///
/// # Examples
///
/// ```
/// use ripple_space::{Line1D, Padding, Space};
///
/// let line = Line1D::new(1.0, 0.25, Padding::Flush).unwrap();
/// assert_eq!(line.len(), 9);
/// assert_eq!(line.ndim(), 1);
/// assert!(line.is_edge(0));
/// assert!(!line.is_edge(4));
/// ```
#[derive(Debug, Clone)]
pub struct Line1D {
    points: Vec<f64>,
    coords: Vec<Coord>,
    shape: [usize; 1],
    half_width: f64,
    spacing: f64,
    padding: Padding,
}

impl Line1D {
    /// Sample `[-half_width, half_width]` every `spacing` units.
    pub fn new(half_width: f64, spacing: f64, padding: Padding) -> Result<Self, SpaceError> {
        let points = axis_points(half_width, spacing, padding)?;
        let coords = points.iter().map(|&x| smallvec![x]).collect();
        let shape = [points.len()];
        Ok(Self {
            points,
            coords,
            shape,
            half_width,
            spacing,
            padding,
        })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.shape[0]
    }

    /// Always returns `false`: construction requires at least three points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cell positions as plain scalars.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Index of the middle cell.
    pub fn center(&self) -> usize {
        self.len() / 2
    }
}

impl Space for Line1D {
    fn ndim(&self) -> usize {
        1
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn coordinates(&self) -> &[Coord] {
        &self.coords
    }

    fn spacing(&self) -> f64 {
        self.spacing
    }

    fn half_width(&self) -> f64 {
        self.half_width
    }

    fn padding(&self) -> Padding {
        self.padding
    }

    fn is_edge(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn coordinates_match_points() {
        let line = Line1D::new(1.0, 0.5, Padding::Flush).unwrap();
        let xs: Vec<f64> = line.coordinates().iter().map(|c| c[0]).collect();
        assert_eq!(xs, line.points());
        assert_eq!(line.center(), 2);
        assert_eq!(line.points()[line.center()], 0.0);
    }

    #[test]
    fn ghost_padding_widens_line() {
        let flush = Line1D::new(1.0, 0.04, Padding::Flush).unwrap();
        let ghost = Line1D::new(1.0, 0.04, Padding::GhostCells).unwrap();
        assert_eq!(ghost.len(), flush.len() + 2);
        assert_eq!(ghost.padding(), Padding::GhostCells);
        assert!(ghost.points()[0] < -1.0);
    }

    #[test]
    fn edges() {
        let line = Line1D::new(1.0, 0.5, Padding::Flush).unwrap();
        let edges: Vec<usize> = (0..line.len()).filter(|&i| line.is_edge(i)).collect();
        assert_eq!(edges, vec![0, 4]);
    }

    #[test]
    fn downcast_from_dyn() {
        let line = Line1D::new(1.0, 0.5, Padding::Flush).unwrap();
        let space: &dyn Space = &line;
        assert!(space.downcast_ref::<Line1D>().is_some());
        assert!(space.downcast_ref::<crate::Grid2D>().is_none());
    }

    #[test]
    fn compliance_flush() {
        let line = Line1D::new(1.0, 0.1, Padding::Flush).unwrap();
        compliance::run_full_compliance(&line);
    }

    #[test]
    fn compliance_ghost() {
        let line = Line1D::new(2.0, 0.25, Padding::GhostCells).unwrap();
        compliance::run_full_compliance(&line);
    }
}
