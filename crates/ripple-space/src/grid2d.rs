//! 2D square grid, the tensor product of one sampled axis with itself.

use crate::axis::axis_points;
use crate::error::SpaceError;
use crate::padding::Padding;
use crate::space::Space;
use ripple_core::Coord;
use smallvec::smallvec;

/// Maximum number of cells in a 2D grid, ghost cells included.
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// A two-dimensional grid over `[-a, a] x [-a, a]`.
///
/// Cells are stored row-major. Row `r` has `y = axis[r]` and column `c`
/// has `x = axis[c]`, so `coordinates()[r * cols + c] == [axis[c], axis[r]]`,
/// the same layout a meshgrid of the axis with itself produces.
///
/// # Examples
///
/// ```
/// use ripple_space::{Grid2D, Padding, Space};
///
/// let grid = Grid2D::new(1.0, 0.5, Padding::Flush).unwrap();
/// assert_eq!(grid.shape(), &[5, 5]);
/// assert_eq!(grid.cell_count(), 25);
///
/// let center = grid.center();
/// assert_eq!(center, grid.index(2, 2));
/// assert_eq!(grid.coordinates()[center].as_slice(), &[0.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Grid2D {
    axis: Vec<f64>,
    coords: Vec<Coord>,
    shape: [usize; 2],
    half_width: f64,
    spacing: f64,
    padding: Padding,
}

impl Grid2D {
    /// Sample `[-half_width, half_width]` on both axes every `spacing` units.
    ///
    /// Fails with [`SpaceError::TooManyPoints`] above [`MAX_GRID_CELLS`].
    pub fn new(half_width: f64, spacing: f64, padding: Padding) -> Result<Self, SpaceError> {
        let axis = axis_points(half_width, spacing, padding)?;
        let n = axis.len();
        let too_many = SpaceError::TooManyPoints {
            requested: (n as f64) * (n as f64),
            max: MAX_GRID_CELLS,
        };
        let cells = n
            .checked_mul(n)
            .filter(|&cells| cells <= MAX_GRID_CELLS)
            .ok_or(too_many)?;
        let mut coords = Vec::with_capacity(cells);
        for &y in &axis {
            for &x in &axis {
                coords.push(smallvec![x, y]);
            }
        }
        Ok(Self {
            axis,
            coords,
            shape: [n, n],
            half_width,
            spacing,
            padding,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// The sampled axis shared by x and y.
    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    /// Flat row-major index of `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }

    /// Flat index of the middle cell.
    pub fn center(&self) -> usize {
        self.index(self.rows() / 2, self.cols() / 2)
    }
}

impl Space for Grid2D {
    fn ndim(&self) -> usize {
        2
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
        let (r, c) = (index / self.cols(), index % self.cols());
        r == 0 || c == 0 || r + 1 == self.rows() || c + 1 == self.cols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn row_major_meshgrid_layout() {
        let grid = Grid2D::new(1.0, 1.0, Padding::Flush).unwrap();
        let coords: Vec<(f64, f64)> = grid.coordinates().iter().map(|c| (c[0], c[1])).collect();
        assert_eq!(
            coords,
            vec![
                (-1.0, -1.0),
                (0.0, -1.0),
                (1.0, -1.0),
                (-1.0, 0.0),
                (0.0, 0.0),
                (1.0, 0.0),
                (-1.0, 1.0),
                (0.0, 1.0),
                (1.0, 1.0),
            ]
        );
    }

    #[test]
    fn edge_ring() {
        let grid = Grid2D::new(1.0, 0.5, Padding::Flush).unwrap();
        let edge_count = (0..grid.cell_count()).filter(|&i| grid.is_edge(i)).count();
        // 5x5 grid: 25 cells, 9 interior.
        assert_eq!(edge_count, 16);
        assert!(!grid.is_edge(grid.center()));
    }

    #[test]
    fn ghost_padding_widens_both_axes() {
        let grid = Grid2D::new(1.0, 0.04, Padding::GhostCells).unwrap();
        assert_eq!(grid.shape(), &[53, 53]);
        assert_eq!(grid.center(), grid.index(26, 26));
        let c = &grid.coordinates()[grid.center()];
        assert!(c[0].abs() < 1e-12 && c[1].abs() < 1e-12);
    }

    #[test]
    fn rejects_grid_over_cell_cap() {
        // 8193 points per axis is well under the axis cap but not the cell cap.
        let err = Grid2D::new(1.0, 2.0 / 8192.0, Padding::Flush).unwrap_err();
        assert_eq!(
            err,
            SpaceError::TooManyPoints {
                requested: 8193.0 * 8193.0,
                max: MAX_GRID_CELLS,
            }
        );
    }

    #[test]
    fn compliance_flush() {
        let grid = Grid2D::new(1.0, 0.2, Padding::Flush).unwrap();
        compliance::run_full_compliance(&grid);
    }

    #[test]
    fn compliance_ghost() {
        let grid = Grid2D::new(0.5, 0.125, Padding::GhostCells).unwrap();
        compliance::run_full_compliance(&grid);
    }
}
