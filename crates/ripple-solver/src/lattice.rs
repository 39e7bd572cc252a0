//! The grid a solver owns, chosen by dimension.

use ripple_core::{Coord, Dimension, DomainParams};
use ripple_space::{Grid2D, Line1D, Padding, Space, SpaceError};

/// Either a [`Line1D`] or a [`Grid2D`].
///
/// The set of dimensions is closed, so the solver holds the concrete grid
/// rather than a boxed [`Space`].
#[derive(Debug, Clone)]
pub enum Lattice {
    /// 1D grid.
    Line(Line1D),
    /// 2D grid.
    Plane(Grid2D),
}

impl Lattice {
    /// Build the grid for `dim` over the domain described by `params`.
    pub fn new(dim: Dimension, params: &DomainParams, padding: Padding) -> Result<Self, SpaceError> {
        let (a, h) = (params.half_width(), params.spacing());
        Ok(match dim {
            Dimension::One => Self::Line(Line1D::new(a, h, padding)?),
            Dimension::Two => Self::Plane(Grid2D::new(a, h, padding)?),
        })
    }

    /// The grid as a trait object.
    pub fn space(&self) -> &dyn Space {
        match self {
            Self::Line(line) => line,
            Self::Plane(grid) => grid,
        }
    }

    /// Spatial dimension.
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Line(_) => Dimension::One,
            Self::Plane(_) => Dimension::Two,
        }
    }

    /// `[len]` or `[rows, cols]`.
    pub fn shape(&self) -> &[usize] {
        self.space().shape()
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.space().cell_count()
    }

    /// One coordinate per cell, row-major.
    pub fn coordinates(&self) -> &[Coord] {
        self.space().coordinates()
    }

    /// Flat index of the middle cell.
    pub fn center(&self) -> usize {
        match self {
            Self::Line(line) => line.center(),
            Self::Plane(grid) => grid.center(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_by_dimension() {
        let params = DomainParams::new(1.0, 0.25, 1.0, 0.1).unwrap();
        let line = Lattice::new(Dimension::One, &params, Padding::Flush).unwrap();
        assert_eq!(line.shape(), &[9]);
        assert_eq!(line.dimension(), Dimension::One);
        assert_eq!(line.center(), 4);

        let plane = Lattice::new(Dimension::Two, &params, Padding::GhostCells).unwrap();
        assert_eq!(plane.shape(), &[11, 11]);
        assert_eq!(plane.cell_count(), 121);
        assert_eq!(plane.center(), 5 * 11 + 5);
        assert!(plane.space().downcast_ref::<Grid2D>().is_some());
    }
}
