//! Space trait compliance test helpers.
//!
//! These functions verify that a Space implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules.

use crate::space::Space;

/// Assert that there is exactly one coordinate per cell, each with `ndim` components.
pub fn assert_coordinates_cover_cells(space: &dyn Space) {
    let coords = space.coordinates();
    assert_eq!(
        coords.len(),
        space.cell_count(),
        "coordinate count {} != cell_count {}",
        coords.len(),
        space.cell_count()
    );
    for (i, c) in coords.iter().enumerate() {
        assert_eq!(c.len(), space.ndim(), "coordinate {i} has {} components", c.len());
    }
}

/// Assert that neighbouring cells along every axis are `spacing` apart.
pub fn assert_uniform_spacing(space: &dyn Space) {
    let coords = space.coordinates();
    let shape = space.shape();
    let h = space.spacing();
    let cols = *shape.last().unwrap_or(&0);
    for (i, c) in coords.iter().enumerate() {
        if (i + 1) % cols != 0 {
            let dx = coords[i + 1][0] - c[0];
            assert!((dx - h).abs() < 1e-9, "x step at {i} is {dx}, expected {h}");
        }
        if space.ndim() == 2 && i + cols < coords.len() {
            let dy = coords[i + cols][1] - c[1];
            assert!((dy - h).abs() < 1e-9, "y step at {i} is {dy}, expected {h}");
        }
    }
}

/// Assert that the grid is symmetric about the origin.
pub fn assert_symmetric_about_origin(space: &dyn Space) {
    let coords = space.coordinates();
    let n = coords.len();
    for i in 0..n {
        let a = &coords[i];
        let b = &coords[n - 1 - i];
        for axis in 0..space.ndim() {
            assert!(
                (a[axis] + b[axis]).abs() < 1e-9,
                "cells {i} and {} are not mirror images on axis {axis}",
                n - 1 - i
            );
        }
    }
}

/// Assert that the outermost cells lie at `±a` (flush) or `±(a + h)` (ghost).
pub fn assert_extent_matches_padding(space: &dyn Space) {
    let coords = space.coordinates();
    let extent = space.half_width() + space.padding().ghost_width() as f64 * space.spacing();
    let first = &coords[0];
    for axis in 0..space.ndim() {
        assert!(
            (first[axis] + extent).abs() < 1e-9,
            "first cell at {} on axis {axis}, expected {}",
            first[axis],
            -extent
        );
    }
}

/// Assert that edge cells are exactly those on the outer ring.
pub fn assert_edge_ring(space: &dyn Space) {
    let shape = space.shape();
    let cols = shape[shape.len() - 1];
    let rows = if shape.len() == 2 { shape[0] } else { 1 };
    for i in 0..space.cell_count() {
        let (r, c) = (i / cols, i % cols);
        let on_ring = if space.ndim() == 1 {
            c == 0 || c + 1 == cols
        } else {
            r == 0 || c == 0 || r + 1 == rows || c + 1 == cols
        };
        assert_eq!(space.is_edge(i), on_ring, "is_edge({i}) mismatch");
    }
}

/// Run all compliance checks on a space.
pub fn run_full_compliance(space: &dyn Space) {
    assert_coordinates_cover_cells(space);
    assert_uniform_spacing(space);
    assert_extent_matches_padding(space);
    assert_edge_ring(space);
    assert_symmetric_about_origin(space);
}
