//! Nearest-neighbour Laplacian stencils.
//!
//! 3-point in 1D, 5-point in 2D, normalized by `h^2`. Indices wrap
//! periodically at the array edges. The wrapped values only reach the
//! outermost ring, which the boundary policy overwrites right after the
//! update, so the wrap never leaks into the published field.

/// Index of the cell before `i` on an axis of length `len`, wrapping at 0.
#[inline]
pub(crate) fn prev_wrapped(i: usize, len: usize) -> usize {
    if i == 0 {
        len - 1
    } else {
        i - 1
    }
}

/// Index of the cell after `i` on an axis of length `len`, wrapping at the end.
#[inline]
pub(crate) fn next_wrapped(i: usize, len: usize) -> usize {
    if i + 1 == len {
        0
    } else {
        i + 1
    }
}

/// 3-point Laplacian: `(u[i+1] + u[i-1] - 2 u[i]) / h^2`.
///
/// # Panics
///
/// Panics if `out.len() != u.len()`.
pub fn laplacian_1d(u: &[f64], h: f64, out: &mut [f64]) {
    assert_eq!(u.len(), out.len(), "laplacian_1d: length mismatch");
    let n = u.len();
    let inv_h2 = 1.0 / (h * h);
    for i in 0..n {
        let l = u[prev_wrapped(i, n)];
        let r = u[next_wrapped(i, n)];
        out[i] = (l + r - 2.0 * u[i]) * inv_h2;
    }
}

/// 5-point Laplacian on a row-major `rows x cols` array:
/// `(u[i+1,j] + u[i-1,j] + u[i,j+1] + u[i,j-1] - 4 u[i,j]) / h^2`.
///
/// The vertical and horizontal pairs are summed separately so that
/// mirroring the field along either axis mirrors the result exactly.
///
/// # Panics
///
/// Panics if `u` or `out` do not hold `rows * cols` values.
pub fn laplacian_2d(u: &[f64], rows: usize, cols: usize, h: f64, out: &mut [f64]) {
    assert_eq!(u.len(), rows * cols, "laplacian_2d: field size mismatch");
    assert_eq!(out.len(), rows * cols, "laplacian_2d: output size mismatch");
    let inv_h2 = 1.0 / (h * h);
    for r in 0..rows {
        let up = prev_wrapped(r, rows) * cols;
        let down = next_wrapped(r, rows) * cols;
        let row = r * cols;
        for c in 0..cols {
            let left = prev_wrapped(c, cols);
            let right = next_wrapped(c, cols);
            let vertical = u[up + c] + u[down + c];
            let horizontal = u[row + left] + u[row + right];
            out[row + c] = (vertical + horizontal - 4.0 * u[row + c]) * inv_h2;
        }
    }
}

/// Dispatch on the grid shape: `[len]` or `[rows, cols]`.
///
/// # Panics
///
/// Panics if `shape` has neither one nor two axes.
pub fn laplacian(u: &[f64], shape: &[usize], h: f64, out: &mut [f64]) {
    match *shape {
        [_] => laplacian_1d(u, h, out),
        [rows, cols] => laplacian_2d(u, rows, cols, h, out),
        _ => panic!("laplacian: unsupported shape {shape:?}"),
    }
}
