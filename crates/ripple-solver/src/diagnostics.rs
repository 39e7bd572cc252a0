//! Field diagnostics: amplitude, discrete energy, and reflection symmetry.
//!
//! All functions take plain slices plus a shape so they work on the live
//! solver buffers as well as on snapshots.

pub use ripple_core::max_abs;

/// Discrete energy between two consecutive fields.
///
/// ```text
/// E = 1/2 * sum(((curr - prev) / dt)^2) * h^d
///   + 1/2 * c^2 * sum(D+ curr . D+ prev) * h^d
/// ```
///
/// `D+` is the forward difference along each axis, taken only between
/// cells that are both inside the array (no wrap). Pairing the gradients
/// of the two time levels makes this the quantity the leapfrog scheme
/// conserves in the interior.
///
/// # Panics
///
/// Panics if `prev` and `curr` differ in length or `shape` has neither one
/// nor two axes.
pub fn discrete_energy(prev: &[f64], curr: &[f64], shape: &[usize], h: f64, c: f64, dt: f64) -> f64 {
    assert_eq!(prev.len(), curr.len(), "discrete_energy: length mismatch");
    let cell_volume = h.powi(shape.len() as i32);

    let kinetic: f64 = prev
        .iter()
        .zip(curr)
        .map(|(p, q)| {
            let v = (q - p) / dt;
            v * v
        })
        .sum();

    let inv_h2 = 1.0 / (h * h);
    let grad = |u: &[f64], i: usize, j: usize| u[j] - u[i];
    let mut potential = 0.0;
    match *shape {
        [n] => {
            for i in 0..n.saturating_sub(1) {
                potential += grad(curr, i, i + 1) * grad(prev, i, i + 1);
            }
        }
        [rows, cols] => {
            for r in 0..rows {
                for col in 0..cols {
                    let i = r * cols + col;
                    if col + 1 < cols {
                        potential += grad(curr, i, i + 1) * grad(prev, i, i + 1);
                    }
                    if r + 1 < rows {
                        potential += grad(curr, i, i + cols) * grad(prev, i, i + cols);
                    }
                }
            }
        }
        _ => panic!("discrete_energy: unsupported shape {shape:?}"),
    }

    0.5 * (kinetic + c * c * potential * inv_h2) * cell_volume
}

/// Largest deviation from reflection symmetry.
///
/// In 1D compares `u[i]` with `u[n-1-i]`. In 2D compares every cell with
/// its mirror image across the vertical and the horizontal center line.
/// Zero for a field symmetric about the grid center.
///
/// # Panics
///
/// Panics if `shape` has neither one nor two axes.
pub fn mirror_asymmetry(field: &[f64], shape: &[usize]) -> f64 {
    let mut worst = 0.0_f64;
    match *shape {
        [n] => {
            for i in 0..n / 2 {
                worst = worst.max((field[i] - field[n - 1 - i]).abs());
            }
        }
        [rows, cols] => {
            for r in 0..rows {
                for c in 0..cols {
                    let v = field[r * cols + c];
                    worst = worst.max((v - field[r * cols + (cols - 1 - c)]).abs());
                    worst = worst.max((v - field[(rows - 1 - r) * cols + c]).abs());
                }
            }
        }
        _ => panic!("mirror_asymmetry: unsupported shape {shape:?}"),
    }
    worst
}
