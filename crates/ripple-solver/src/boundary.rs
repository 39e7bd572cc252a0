//! Boundary policy: edge conditions and point-source injection.
//!
//! The policy runs strictly after the stencil update, every step, in a
//! fixed order:
//!
//! ```text
//! point source (2D)  ->  edge condition  ->  edge drive (1D)
//! ```
//!
//! The source writes the center cell, which is never an edge cell on a
//! grid with at least five points per axis, so the edge correction cannot
//! overwrite it.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use ripple_core::{Dimension, WaveError};
use ripple_space::Padding;

/// Minimum points per axis for a point source: the center must not be an edge cell.
pub const MIN_SOURCE_AXIS_POINTS: usize = 5;

/// Fixed values held by a Dirichlet boundary on each edge.
///
/// In 1D only `left` and `right` are used. In 2D `bottom` (row 0) and
/// `top` (last row) are written first, then `left` (column 0) and `right`
/// (last column), so the column values win at the corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeValues {
    /// Value at the first cell / first column.
    pub left: f64,
    /// Value at the last cell / last column.
    pub right: f64,
    /// Value along the first row (2D only).
    pub bottom: f64,
    /// Value along the last row (2D only).
    pub top: f64,
}

impl EdgeValues {
    /// All edges held at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from `[left, right, bottom, top]`.
    pub fn from_array([left, right, bottom, top]: [f64; 4]) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    fn validate(&self) -> Result<(), WaveError> {
        for (name, v) in [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("top", self.top),
        ] {
            if !v.is_finite() {
                return Err(WaveError::invalid(format!(
                    "dirichlet {name} value must be finite, got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// Time-windowed sinusoidal drive on cell 1 of a 1D mirrored boundary.
///
/// While `t < cutoff`, cell 1 is replaced by `amplitude * sin(omega * t)`
/// after the mirror correction. From the cutoff onwards the boundary
/// behaves as plain Neumann.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDrive {
    amplitude: f64,
    omega: f64,
    cutoff: f64,
}

impl EdgeDrive {
    /// Default drive amplitude.
    pub const DEFAULT_AMPLITUDE: f64 = 0.5;

    /// A drive at angular frequency `omega` that stops at time `cutoff`.
    pub fn new(omega: f64, cutoff: f64) -> Self {
        Self {
            amplitude: Self::DEFAULT_AMPLITUDE,
            omega,
            cutoff,
        }
    }

    /// Override the drive amplitude (default: 0.5).
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Drive amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Angular frequency in radians per unit time.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Time at which the drive switches off.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Whether the drive is on at time `t`.
    pub fn is_active(&self, t: f64) -> bool {
        t < self.cutoff
    }

    /// Driven value at time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (self.omega * t).sin()
    }

    fn validate(&self) -> Result<(), WaveError> {
        if !self.amplitude.is_finite() {
            return Err(WaveError::invalid(format!(
                "edge drive amplitude must be finite, got {}",
                self.amplitude
            )));
        }
        if !self.omega.is_finite() {
            return Err(WaveError::invalid(format!(
                "edge drive omega must be finite, got {}",
                self.omega
            )));
        }
        if self.cutoff.is_nan() || self.cutoff < 0.0 {
            return Err(WaveError::invalid(format!(
                "edge drive cutoff must be >= 0, got {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}

/// Sinusoidal source forced at the center cell of a 2D grid.
///
/// The center is overwritten with `amplitude * sin(2*pi*frequency*t)`
/// every step. A zero amplitude disables injection entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSource {
    amplitude: f64,
    frequency: f64,
}

impl PointSource {
    /// A source with the given amplitude and frequency (cycles per unit time).
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Source amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Source frequency in cycles per unit time.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Angular frequency `2*pi*frequency`.
    pub fn omega(&self) -> f64 {
        2.0 * PI * self.frequency
    }

    /// Whether the source injects anything at all.
    pub fn is_active(&self) -> bool {
        self.amplitude != 0.0
    }

    /// Injected value at time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (self.omega() * t).sin()
    }

    fn validate(&self) -> Result<(), WaveError> {
        if !self.amplitude.is_finite() {
            return Err(WaveError::invalid(format!(
                "source amplitude must be finite, got {}",
                self.amplitude
            )));
        }
        if !self.frequency.is_finite() || self.frequency < 0.0 {
            return Err(WaveError::invalid(format!(
                "source frequency must be finite and >= 0, got {}",
                self.frequency
            )));
        }
        Ok(())
    }
}

/// Correction applied to the outermost cells after every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeCondition {
    /// Zero-gradient reflecting boundary: each edge copies the cell two
    /// inward. Grids carry one ghost cell per side.
    Neumann,
    /// Fixed-value boundary: edges are pinned every step. No ghost cells.
    Dirichlet(EdgeValues),
    /// 1D Neumann with cell 1 replaced by a sinusoid until a cutoff time.
    DrivenNeumann(EdgeDrive),
}

impl EdgeCondition {
    /// Zero-valued Dirichlet edges.
    pub fn dirichlet() -> Self {
        Self::Dirichlet(EdgeValues::zero())
    }

    /// Short tag naming the variant. The first two parse back via [`FromStr`].
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Neumann => "neumann",
            Self::Dirichlet(_) => "dirichlet",
            Self::DrivenNeumann(_) => "driven",
        }
    }

    /// Ghost-cell convention this condition needs.
    pub fn padding(&self) -> Padding {
        match self {
            Self::Neumann | Self::DrivenNeumann(_) => Padding::GhostCells,
            Self::Dirichlet(_) => Padding::Flush,
        }
    }
}

impl fmt::Display for EdgeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EdgeCondition {
    type Err = WaveError;

    /// Parse `neumann`/`free` or `dirichlet`/`fixed` (case-insensitive).
    ///
    /// The driven variant needs a frequency and cutoff and cannot be
    /// named by a bare tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neumann" | "free" => Ok(Self::Neumann),
            "dirichlet" | "fixed" => Ok(Self::dirichlet()),
            other => Err(WaveError::invalid(format!(
                "unrecognized boundary kind '{other}', expected neumann or dirichlet"
            ))),
        }
    }
}

/// Complete boundary descriptor: an edge condition plus an optional source.
///
/// # Examples
///
/// ```
/// use ripple_solver::{BoundarySpec, EdgeCondition, PointSource};
///
/// let policy = BoundarySpec::new(EdgeCondition::Neumann)
///     .with_source(PointSource::new(0.5, 2.0));
/// assert_eq!(policy.edge(), EdgeCondition::Neumann);
/// assert!(policy.source().is_some());
///
/// let parsed: EdgeCondition = "dirichlet".parse().unwrap();
/// assert_eq!(parsed, EdgeCondition::dirichlet());
/// assert!("periodic".parse::<EdgeCondition>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundarySpec {
    edge: EdgeCondition,
    source: Option<PointSource>,
}

impl BoundarySpec {
    /// A boundary with the given edge condition and no source.
    pub fn new(edge: EdgeCondition) -> Self {
        Self { edge, source: None }
    }

    /// Mirrored boundary, no source.
    pub fn neumann() -> Self {
        Self::new(EdgeCondition::Neumann)
    }

    /// Zero-valued fixed boundary, no source.
    pub fn dirichlet() -> Self {
        Self::new(EdgeCondition::dirichlet())
    }

    /// Attach a point source. A zero-amplitude source is dropped.
    pub fn with_source(mut self, source: PointSource) -> Self {
        self.source = source.is_active().then_some(source);
        self
    }

    /// The edge condition.
    pub fn edge(&self) -> EdgeCondition {
        self.edge
    }

    /// The active point source, if any.
    pub fn source(&self) -> Option<PointSource> {
        self.source
    }

    /// Ghost-cell convention the grid must be built with.
    pub fn padding(&self) -> Padding {
        self.edge.padding()
    }

    /// Check the descriptor against the dimension and grid shape.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidParameters`] if:
    /// - a point source is used in 1D, on an axis shorter than
    ///   [`MIN_SOURCE_AXIS_POINTS`], or on an even-length axis
    /// - an edge drive is used in 2D
    /// - any value is non-finite
    pub fn validate(&self, dim: Dimension, shape: &[usize]) -> Result<(), WaveError> {
        match &self.edge {
            EdgeCondition::Neumann => {}
            EdgeCondition::Dirichlet(values) => values.validate()?,
            EdgeCondition::DrivenNeumann(drive) => {
                if dim != Dimension::One {
                    return Err(WaveError::invalid(format!(
                        "edge drive is only supported in 1D, got {dim}"
                    )));
                }
                drive.validate()?;
            }
        }
        if let Some(source) = &self.source {
            if dim != Dimension::Two {
                return Err(WaveError::invalid(format!(
                    "point source is only supported in 2D, got {dim}"
                )));
            }
            source.validate()?;
            if let Some(&short) = shape.iter().min() {
                if short < MIN_SOURCE_AXIS_POINTS {
                    return Err(WaveError::invalid(format!(
                        "point source needs at least {MIN_SOURCE_AXIS_POINTS} points per axis, got {short}"
                    )));
                }
            }
            if let Some(&even) = shape.iter().find(|&&n| n % 2 == 0) {
                return Err(WaveError::invalid(format!(
                    "point source needs an odd number of points per axis to have a center cell, got {even}"
                )));
            }
        }
        Ok(())
    }

    /// Apply the policy to a freshly updated field at time `t`.
    ///
    /// `shape` is `[len]` or `[rows, cols]`. Assumes [`validate`](Self::validate)
    /// accepted this descriptor for the same shape.
    pub fn apply(&self, u: &mut [f64], shape: &[usize], t: f64) {
        if let (Some(source), [rows, cols]) = (&self.source, shape) {
            u[(rows / 2) * cols + cols / 2] = source.value_at(t);
        }

        match (&self.edge, shape) {
            (EdgeCondition::Neumann, [n]) => mirror_1d(u, *n),
            (EdgeCondition::Neumann, [rows, cols]) => mirror_2d(u, *rows, *cols),
            (EdgeCondition::Dirichlet(values), [n]) => {
                u[0] = values.left;
                u[n - 1] = values.right;
            }
            (EdgeCondition::Dirichlet(values), [rows, cols]) => {
                pin_2d(u, *rows, *cols, values)
            }
            (EdgeCondition::DrivenNeumann(drive), [n]) => {
                mirror_1d(u, *n);
                if drive.is_active(t) {
                    u[1] = drive.value_at(t);
                }
            }
            // Any other shape was rejected by validate().
            _ => {}
        }
    }
}

impl Default for BoundarySpec {
    fn default() -> Self {
        Self::neumann()
    }
}

fn mirror_1d(u: &mut [f64], n: usize) {
    u[0] = u[2];
    u[n - 1] = u[n - 3];
}

fn mirror_2d(u: &mut [f64], rows: usize, cols: usize) {
    // Rows first: row 0 <- row 2, last row <- third-from-last row.
    u.copy_within(2 * cols..3 * cols, 0);
    u.copy_within((rows - 3) * cols..(rows - 2) * cols, (rows - 1) * cols);
    // Then columns, on every row including the freshly copied ones.
    for r in 0..rows {
        let row = r * cols;
        u[row] = u[row + 2];
        u[row + cols - 1] = u[row + cols - 3];
    }
}

fn pin_2d(u: &mut [f64], rows: usize, cols: usize, values: &EdgeValues) {
    u[..cols].fill(values.bottom);
    u[(rows - 1) * cols..].fill(values.top);
    for r in 0..rows {
        let row = r * cols;
        u[row] = values.left;
        u[row + cols - 1] = values.right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn parse_tags() {
        assert_eq!("neumann".parse::<EdgeCondition>().unwrap(), EdgeCondition::Neumann);
        assert_eq!("Free".parse::<EdgeCondition>().unwrap(), EdgeCondition::Neumann);
        assert_eq!(
            " FIXED ".parse::<EdgeCondition>().unwrap(),
            EdgeCondition::dirichlet()
        );
        let err = "absorbing".parse::<EdgeCondition>().unwrap_err();
        assert!(matches!(err, WaveError::InvalidParameters { .. }));
        assert!(format!("{err}").contains("absorbing"));
    }

    #[test]
    fn padding_follows_edge_condition() {
        assert_eq!(BoundarySpec::neumann().padding(), Padding::GhostCells);
        assert_eq!(BoundarySpec::dirichlet().padding(), Padding::Flush);
        let driven = BoundarySpec::new(EdgeCondition::DrivenNeumann(EdgeDrive::new(1.0, 1.0)));
        assert_eq!(driven.padding(), Padding::GhostCells);
    }

    #[test]
    fn zero_amplitude_source_is_dropped() {
        let policy = BoundarySpec::neumann().with_source(PointSource::new(0.0, 3.0));
        assert!(policy.source().is_none());
    }

    #[test]
    fn neumann_1d_mirrors_two_inward() {
        let mut u = ramp(6);
        BoundarySpec::neumann().apply(&mut u, &[6], 0.0);
        assert_eq!(u, vec![2.0, 1.0, 2.0, 3.0, 4.0, 3.0]);
    }

    #[test]
    fn neumann_2d_mirrors_rows_then_columns() {
        let (rows, cols) = (5, 5);
        let mut u = ramp(rows * cols);
        BoundarySpec::neumann().apply(&mut u, &[rows, cols], 0.0);
        for c in 0..cols {
            assert_eq!(u[c], u[2 * cols + c], "row 0 col {c}");
            assert_eq!(u[4 * cols + c], u[2 * cols + c], "row 4 col {c}");
        }
        for r in 0..rows {
            assert_eq!(u[r * cols], u[r * cols + 2], "col 0 row {r}");
            assert_eq!(u[r * cols + 4], u[r * cols + 2], "col 4 row {r}");
        }
        // Interior untouched.
        assert_eq!(u[6], 6.0);
        assert_eq!(u[12], 12.0);
    }

    #[test]
    fn dirichlet_1d_pins_ends() {
        let mut u = ramp(5);
        BoundarySpec::dirichlet().apply(&mut u, &[5], 0.0);
        assert_eq!(u, vec![0.0, 1.0, 2.0, 3.0, 0.0]);

        let policy = BoundarySpec::new(EdgeCondition::Dirichlet(EdgeValues::from_array([
            1.0, -1.0, 9.0, 9.0,
        ])));
        let mut u = ramp(5);
        policy.apply(&mut u, &[5], 0.0);
        assert_eq!(u[0], 1.0);
        assert_eq!(u[4], -1.0);
    }

    #[test]
    fn dirichlet_2d_columns_win_at_corners() {
        let values = EdgeValues::from_array([1.0, 2.0, 3.0, 4.0]);
        let policy = BoundarySpec::new(EdgeCondition::Dirichlet(values));
        let mut u = vec![7.0; 16];
        policy.apply(&mut u, &[4, 4], 0.0);
        assert_eq!(&u[0..4], &[1.0, 3.0, 3.0, 2.0]);
        assert_eq!(&u[12..16], &[1.0, 4.0, 4.0, 2.0]);
        assert_eq!(u[5], 7.0);
        assert_eq!(u[4], 1.0);
        assert_eq!(u[7], 2.0);
    }

    #[test]
    fn source_written_before_edges() {
        let policy = BoundarySpec::dirichlet().with_source(PointSource::new(0.5, 1.0));
        let mut u = vec![3.0; 25];
        let t = 0.25;
        policy.apply(&mut u, &[5, 5], t);
        assert!((u[12] - 0.5).abs() < 1e-15);
        assert_eq!(u[0], 0.0);
        assert_eq!(u[6], 3.0);
    }

    #[test]
    fn drive_replaces_cell_one_until_cutoff() {
        let drive = EdgeDrive::new(PI, 1.0);
        let policy = BoundarySpec::new(EdgeCondition::DrivenNeumann(drive));

        let mut u = ramp(6);
        policy.apply(&mut u, &[6], 0.5);
        assert!((u[1] - 0.5).abs() < 1e-15);
        assert_eq!(u[0], 2.0);
        assert_eq!(u[5], 3.0);

        let mut u = ramp(6);
        policy.apply(&mut u, &[6], 1.0);
        assert_eq!(u[1], 1.0, "drive is off at the cutoff");
    }

    #[test]
    fn validate_rejects_source_in_1d() {
        let policy = BoundarySpec::neumann().with_source(PointSource::new(0.5, 1.0));
        assert!(policy.validate(Dimension::One, &[11]).is_err());
        assert!(policy.validate(Dimension::Two, &[11, 11]).is_ok());
    }

    #[test]
    fn validate_rejects_source_on_tiny_grid() {
        let policy = BoundarySpec::dirichlet().with_source(PointSource::new(0.5, 1.0));
        assert!(policy.validate(Dimension::Two, &[4, 4]).is_err());
        assert!(policy.validate(Dimension::Two, &[5, 5]).is_ok());
    }

    #[test]
    fn validate_rejects_source_without_center_cell() {
        let policy = BoundarySpec::dirichlet().with_source(PointSource::new(0.5, 1.0));
        assert!(policy.validate(Dimension::Two, &[8, 8]).is_err());
        assert!(policy.validate(Dimension::Two, &[9, 8]).is_err());
        assert!(policy.validate(Dimension::Two, &[9, 9]).is_ok());
    }

    #[test]
    fn validate_rejects_drive_in_2d() {
        let policy = BoundarySpec::new(EdgeCondition::DrivenNeumann(EdgeDrive::new(1.0, 1.0)));
        assert!(policy.validate(Dimension::Two, &[8, 8]).is_err());
        assert!(policy.validate(Dimension::One, &[8]).is_ok());
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let policy = BoundarySpec::new(EdgeCondition::Dirichlet(EdgeValues {
            top: f64::NAN,
            ..EdgeValues::zero()
        }));
        assert!(policy.validate(Dimension::Two, &[5, 5]).is_err());

        let policy = BoundarySpec::neumann().with_source(PointSource::new(0.5, f64::INFINITY));
        assert!(policy.validate(Dimension::Two, &[5, 5]).is_err());

        let drive = EdgeDrive::new(1.0, f64::NAN);
        let policy = BoundarySpec::new(EdgeCondition::DrivenNeumann(drive));
        assert!(policy.validate(Dimension::One, &[5]).is_err());
    }
}
