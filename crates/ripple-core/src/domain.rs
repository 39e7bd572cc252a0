//! Domain parameters, spatial dimension, and the CFL stability bound.

use crate::error::WaveError;
use std::fmt;

/// Number of spatial dimensions of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// A line: `u(x, t)`.
    One,
    /// A plane: `u(x, y, t)`.
    Two,
}

impl Dimension {
    /// Number of spatial axes.
    pub fn ndim(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u32> for Dimension {
    type Error = WaveError;

    fn try_from(ndim: u32) -> Result<Self, Self::Error> {
        match ndim {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(WaveError::UnsupportedDimension { ndim }),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.ndim())
    }
}

/// Immutable physical and numerical parameters of a simulation domain.
///
/// The domain spans `[-half_width, half_width]` along every axis, sampled
/// every `spacing` units. The wave travels at `wave_speed` and the
/// integrator advances by `dt` per step.
///
/// # CFL stability
///
/// The explicit scheme is stable only when
/// `dt <= spacing / (wave_speed * sqrt(ndim))`. [`DomainParams::new`]
/// checks positivity; the bound itself depends on the dimension and is
/// enforced by [`check_cfl`](DomainParams::check_cfl) when a solver is
/// built.
///
/// # Examples
///
/// ```
/// use ripple_core::{Dimension, DomainParams};
///
/// let h = 0.04;
/// let params = DomainParams::new(1.0, h, 1.0, h / 2.0_f64.sqrt()).unwrap();
/// assert!(params.check_cfl(Dimension::Two).is_ok());
///
/// let unstable = DomainParams::new(1.0, h, 1.0, h).unwrap();
/// assert!(unstable.check_cfl(Dimension::One).is_ok());
/// assert!(unstable.check_cfl(Dimension::Two).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainParams {
    half_width: f64,
    spacing: f64,
    wave_speed: f64,
    dt: f64,
}

impl DomainParams {
    /// Create domain parameters, rejecting non-finite or non-positive values.
    pub fn new(half_width: f64, spacing: f64, wave_speed: f64, dt: f64) -> Result<Self, WaveError> {
        for (name, value) in [
            ("half_width", half_width),
            ("spacing", spacing),
            ("wave_speed", wave_speed),
            ("dt", dt),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(WaveError::invalid(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if spacing > 2.0 * half_width {
            return Err(WaveError::invalid(format!(
                "spacing {spacing} exceeds domain width {}",
                2.0 * half_width
            )));
        }
        Ok(Self {
            half_width,
            spacing,
            wave_speed,
            dt,
        })
    }

    /// Half-width `a` of the domain `[-a, a]`.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Grid spacing `h`.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Wave speed `c`.
    pub fn wave_speed(&self) -> f64 {
        self.wave_speed
    }

    /// Time step `dt`.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Largest stable time step for the given dimension:
    /// `h / (c * sqrt(ndim))`.
    pub fn max_dt(&self, dim: Dimension) -> f64 {
        self.spacing / (self.wave_speed * (dim.ndim() as f64).sqrt())
    }

    /// Courant number `c * dt / h`.
    pub fn courant_number(&self) -> f64 {
        self.wave_speed * self.dt / self.spacing
    }

    /// Check the CFL bound for the given dimension.
    ///
    /// Equality is accepted; anything above the bound is rejected.
    pub fn check_cfl(&self, dim: Dimension) -> Result<(), WaveError> {
        let max_dt = self.max_dt(dim);
        if self.dt > max_dt {
            return Err(WaveError::invalid(format!(
                "dt {} violates the {dim} CFL bound h/(c*sqrt({})) = {max_dt}",
                self.dt,
                dim.ndim()
            )));
        }
        Ok(())
    }
}
