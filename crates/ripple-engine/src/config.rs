//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] describes a run the way the command line does:
//! a domain half-width, a number of grid intervals, a Courant divisor and
//! a final time. Spacing, time step and frame count are derived from it.

use std::error::Error;
use std::f64::consts::SQRT_2;
use std::fmt;

use ripple_core::{Dimension, DomainParams, WaveError};
use ripple_solver::{BoundarySpec, InitialCondition, WaveSolver};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimulationConfig::validate()`] or when
/// starting a run.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The solver rejected the derived parameters.
    Wave(WaveError),
    /// `grid_points` is below the minimum of 2 intervals.
    InvalidGridPoints {
        /// The configured value.
        value: u32,
    },
    /// `courant_divisor` is NaN, infinite, zero, or negative.
    InvalidCourantDivisor {
        /// The configured value.
        value: f64,
    },
    /// `final_time` is NaN, infinite, or negative.
    InvalidFinalTime {
        /// The configured value.
        value: f64,
    },
    /// A background thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wave(e) => write!(f, "solver: {e}"),
            Self::InvalidGridPoints { value } => {
                write!(f, "grid_points {value} is below minimum of 2")
            }
            Self::InvalidCourantDivisor { value } => {
                write!(f, "courant_divisor must be finite and positive, got {value}")
            }
            Self::InvalidFinalTime { value } => {
                write!(f, "final_time must be finite and >= 0, got {value}")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Wave(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WaveError> for ConfigError {
    fn from(e: WaveError) -> Self {
        Self::Wave(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete description of a simulation run.
///
/// The defaults reproduce the classic demo: a 2D square `[-1, 1]^2` cut
/// into 50 intervals per axis, unit wave speed, `dt = h / (c * sqrt 2)`
/// and one unit of simulated time.
///
/// ```
/// use ripple_engine::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// assert!((config.spacing() - 0.04).abs() < 1e-15);
/// assert_eq!(config.frame_count(), 36);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Spatial dimension. Default: 2D.
    pub dimension: Dimension,
    /// Half-width `a` of the domain `[-a, a]`. Default: 1.
    pub half_width: f64,
    /// Number of intervals across `[-a, a]`; `h = 2a / grid_points`. Default: 50.
    pub grid_points: u32,
    /// Wave speed `c`. Default: 1.
    pub wave_speed: f64,
    /// `dt = h / (c * courant_divisor)`. Must be at least `sqrt(ndim)`
    /// for stability. Default: `sqrt(2)`.
    pub courant_divisor: f64,
    /// Simulated time to cover. Default: 1.
    pub final_time: f64,
    /// Boundary policy. Default: Neumann, no source.
    pub boundary: BoundarySpec,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Two,
            half_width: 1.0,
            grid_points: 50,
            wave_speed: 1.0,
            courant_divisor: SQRT_2,
            final_time: 1.0,
            boundary: BoundarySpec::default(),
        }
    }
}

impl SimulationConfig {
    /// Grid spacing `h = 2a / grid_points`.
    pub fn spacing(&self) -> f64 {
        2.0 * self.half_width / f64::from(self.grid_points)
    }

    /// Time step `dt = h / (c * courant_divisor)`.
    pub fn dt(&self) -> f64 {
        self.spacing() / (self.wave_speed * self.courant_divisor)
    }

    /// Number of frames in a full run: `floor(final_time / dt) + 1`.
    ///
    /// Meaningful only for a configuration that passes
    /// [`validate`](Self::validate).
    pub fn frame_count(&self) -> u64 {
        (self.final_time / self.dt()).floor() as u64 + 1
    }

    /// Domain parameters derived from this configuration.
    pub fn domain_params(&self) -> Result<DomainParams, ConfigError> {
        Ok(DomainParams::new(
            self.half_width,
            self.spacing(),
            self.wave_speed,
            self.dt(),
        )?)
    }

    /// Validate all invariants that do not need the grid.
    ///
    /// Boundary checks that depend on the grid shape run when the solver
    /// is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least two intervals, so the axis has three points.
        if self.grid_points < 2 {
            return Err(ConfigError::InvalidGridPoints {
                value: self.grid_points,
            });
        }
        // 2. Courant divisor finite and positive.
        if !self.courant_divisor.is_finite() || self.courant_divisor <= 0.0 {
            return Err(ConfigError::InvalidCourantDivisor {
                value: self.courant_divisor,
            });
        }
        // 3. Final time finite and non-negative.
        if !self.final_time.is_finite() || self.final_time < 0.0 {
            return Err(ConfigError::InvalidFinalTime {
                value: self.final_time,
            });
        }
        // 4. Domain parameters positive and finite.
        let params = self.domain_params()?;
        // 5. CFL bound for the configured dimension.
        params.check_cfl(self.dimension)?;
        Ok(())
    }

    /// Validate and build a solver from initial displacement `f` and
    /// velocity `g`.
    pub fn into_solver<'a>(
        self,
        f: impl InitialCondition + 'a,
        g: impl InitialCondition + 'a,
    ) -> Result<WaveSolver, ConfigError> {
        self.validate()?;
        let solver = WaveSolver::builder()
            .dimension(self.dimension)
            .domain(self.domain_params()?)
            .boundary(self.boundary)
            .initial_displacement(f)
            .initial_velocity(g)
            .build()?;
        Ok(solver)
    }
}
