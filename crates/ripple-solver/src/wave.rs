//! The leapfrog time integrator.
//!
//! [`WaveSolver`] owns the grid, the two time levels of the field and a
//! scratch buffer for the Laplacian. After construction every step runs
//! in place without allocating.

use std::mem;

use ripple_core::{Coord, Dimension, DomainParams, FieldView, StepIndex, WaveError};
use ripple_space::Space;
use tracing::{debug, info};

use crate::boundary::BoundarySpec;
use crate::diagnostics;
use crate::initial::InitialCondition;
use crate::lattice::Lattice;
use crate::snapshot::FieldSnapshot;
use crate::stencil;

/// Explicit second-order solver for `u_tt = c^2 * lap(u)`.
///
/// # Examples
///
/// ```
/// use ripple_core::{Coord, Dimension, DomainParams};
/// use ripple_solver::{BoundarySpec, WaveSolver};
///
/// let h = 0.1;
/// let params = DomainParams::new(1.0, h, 1.0, 0.5 * h).unwrap();
/// let mut solver = WaveSolver::builder()
///     .dimension(Dimension::One)
///     .domain(params)
///     .boundary(BoundarySpec::dirichlet())
///     .initial_displacement(|c: &Coord| 1.0 - c[0] * c[0])
///     .build()
///     .unwrap();
///
/// solver.advance();
/// assert_eq!(solver.step_index().0, 1);
/// assert_eq!(solver.field()[0], 0.0);
/// ```
#[derive(Debug)]
pub struct WaveSolver {
    params: DomainParams,
    lattice: Lattice,
    boundary: BoundarySpec,
    prev: Vec<f64>,
    curr: Vec<f64>,
    lap: Vec<f64>,
    step: StepIndex,
    /// `(c * dt)^2`
    coeff: f64,
}

/// Builder for [`WaveSolver`].
///
/// Required: `dimension`, `domain`, `initial_displacement`.
/// The boundary defaults to [`BoundarySpec::neumann`] and the initial
/// velocity to zero.
pub struct WaveSolverBuilder<'a> {
    dimension: Option<Dimension>,
    domain: Option<DomainParams>,
    boundary: BoundarySpec,
    displacement: Option<Box<dyn InitialCondition + 'a>>,
    velocity: Option<Box<dyn InitialCondition + 'a>>,
}

impl WaveSolver {
    /// Create a new builder.
    pub fn builder<'a>() -> WaveSolverBuilder<'a> {
        WaveSolverBuilder {
            dimension: None,
            domain: None,
            boundary: BoundarySpec::default(),
            displacement: None,
            velocity: None,
        }
    }

    /// Advance one time step.
    ///
    /// Computes the Laplacian of the current field, writes
    /// `2 u - u_prev + (c dt)^2 lap(u)` over the previous buffer, increments
    /// the step index, applies the boundary policy at the new time and swaps
    /// the buffers.
    pub fn advance(&mut self) {
        stencil::laplacian(
            &self.curr,
            self.lattice.shape(),
            self.params.spacing(),
            &mut self.lap,
        );
        for ((next, &u), &l) in self.prev.iter_mut().zip(&self.curr).zip(&self.lap) {
            *next = 2.0 * u - *next + self.coeff * l;
        }
        self.step = self.step.next();
        let t = self.step.time(self.params.dt());
        self.boundary.apply(&mut self.prev, self.lattice.shape(), t);
        mem::swap(&mut self.prev, &mut self.curr);
    }

    /// Advance `steps` time steps.
    pub fn advance_by(&mut self, steps: u64) {
        for _ in 0..steps {
            self.advance();
        }
    }

    /// The current field, row-major.
    pub fn field(&self) -> &[f64] {
        &self.curr
    }

    /// The field one step before [`field`](Self::field).
    pub fn previous_field(&self) -> &[f64] {
        &self.prev
    }

    /// One coordinate per cell, row-major.
    pub fn coordinates(&self) -> &[Coord] {
        self.lattice.coordinates()
    }

    /// Domain parameters the solver was built with.
    pub fn domain_params(&self) -> &DomainParams {
        &self.params
    }

    /// `[len]` or `[rows, cols]`.
    pub fn shape(&self) -> &[usize] {
        self.lattice.shape()
    }

    /// Spatial dimension.
    pub fn dimension(&self) -> Dimension {
        self.lattice.dimension()
    }

    /// Number of completed steps.
    pub fn step_index(&self) -> StepIndex {
        self.step
    }

    /// Simulation time `step_index * dt`.
    pub fn time(&self) -> f64 {
        self.step.time(self.params.dt())
    }

    /// The boundary policy in force.
    pub fn boundary(&self) -> &BoundarySpec {
        &self.boundary
    }

    /// The grid.
    pub fn space(&self) -> &dyn Space {
        self.lattice.space()
    }

    /// The grid as its concrete variant.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Owned copy of the current field.
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(&self.curr, self.shape(), self.step, self.time())
    }

    /// Discrete energy of the current pair of time levels.
    pub fn energy(&self) -> f64 {
        diagnostics::discrete_energy(
            &self.prev,
            &self.curr,
            self.shape(),
            self.params.spacing(),
            self.params.wave_speed(),
            self.params.dt(),
        )
    }
}

impl FieldView for WaveSolver {
    fn values(&self) -> &[f64] {
        &self.curr
    }

    fn shape(&self) -> &[usize] {
        self.lattice.shape()
    }

    fn step_index(&self) -> StepIndex {
        self.step
    }

    fn time(&self) -> f64 {
        WaveSolver::time(self)
    }
}

impl<'a> WaveSolverBuilder<'a> {
    /// Set the spatial dimension.
    pub fn dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Set the domain parameters.
    pub fn domain(mut self, params: DomainParams) -> Self {
        self.domain = Some(params);
        self
    }

    /// Set the boundary policy (default: Neumann, no source).
    pub fn boundary(mut self, boundary: BoundarySpec) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the initial displacement `f`.
    pub fn initial_displacement(mut self, f: impl InitialCondition + 'a) -> Self {
        self.displacement = Some(Box::new(f));
        self
    }

    /// Set the initial velocity `g` (default: zero).
    pub fn initial_velocity(mut self, g: impl InitialCondition + 'a) -> Self {
        self.velocity = Some(Box::new(g));
        self
    }

    /// Build the solver, validating all configuration.
    ///
    /// Sets `u_prev = f(x)` and `u_curr = f(x) + dt * g(x)`, then applies
    /// the boundary policy once to `u_curr` at `t = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`WaveError::InvalidParameters`] if:
    /// - `dimension`, `domain` or `initial_displacement` is not set
    /// - `dt` violates the CFL bound for the dimension
    /// - the grid would have fewer than three points per axis
    /// - the boundary policy is not valid for the dimension or grid
    /// - an initial condition returns the wrong number of values or a
    ///   non-finite value
    pub fn build(self) -> Result<WaveSolver, WaveError> {
        let dim = self
            .dimension
            .ok_or_else(|| WaveError::invalid("dimension is required"))?;
        let params = self
            .domain
            .ok_or_else(|| WaveError::invalid("domain is required"))?;
        let displacement = self
            .displacement
            .ok_or_else(|| WaveError::invalid("initial_displacement is required"))?;

        params.check_cfl(dim)?;
        let lattice = Lattice::new(dim, &params, self.boundary.padding())?;
        self.boundary.validate(dim, lattice.shape())?;

        let coords = lattice.coordinates();
        let prev = evaluate_field("initial displacement", displacement.as_ref(), coords)?;
        let mut curr = prev.clone();
        if let Some(velocity) = &self.velocity {
            let g = evaluate_field("initial velocity", velocity.as_ref(), coords)?;
            let dt = params.dt();
            for (u, v) in curr.iter_mut().zip(&g) {
                *u += dt * v;
            }
        }
        self.boundary.apply(&mut curr, lattice.shape(), 0.0);

        let cells = lattice.cell_count();
        let coeff = (params.wave_speed() * params.dt()).powi(2);
        info!(
            dim = %dim,
            cells,
            boundary = %self.boundary.edge(),
            source = self.boundary.source().is_some(),
            "wave solver built"
        );
        debug!(
            courant = params.courant_number(),
            dt = params.dt(),
            max_dt = params.max_dt(dim),
            "CFL margin"
        );

        Ok(WaveSolver {
            params,
            lattice,
            boundary: self.boundary,
            prev,
            curr,
            lap: vec![0.0; cells],
            step: StepIndex::default(),
            coeff,
        })
    }
}

fn evaluate_field(
    what: &str,
    condition: &dyn InitialCondition,
    coords: &[Coord],
) -> Result<Vec<f64>, WaveError> {
    let values = condition.evaluate(coords);
    if values.len() != coords.len() {
        return Err(WaveError::invalid(format!(
            "{what} returned {} values for {} cells",
            values.len(),
            coords.len()
        )));
    }
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(WaveError::invalid(format!(
            "{what} is not finite at cell {i}: {}",
            values[i]
        )));
    }
    Ok(values)
}
