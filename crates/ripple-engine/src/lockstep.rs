//! Lockstep (synchronous) frame loop.
//!
//! [`Simulation`] wraps a [`WaveSolver`] with a frame budget. Each call to
//! [`step_sync()`](Simulation::step_sync) advances the solver once and
//! returns a [`Snapshot`] that borrows from `self`, so the caller cannot
//! step again while holding it.
//!
//! `Simulation` is [`Send`]: [`FrameStream`](crate::FrameStream) moves it
//! onto a background thread.

use std::ops::ControlFlow;
use std::time::Instant;

use ripple_core::FieldView;
use ripple_solver::{InitialCondition, WaveSolver};
use tracing::{debug, info, trace, warn};

use crate::config::{ConfigError, SimulationConfig};
use crate::frame::Snapshot;
use crate::metrics::{RunReport, StepMetrics};
use crate::sink::FrameSink;

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a [`Simulation::step_sync()`] call.
#[derive(Debug)]
pub struct StepResult<'w> {
    /// Read-only view of the field after this step.
    pub snapshot: Snapshot<'w>,
    /// Metrics for this step.
    pub metrics: StepMetrics,
}

// ── Simulation ──────────────────────────────────────────────────

/// A solver plus the number of frames a full run covers.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use ripple_engine::{Simulation, SimulationConfig, Snapshot};
/// use ripple_solver::initial;
///
/// let config = SimulationConfig { final_time: 0.1, ..SimulationConfig::default() };
/// let mut sim = Simulation::new(config, initial::standing_wave(), initial::zero()).unwrap();
/// let report = sim.run(&mut |_: &Snapshot<'_>| ControlFlow::Continue(()));
/// assert_eq!(report.frames, sim.frame_count());
/// ```
#[derive(Debug)]
pub struct Simulation {
    solver: WaveSolver,
    frame_count: u64,
    frames_emitted: u64,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Validate `config` and build the solver from `f` and `g`.
    pub fn new<'a>(
        config: SimulationConfig,
        f: impl InitialCondition + 'a,
        g: impl InitialCondition + 'a,
    ) -> Result<Self, ConfigError> {
        let frame_count = config.frame_count();
        let solver = config.into_solver(f, g)?;
        Ok(Self::from_solver(solver, frame_count))
    }

    /// Wrap an already-built solver with a frame budget.
    pub fn from_solver(solver: WaveSolver, frame_count: u64) -> Self {
        Self {
            solver,
            frame_count,
            frames_emitted: 0,
            last_metrics: StepMetrics::default(),
        }
    }

    /// Advance one step and return a view of the new field.
    ///
    /// Stepping past the frame budget is allowed; the budget only bounds
    /// [`run`](Self::run).
    pub fn step_sync(&mut self) -> StepResult<'_> {
        let start = Instant::now();
        self.solver.advance();
        let advance_us = start.elapsed().as_micros() as u64;

        let metrics = StepMetrics {
            advance_us,
            max_abs: self.solver.max_abs(),
            finite: self.solver.is_finite(),
        };
        if !metrics.finite {
            warn!(
                step = %self.solver.step_index(),
                "field contains non-finite values"
            );
        }
        trace!(
            frame = self.frames_emitted,
            step = %self.solver.step_index(),
            advance_us,
            max_abs = metrics.max_abs,
            "frame"
        );

        let frame = self.frames_emitted;
        self.frames_emitted += 1;
        self.last_metrics = metrics.clone();
        StepResult {
            snapshot: Snapshot::of(&self.solver, frame),
            metrics,
        }
    }

    /// Run the remaining frames, handing each to `sink`.
    ///
    /// Stops early when the sink returns [`ControlFlow::Break`].
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> RunReport {
        let remaining = self.frames_remaining();
        info!(
            frames = remaining,
            dim = %self.solver.dimension(),
            "run started"
        );
        debug!(
            total = self.frame_count,
            emitted = self.frames_emitted,
            dt = self.solver.domain_params().dt(),
            "frame budget"
        );

        let mut report = RunReport::default();
        for _ in 0..remaining {
            let result = self.step_sync();
            report.record(&result.metrics);
            if sink.on_frame(&result.snapshot).is_break() {
                report.stopped_early = report.frames < remaining;
                break;
            }
        }

        info!(
            frames = report.frames,
            stopped_early = report.stopped_early,
            non_finite = report.non_finite_frames,
            peak_abs = report.peak_abs,
            "run finished"
        );
        report
    }

    /// View of the current field without stepping.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(&self.solver, self.frames_emitted)
    }

    /// Frames in a full run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames produced so far.
    pub fn frames_emitted(&self) -> u64 {
        self.frames_emitted
    }

    /// Frames left before the budget is reached.
    pub fn frames_remaining(&self) -> u64 {
        self.frame_count.saturating_sub(self.frames_emitted)
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The underlying solver.
    pub fn solver(&self) -> &WaveSolver {
        &self.solver
    }

    /// Unwrap the solver.
    pub fn into_solver(self) -> WaveSolver {
        self.solver
    }
}

impl From<WaveSolver> for Simulation {
    /// Wrap a solver with an empty frame budget; drive it with `step_sync`.
    fn from(solver: WaveSolver) -> Self {
        Self::from_solver(solver, 0)
    }
}
