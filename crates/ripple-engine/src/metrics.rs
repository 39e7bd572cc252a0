//! Per-step and per-run metrics for the frame loop.

/// Timing and field statistics collected during a single step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time spent in `advance`, in microseconds.
    pub advance_us: u64,
    /// Largest absolute field value after the step.
    pub max_abs: f64,
    /// Whether every field value was finite after the step.
    pub finite: bool,
}

/// Summary of a frame loop, returned by
/// [`Simulation::run`](crate::Simulation::run) and by the background
/// thread behind [`FrameStream`](crate::FrameStream).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    /// Frames delivered to the sink.
    pub frames: u64,
    /// Whether the consumer stopped the run before the last frame.
    pub stopped_early: bool,
    /// Frames in which some field value was NaN or infinite.
    pub non_finite_frames: u64,
    /// Largest absolute field value seen across all frames.
    pub peak_abs: f64,
    /// Total wall-clock time spent in `advance`, in microseconds.
    pub advance_us: u64,
}

impl RunReport {
    pub(crate) fn record(&mut self, metrics: &StepMetrics) {
        self.frames += 1;
        self.advance_us += metrics.advance_us;
        if metrics.finite {
            self.peak_abs = self.peak_abs.max(metrics.max_abs);
        } else {
            self.non_finite_frames += 1;
        }
    }
}
