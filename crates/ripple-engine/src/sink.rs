//! The renderer seam.

use std::ops::ControlFlow;

use crate::frame::Snapshot;

/// Consumer of per-frame snapshots, typically a renderer.
///
/// Called once per frame, after the step. Returning
/// [`ControlFlow::Break`] ends the run after the current frame.
///
/// Any `FnMut(&Snapshot<'_>) -> ControlFlow<()>` closure is a sink:
///
/// ```
/// use std::ops::ControlFlow;
/// use ripple_engine::{FrameSink, Snapshot};
///
/// let mut seen = 0;
/// let mut sink = |_: &Snapshot<'_>| {
///     seen += 1;
///     ControlFlow::Continue(())
/// };
/// fn takes_sink(_: &mut dyn FrameSink) {}
/// takes_sink(&mut sink);
/// ```
pub trait FrameSink {
    /// Handle one frame.
    fn on_frame(&mut self, frame: &Snapshot<'_>) -> ControlFlow<()>;
}

impl<F> FrameSink for F
where
    F: FnMut(&Snapshot<'_>) -> ControlFlow<()>,
{
    fn on_frame(&mut self, frame: &Snapshot<'_>) -> ControlFlow<()> {
        self(frame)
    }
}
