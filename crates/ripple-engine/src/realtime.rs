//! Background frame producer.
//!
//! [`FrameStream`] moves a [`Simulation`] onto a dedicated thread that
//! steps it through its frame budget and publishes owned snapshots
//! through a bounded channel. The consumer (typically a renderer on the
//! main thread) pulls frames at its own pace; when the channel is full
//! the producer blocks.
//!
//! ```text
//! Consumer                       Frame thread
//!     |                               |
//!     |                               | sim.step_sync()
//!     |<--frame_tx: bounded(cap)------| snapshot.to_owned_snapshot()
//!     | recv()                        |
//!     |                               | ... until budget reached
//!     |                               | or send fails
//!     |--drop(stream)---------------->| send() -> Err, thread exits
//! ```

use std::ops::ControlFlow;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use ripple_solver::FieldSnapshot;
use tracing::debug;

use crate::config::ConfigError;
use crate::frame::Snapshot;
use crate::lockstep::Simulation;
use crate::metrics::RunReport;
use crate::sink::FrameSink;

/// Default number of frames buffered between producer and consumer.
pub const DEFAULT_CAPACITY: usize = 4;

/// A simulation running on a background thread, consumed as an iterator
/// of owned frames.
///
/// Dropping the stream disconnects the channel; the producer notices at
/// its next send and exits, and the drop waits for it.
///
/// ```
/// use ripple_engine::{FrameStream, Simulation, SimulationConfig};
/// use ripple_solver::initial;
///
/// let config = SimulationConfig { final_time: 0.1, ..SimulationConfig::default() };
/// let sim = Simulation::new(config, initial::standing_wave(), initial::zero()).unwrap();
/// let expected = sim.frame_count();
/// let stream = FrameStream::spawn(sim, 2).unwrap();
/// assert_eq!(stream.count() as u64, expected);
/// ```
#[derive(Debug)]
pub struct FrameStream {
    frame_rx: Option<Receiver<FieldSnapshot>>,
    thread: Option<JoinHandle<RunReport>>,
}

/// Forwards each frame to the channel; a failed send means the consumer
/// has gone away.
struct ChannelSink {
    tx: Sender<FieldSnapshot>,
}

impl FrameSink for ChannelSink {
    fn on_frame(&mut self, frame: &Snapshot<'_>) -> ControlFlow<()> {
        match self.tx.send(frame.to_owned_snapshot()) {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => {
                debug!(frame = frame.frame(), "frame consumer disconnected");
                ControlFlow::Break(())
            }
        }
    }
}

impl FrameStream {
    /// Spawn the frame thread with a channel of `capacity` frames
    /// (at least 1).
    pub fn spawn(mut sim: Simulation, capacity: usize) -> Result<Self, ConfigError> {
        let (frame_tx, frame_rx) = crossbeam_channel::bounded(capacity.max(1));
        let thread = thread::Builder::new()
            .name("ripple-frames".into())
            .spawn(move || {
                let mut sink = ChannelSink { tx: frame_tx };
                sim.run(&mut sink)
            })
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("frame thread: {e}"),
            })?;
        Ok(Self {
            frame_rx: Some(frame_rx),
            thread: Some(thread),
        })
    }

    /// Spawn with [`DEFAULT_CAPACITY`].
    pub fn spawn_default(sim: Simulation) -> Result<Self, ConfigError> {
        Self::spawn(sim, DEFAULT_CAPACITY)
    }

    /// Block until the next frame arrives. `None` once the run is over.
    pub fn recv(&self) -> Option<FieldSnapshot> {
        self.frame_rx.as_ref()?.recv().ok()
    }

    /// Take a frame if one is ready, without blocking.
    pub fn try_recv(&self) -> Option<FieldSnapshot> {
        self.frame_rx.as_ref()?.try_recv().ok()
    }

    /// Stop consuming and wait for the frame thread.
    ///
    /// Returns the run report, or `None` if the thread panicked.
    pub fn finish(mut self) -> Option<RunReport> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Option<RunReport> {
        // Disconnect first so a producer blocked on a full channel wakes up.
        self.frame_rx.take();
        self.thread.take()?.join().ok()
    }
}

impl Iterator for FrameStream {
    type Item = FieldSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}

impl Drop for FrameStream {
    fn drop(&mut self) {
        self.shutdown();
    }
}
