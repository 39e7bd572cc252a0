//! Test utilities for Ripple development.
//!
//! Provides a [`RecordingSink`] that captures frames from the engine, float
//! comparison helpers, and the standard solver [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::ops::ControlFlow;

use ripple_core::FieldView;
use ripple_engine::{FrameSink, Snapshot};
use ripple_solver::FieldSnapshot;

pub use fixtures::*;

/// [`FrameSink`] that keeps an owned copy of every frame.
///
/// With [`stop_after`](RecordingSink::stop_after) it breaks the run once
/// the given number of frames has been recorded.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<FieldSnapshot>,
    limit: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the run after `frames` frames.
    pub fn stop_after(frames: usize) -> Self {
        Self {
            frames: Vec::new(),
            limit: Some(frames),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Simulation times of the recorded frames, in order.
    pub fn times(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.time()).collect()
    }
}

impl FrameSink for RecordingSink {
    fn on_frame(&mut self, frame: &Snapshot<'_>) -> ControlFlow<()> {
        self.frames.push(frame.to_owned_snapshot());
        match self.limit {
            Some(limit) if self.frames.len() >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }
}

/// Assert `|a - b| <= tol`.
#[track_caller]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() <= tol,
        "{a} and {b} differ by {} (tolerance {tol})",
        (a - b).abs()
    );
}

/// Assert two fields agree element-wise within `tol`.
#[track_caller]
pub fn assert_fields_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len(), "field lengths differ");
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x - y).abs() <= tol,
            "cell {i}: {x} and {y} differ by {} (tolerance {tol})",
            (x - y).abs()
        );
    }
}
