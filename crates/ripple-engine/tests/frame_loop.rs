//! Integration test: lockstep runs and background frame streams.
//!
//! Drives full runs through a recording sink and checks frame counts,
//! ordering, early stop, and agreement between the two modes.

use ripple_core::{Coord, Dimension, FieldView, StepIndex};
use ripple_engine::{FrameStream, Simulation, SimulationConfig};
use ripple_solver::{initial, BoundarySpec, PointSource};
use ripple_test_utils::{assert_close, assert_fields_close, RecordingSink};

fn line_config() -> SimulationConfig {
    SimulationConfig {
        dimension: Dimension::One,
        grid_points: 40,
        courant_divisor: 1.25,
        final_time: 0.75,
        ..SimulationConfig::default()
    }
}

fn plane_config() -> SimulationConfig {
    SimulationConfig {
        grid_points: 24,
        final_time: 0.4,
        boundary: BoundarySpec::dirichlet().with_source(PointSource::new(0.5, 2.0)),
        ..SimulationConfig::default()
    }
}

#[test]
fn lockstep_run_records_every_frame() {
    let config = line_config();
    let expected = (config.final_time / config.dt()).floor() as u64 + 1;
    assert_eq!(config.frame_count(), expected);

    let mut sim = Simulation::new(config, initial::standing_wave(), initial::zero()).unwrap();
    let mut sink = RecordingSink::new();
    let report = sim.run(&mut sink);

    assert_eq!(report.frames, expected);
    assert_eq!(sink.len() as u64, expected);
    assert_eq!(report.non_finite_frames, 0);
    for (i, frame) in sink.frames.iter().enumerate() {
        assert_eq!(frame.step_index(), StepIndex(i as u64 + 1));
    }
    let dt = sim.solver().domain_params().dt();
    for (i, t) in sink.times().into_iter().enumerate() {
        assert_close(t, (i + 1) as f64 * dt, 1e-12);
    }
}

#[test]
fn recording_sink_can_stop_run() {
    let mut sim = Simulation::new(plane_config(), initial::zero(), initial::zero()).unwrap();
    let mut sink = RecordingSink::stop_after(4);
    let report = sim.run(&mut sink);
    assert_eq!(sink.len(), 4);
    assert_eq!(report.frames, 4);
    assert!(report.stopped_early);
    assert_eq!(sim.frames_remaining(), sim.frame_count() - 4);
}

#[test]
fn stream_matches_lockstep() {
    let mut lockstep =
        Simulation::new(plane_config(), initial::zero(), initial::zero()).unwrap();
    let mut sink = RecordingSink::new();
    lockstep.run(&mut sink);

    let background =
        Simulation::new(plane_config(), initial::zero(), initial::zero()).unwrap();
    let streamed: Vec<_> = FrameStream::spawn(background, 3).unwrap().collect();

    assert_eq!(streamed.len(), sink.len());
    for (a, b) in streamed.iter().zip(&sink.frames) {
        assert_eq!(a.step_index(), b.step_index());
        assert_fields_close(a.values(), b.values(), 0.0);
    }
}

#[test]
fn dropping_stream_stops_producer() {
    let sim = Simulation::new(plane_config(), initial::zero(), initial::zero()).unwrap();
    let total = sim.frame_count();
    let mut stream = FrameStream::spawn(sim, 1).unwrap();
    let first: Vec<_> = stream.by_ref().take(2).collect();
    assert_eq!(first.len(), 2);
    let report = stream.finish().unwrap();
    assert!(report.frames < total);
}

#[test]
fn overflowing_field_is_reported_not_fatal() {
    let config = SimulationConfig {
        dimension: Dimension::One,
        grid_points: 10,
        courant_divisor: 1.0,
        final_time: 0.5,
        ..SimulationConfig::default()
    };
    // Finite start that overflows to infinity on the first update.
    let huge = |c: &Coord| if c[0].abs() < 0.15 { f64::MAX } else { -f64::MAX };
    let mut sim = Simulation::new(config, huge, initial::zero()).unwrap();
    let mut sink = RecordingSink::new();
    let report = sim.run(&mut sink);
    assert_eq!(report.frames, sim.frame_count());
    assert!(report.non_finite_frames > 0);
    assert!(!sink.frames[0].is_finite());
}
