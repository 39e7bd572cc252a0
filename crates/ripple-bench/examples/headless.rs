//! Headless run of the reference profile.
//!
//! Demonstrates: build config → Simulation → run with a sink → stream the
//! same run from a background thread. Set `RUST_LOG=ripple_engine=debug`
//! (or `trace`) to see the engine's own logging.

use std::ops::ControlFlow;

use ripple_bench::{random_bumps, reference_profile};
use ripple_core::FieldView;
use ripple_engine::{FrameStream, Simulation, Snapshot};
use ripple_solver::{diagnostics, initial};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Ripple Headless Example ===\n");

    let config = reference_profile();
    println!(
        "grid: {} intervals per axis, h={:.4}, dt={:.5}, frames={}",
        config.grid_points,
        config.spacing(),
        config.dt(),
        config.frame_count()
    );

    // --- Lockstep: the sink plays the renderer ---
    let mut sim = Simulation::new(config.clone(), random_bumps(6, 2, 42), initial::zero()).unwrap();
    let mut sink = |frame: &Snapshot<'_>| {
        if frame.frame() % 10 == 0 {
            println!(
                "  frame {:>3}: t={:.3}, max|u|={:.4}, asymmetry={:.2e}",
                frame.frame(),
                frame.time(),
                frame.max_abs(),
                diagnostics::mirror_asymmetry(frame.values(), frame.shape()),
            );
        }
        ControlFlow::Continue(())
    };
    let report = sim.run(&mut sink);
    println!(
        "\nlockstep: {} frames, peak |u| {:.4}, {}us in advance\n",
        report.frames, report.peak_abs, report.advance_us
    );

    // --- Background thread: consume owned frames ---
    let sim = Simulation::new(config, initial::zero(), initial::zero()).unwrap();
    let stream = FrameStream::spawn_default(sim).unwrap();
    let mut last = None;
    for frame in stream {
        last = Some(frame);
    }
    if let Some(frame) = last {
        info!(step = %frame.step_index(), time = frame.time(), "last streamed frame");
        println!(
            "stream: last frame at t={:.3}, center value {:.4}",
            frame.time(),
            frame.values()[frame.values().len() / 2]
        );
    }
}
