//! Flock Sim entry point
//!
//! Runs the default flock headless on a background thread and logs what a
//! renderer would see. Set `RUST_LOG=debug` (or `trace`) for more detail.

use std::thread;
use std::time::{Duration, Instant};

use flock_sim::FlockConfig;
use flock_sim::sim::{SimulationController, spawn};

/// How long the demo runs
const RUN_TIME: Duration = Duration::from_secs(10);
/// Polling rate of the stand-in renderer
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Flock Sim starting...");

    let config = FlockConfig::default().with_seed(rand::random());
    log::debug!("config: {}", serde_json::to_string(&config)?);

    let controller = SimulationController::new(config)?;
    let handle = spawn(controller);

    let started = Instant::now();
    let mut last_logged = 0;
    while started.elapsed() < RUN_TIME {
        let frame = handle.latest();
        // Once a second of simulated time
        if frame.tick >= last_logged + 60 {
            last_logged = frame.tick;
            if let Some(center) = frame.centroid() {
                log::info!(
                    "tick {}: {} boids, centroid ({:.1}, {:.1})",
                    frame.tick,
                    frame.positions.len(),
                    center.x,
                    center.y
                );
            }
        }
        thread::sleep(FRAME_INTERVAL);
    }

    let (controller, result) = handle
        .join()
        .map_err(|_| "simulation thread panicked")?;
    let summary = result?;
    log::info!(
        "Finished {} ticks ({} late) in {:?}, state {:?}",
        summary.ticks,
        summary.missed_deadlines,
        started.elapsed(),
        controller.state()
    );
    Ok(())
}
