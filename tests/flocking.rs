//! End-to-end flock behaviour through the public API

use std::thread;
use std::time::Duration;

use flock_sim::sim::{
    ControllerState, SelfExclusion, StopHandle, alignment, cohesion, run_blocking, separation,
    spawn,
};
use flock_sim::{Boid, Flock, FlockConfig, LogSink, RenderSink, SimulationController, Vector2};

fn pair_config() -> FlockConfig {
    FlockConfig::default()
        .with_flock_size(2)
        .with_perception_radius(50.0)
        .with_limits(5.0, 1.0)
}

fn pair() -> Flock {
    Flock::new(vec![
        Boid::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)),
        Boid::new(Vector2::new(10.0, 0.0), Vector2::new(-1.0, 0.0)),
    ])
}

#[test]
fn two_boids_steer_symmetrically() {
    let params = pair_config().steering();
    let flock = pair();
    let boids = flock.boids();

    // Average heading is zero, so alignment just cancels each velocity
    assert_eq!(alignment(0, boids, &params), Vector2::new(-1.0, 0.0));
    assert_eq!(alignment(1, boids, &params), Vector2::new(1.0, 0.0));
    // Toward the midpoint (5, 0), capped at max force
    assert_eq!(cohesion(0, boids, &params), Vector2::new(1.0, 0.0));
    assert_eq!(cohesion(1, boids, &params), Vector2::new(-1.0, 0.0));
    // Away from each other along x
    assert_eq!(separation(0, boids, &params), Vector2::new(-1.0, 0.0));
    assert_eq!(separation(1, boids, &params), Vector2::new(1.0, 0.0));

    let mut sim = SimulationController::with_flock(pair_config(), pair()).unwrap();
    sim.apply_behavior().unwrap();

    let a0 = sim.flock().boids()[0].acceleration;
    let a1 = sim.flock().boids()[1].acceleration;
    assert_eq!(a0.x, -a1.x);
    assert!(a0.x < 0.0);
    assert_eq!(a0.y, 0.0);
    assert_eq!(a1.y, 0.0);
    assert_eq!(a0.length(), a1.length());
}

#[test]
fn stacked_boids_do_not_separate_by_position() {
    let config = pair_config();
    let stacked = Flock::new(vec![
        Boid::new(Vector2::new(20.0, 20.0), Vector2::ZERO),
        Boid::new(Vector2::new(20.0, 20.0), Vector2::ZERO),
    ]);

    let by_position = config.steering();
    assert_eq!(separation(0, stacked.boids(), &by_position), Vector2::ZERO);
    assert_eq!(separation(1, stacked.boids(), &by_position), Vector2::ZERO);

    // Index exclusion counts the twin but stays finite
    let by_index = config.with_self_exclusion(SelfExclusion::ByIndex).steering();
    let steer = separation(0, stacked.boids(), &by_index);
    assert!(steer.is_finite());
}

#[test]
fn fixed_start_is_bit_identical_across_runs() {
    let start = Flock::new(
        (0..30)
            .map(|i| {
                let f = i as f64;
                Boid::new(
                    Vector2::new((f * 37.0) % 1024.0, (f * 53.0) % 768.0),
                    Vector2::new((f * 0.7).sin() * 4.0, (f * 1.3).cos() * 4.0),
                )
            })
            .collect(),
    );
    let config = FlockConfig::default().with_flock_size(30);

    let run = || {
        let mut sim = SimulationController::with_flock(config.clone(), start.clone()).unwrap();
        for _ in 0..200 {
            sim.step().unwrap();
        }
        sim.flock().clone()
    };

    let first = run();
    let second = run();
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
        assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
        assert_eq!(a.velocity.x.to_bits(), b.velocity.x.to_bits());
        assert_eq!(a.velocity.y.to_bits(), b.velocity.y.to_bits());
    }
}

#[test]
fn same_seed_same_flock() {
    let config = FlockConfig::default().with_flock_size(64).with_seed(2024);
    let mut a = SimulationController::new(config.clone()).unwrap();
    let mut b = SimulationController::new(config).unwrap();

    for _ in 0..50 {
        a.step().unwrap();
        b.step().unwrap();
    }

    assert_eq!(a.flock(), b.flock());
    assert_eq!(a.snapshot(), b.snapshot());
}

struct CountingSink {
    log: LogSink,
    frames: u64,
    stop: StopHandle,
}

impl RenderSink for CountingSink {
    fn present(&mut self, frame: &flock_sim::FrameSnapshot) {
        self.log.present(frame);
        self.frames += 1;
        if self.frames == 3 {
            self.stop.stop();
        }
    }
}

#[test]
fn blocking_run_stops_cleanly() {
    let mut sim =
        SimulationController::new(FlockConfig::default().with_flock_size(10).with_seed(9)).unwrap();
    let stop = StopHandle::new();
    let mut sink = CountingSink {
        log: LogSink,
        frames: 0,
        stop: stop.clone(),
    };

    let summary = run_blocking(&mut sim, &mut sink, &stop).unwrap();

    assert_eq!(summary.ticks, 3);
    assert_eq!(sink.frames, 3);
    assert_eq!(sim.state(), ControllerState::Stopped);
    assert_eq!(sim.tick_count(), 3);
}

#[test]
fn spawned_run_publishes_frames_and_stops() {
    let sim =
        SimulationController::new(FlockConfig::default().with_flock_size(16).with_seed(1)).unwrap();
    let handle = spawn(sim);

    thread::sleep(Duration::from_millis(100));
    let frame = handle.latest();
    assert_eq!(frame.positions.len(), 16);

    let (sim, result) = handle.join().unwrap();
    let summary = result.unwrap();
    assert_eq!(sim.state(), ControllerState::Stopped);
    assert_eq!(sim.tick_count(), summary.ticks);
    assert!(summary.ticks >= frame.tick);
}
