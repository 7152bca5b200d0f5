//! Flock-wide tick driver
//!
//! A tick runs three phases over the whole flock, each finishing before the
//! next starts:
//! - Behavior: steering for every boid is computed from an immutable view of
//!   the flock into a scratch buffer, then added into accelerations
//! - Integrate: position, velocity, clamp, reset acceleration
//! - Wrap: toroidal boundary
//!
//! No boid's position or velocity changes while any steering is being read.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flock::{Flock, FrameSnapshot};
use super::steering::{SteeringParams, steering_force};
use super::vector::Vector2;
use crate::config::FlockConfig;
use crate::error::SimError;

/// Lifecycle of a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerState {
    /// Built, no tick run yet
    Idle,
    /// At least one tick has run
    Running,
    /// Cancelled; no further ticks (terminal)
    Stopped,
}

/// Owns the flock and advances it one tick at a time
#[derive(Debug, Clone)]
pub struct SimulationController {
    config: FlockConfig,
    steering: SteeringParams,
    flock: Flock,
    state: ControllerState,
    tick_count: u64,
    /// Phase A output, one entry per boid
    forces: Vec<Vector2>,
}

impl SimulationController {
    /// Validate `config` and seed a random flock from `config.seed`
    pub fn new(config: FlockConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let flock = Flock::random(&mut rng, config.flock_size, config.max_x, config.max_y);
        Self::assemble(config, flock)
    }

    /// Validate `config` and adopt an explicit flock of matching size
    pub fn with_flock(config: FlockConfig, flock: Flock) -> Result<Self, SimError> {
        config.validate()?;
        if flock.len() != config.flock_size {
            return Err(SimError::FlockSizeMismatch {
                expected: config.flock_size,
                actual: flock.len(),
            });
        }
        Self::assemble(config, flock)
    }

    fn assemble(config: FlockConfig, flock: Flock) -> Result<Self, SimError> {
        log::info!(
            "Flock of {} boids in a {}x{} world (seed {})",
            flock.len(),
            config.max_x,
            config.max_y,
            config.seed
        );
        Ok(Self {
            steering: config.steering(),
            forces: vec![Vector2::ZERO; flock.len()],
            config,
            flock,
            state: ControllerState::Idle,
            tick_count: 0,
        })
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Number of completed ticks
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Run one full tick. Returns the new tick count.
    pub fn step(&mut self) -> Result<u64, SimError> {
        match self.state {
            ControllerState::Stopped => return Err(SimError::Stopped),
            ControllerState::Idle => {
                log::debug!("Simulation started");
                self.state = ControllerState::Running;
            }
            ControllerState::Running => {}
        }

        self.behavior_phase();
        self.integrate_phase();
        self.wrap_phase();

        self.tick_count += 1;
        log::trace!("tick {}", self.tick_count);
        Ok(self.tick_count)
    }

    /// Phase A: add alignment + cohesion + separation into every acceleration.
    ///
    /// Running a phase on its own does not count as a tick. Every phase
    /// refuses with [`SimError::Stopped`] once the controller is stopped.
    pub fn apply_behavior(&mut self) -> Result<(), SimError> {
        self.ensure_not_stopped()?;
        self.behavior_phase();
        Ok(())
    }

    /// Phase B: integrate every boid and clamp its velocity
    pub fn integrate(&mut self) -> Result<(), SimError> {
        self.ensure_not_stopped()?;
        self.integrate_phase();
        Ok(())
    }

    /// Phase C: wrap every boid back into the world
    pub fn wrap(&mut self) -> Result<(), SimError> {
        self.ensure_not_stopped()?;
        self.wrap_phase();
        Ok(())
    }

    fn ensure_not_stopped(&self) -> Result<(), SimError> {
        if self.state == ControllerState::Stopped {
            return Err(SimError::Stopped);
        }
        Ok(())
    }

    fn behavior_phase(&mut self) {
        let boids = self.flock.boids();
        for (i, force) in self.forces.iter_mut().enumerate() {
            *force = steering_force(i, boids, &self.steering);
        }
        for (boid, force) in self.flock.boids_mut().iter_mut().zip(&self.forces) {
            boid.apply_force(*force);
        }
    }

    fn integrate_phase(&mut self) {
        let max_velocity = self.config.max_velocity;
        for boid in self.flock.boids_mut() {
            boid.integrate(max_velocity);
        }
    }

    fn wrap_phase(&mut self) {
        let (max_x, max_y) = (self.config.max_x, self.config.max_y);
        for boid in self.flock.boids_mut() {
            boid.wrap(max_x, max_y);
        }
    }

    /// Halt ticking. Safe at any point between ticks; repeated calls are no-ops.
    pub fn stop(&mut self) {
        if self.state != ControllerState::Stopped {
            log::info!("Simulation stopped after {} ticks", self.tick_count);
            self.state = ControllerState::Stopped;
        }
    }

    /// Owned copy of the current positions for rendering
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self.tick_count, &self.flock)
    }
}
