//! Simulation parameters
//!
//! Fixed for the lifetime of a run and checked once, before the first tick.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{SelfExclusion, SteeringParams};

/// Construction parameters for a flock simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlockConfig {
    /// Number of boids (fixed for the run)
    pub flock_size: usize,
    /// World width; x wraps between 0 and this value
    pub max_x: f64,
    /// World height; y wraps between 0 and this value
    pub max_y: f64,
    /// Speed limit applied after integration, and the target speed of steering
    pub max_velocity: f64,
    /// Magnitude cap for cohesion and separation
    pub max_force: f64,
    /// Neighbour distance threshold (strict)
    pub perception_radius: f64,
    /// Which boids separation treats as "self"
    #[serde(default)]
    pub self_exclusion: SelfExclusion,
    /// Seed for the initial random flock
    #[serde(default)]
    pub seed: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            flock_size: DEFAULT_FLOCK_SIZE,
            max_x: DEFAULT_WORLD_WIDTH,
            max_y: DEFAULT_WORLD_HEIGHT,
            max_velocity: DEFAULT_MAX_VELOCITY,
            max_force: DEFAULT_MAX_FORCE,
            perception_radius: DEFAULT_PERCEPTION_RADIUS,
            self_exclusion: SelfExclusion::default(),
            seed: 0,
        }
    }
}

impl FlockConfig {
    pub fn with_flock_size(mut self, flock_size: usize) -> Self {
        self.flock_size = flock_size;
        self
    }

    pub fn with_bounds(mut self, max_x: f64, max_y: f64) -> Self {
        self.max_x = max_x;
        self.max_y = max_y;
        self
    }

    pub fn with_limits(mut self, max_velocity: f64, max_force: f64) -> Self {
        self.max_velocity = max_velocity;
        self.max_force = max_force;
        self
    }

    pub fn with_perception_radius(mut self, perception_radius: f64) -> Self {
        self.perception_radius = perception_radius;
        self
    }

    pub fn with_self_exclusion(mut self, self_exclusion: SelfExclusion) -> Self {
        self.self_exclusion = self_exclusion;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject parameters no tick could run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flock_size == 0 {
            return Err(ConfigError::EmptyFlock);
        }
        if !is_positive(self.max_x) || !is_positive(self.max_y) {
            return Err(ConfigError::InvalidBounds {
                max_x: self.max_x,
                max_y: self.max_y,
            });
        }
        if !is_positive(self.perception_radius) {
            return Err(ConfigError::InvalidPerceptionRadius(self.perception_radius));
        }
        if !is_positive(self.max_velocity) {
            return Err(ConfigError::InvalidMaxVelocity(self.max_velocity));
        }
        if !is_positive(self.max_force) {
            return Err(ConfigError::InvalidMaxForce(self.max_force));
        }
        Ok(())
    }

    /// The subset of parameters the steering rules read
    pub fn steering(&self) -> SteeringParams {
        SteeringParams {
            max_velocity: self.max_velocity,
            max_force: self.max_force,
            perception_radius: self.perception_radius,
            self_exclusion: self.self_exclusion,
        }
    }
}

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
