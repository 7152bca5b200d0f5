//! A single flocking agent

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::{Vector2, VectorExt};

/// Half-width of the initial velocity component range
const INITIAL_VELOCITY_SPAN: f64 = 5.0;
/// Half-width of the initial acceleration component range
const INITIAL_ACCELERATION_SPAN: f64 = 0.25;

/// Position, velocity and accumulated acceleration of one agent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
}

impl Boid {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2::ZERO,
        }
    }

    /// Random boid somewhere inside a `max_x` x `max_y` world
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max_x: f64, max_y: f64) -> Self {
        let position = Vector2::new(rng.random_range(0.0..max_x), rng.random_range(0.0..max_y));
        let velocity = Vector2::new(
            rng.random_range(-INITIAL_VELOCITY_SPAN..INITIAL_VELOCITY_SPAN),
            rng.random_range(-INITIAL_VELOCITY_SPAN..INITIAL_VELOCITY_SPAN),
        );
        let acceleration = Vector2::new(
            rng.random_range(-INITIAL_ACCELERATION_SPAN..INITIAL_ACCELERATION_SPAN),
            rng.random_range(-INITIAL_ACCELERATION_SPAN..INITIAL_ACCELERATION_SPAN),
        );
        Self {
            position,
            velocity,
            acceleration,
        }
    }

    /// Accumulate a steering force into this tick's acceleration
    #[inline]
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration += force;
    }

    /// Move by the current velocity, then fold acceleration into velocity.
    ///
    /// Position uses the velocity from before this tick's acceleration.
    /// Acceleration is consumed and reset.
    pub fn integrate(&mut self, max_velocity: f64) {
        self.position += self.velocity;
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limited(max_velocity);
        self.acceleration = Vector2::ZERO;
    }

    /// Toroidal wrap. An axis past an edge snaps to the opposite edge value,
    /// not to a modulo offset.
    pub fn wrap(&mut self, max_x: f64, max_y: f64) {
        if self.position.x > max_x {
            self.position.x = 0.0;
        } else if self.position.x < 0.0 {
            self.position.x = max_x;
        }

        if self.position.y > max_y {
            self.position.y = 0.0;
        } else if self.position.y < 0.0 {
            self.position.y = max_y;
        }
    }
}
