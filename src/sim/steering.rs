//! Steering rules
//!
//! Pure functions of one boid's index and an immutable view of the whole
//! flock. Each returns a velocity-space correction to be added into that
//! boid's acceleration; none of them mutate anything.
//!
//! Neighbours are boids strictly closer than the perception radius. Alignment
//! and cohesion count the boid itself (distance 0). Separation skips the boid
//! itself according to [`SelfExclusion`].

use serde::{Deserialize, Serialize};

use super::boid::Boid;
use super::vector::{Vector2, VectorExt};

/// How separation decides which entry is "the boid itself"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelfExclusion {
    /// Skip every boid whose position equals this boid's position exactly.
    /// Distinct boids stacked on the same point do not repel each other.
    #[default]
    ByPosition,
    /// Skip only this boid's own index. Distinct boids stacked on the same
    /// point are counted as neighbours but contribute no direction.
    ByIndex,
}

/// Limits shared by all three rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteeringParams {
    pub max_velocity: f64,
    pub max_force: f64,
    pub perception_radius: f64,
    pub self_exclusion: SelfExclusion,
}

impl SteeringParams {
    #[inline]
    fn perceives(&self, a: Vector2, b: Vector2) -> bool {
        (a - b).length() < self.perception_radius
    }
}

/// Steer toward the average heading of neighbours (self included).
///
/// Unlike cohesion and separation the result is not clamped to `max_force`.
///
/// # Panics
///
/// Panics if `index` is out of bounds for `boids`.
pub fn alignment(index: usize, boids: &[Boid], params: &SteeringParams) -> Vector2 {
    let current = &boids[index];
    let mut sum = Vector2::ZERO;
    let mut total = 0usize;

    for other in boids {
        if params.perceives(current.position, other.position) {
            sum += other.velocity;
            total += 1;
        }
    }

    if total == 0 {
        return Vector2::ZERO;
    }

    let average = (sum / total as f64).with_length(params.max_velocity);
    average - current.velocity
}

/// Steer toward the average position of neighbours (self included)
///
/// # Panics
///
/// Panics if `index` is out of bounds for `boids`.
pub fn cohesion(index: usize, boids: &[Boid], params: &SteeringParams) -> Vector2 {
    let current = &boids[index];
    let mut sum = Vector2::ZERO;
    let mut total = 0usize;

    for other in boids {
        if params.perceives(other.position, current.position) {
            sum += other.position;
            total += 1;
        }
    }

    if total == 0 {
        return Vector2::ZERO;
    }

    let to_center = (sum / total as f64 - current.position).with_length(params.max_velocity);
    (to_center - current.velocity).limited(params.max_force)
}

/// Steer away from neighbours, one unit vector per neighbour
///
/// # Panics
///
/// Panics if `index` is out of bounds for `boids`.
pub fn separation(index: usize, boids: &[Boid], params: &SteeringParams) -> Vector2 {
    let current = &boids[index];
    let mut sum = Vector2::ZERO;
    let mut total = 0usize;

    for (j, other) in boids.iter().enumerate() {
        let is_self = match params.self_exclusion {
            SelfExclusion::ByPosition => other.position == current.position,
            SelfExclusion::ByIndex => j == index,
        };
        if is_self {
            continue;
        }

        let distance = (other.position - current.position).length();
        if distance < params.perception_radius {
            // Coincident points (only reachable with ByIndex) have no direction
            if distance > 0.0 {
                sum += (current.position - other.position) / distance;
            }
            total += 1;
        }
    }

    if total == 0 {
        return Vector2::ZERO;
    }

    let away = (sum / total as f64).with_length(params.max_velocity);
    (away - current.velocity).limited(params.max_force)
}

/// Sum of all three rules for one boid
///
/// # Panics
///
/// Panics if `index` is out of bounds for `boids`.
pub fn steering_force(index: usize, boids: &[Boid], params: &SteeringParams) -> Vector2 {
    alignment(index, boids, params) + cohesion(index, boids, params) + separation(index, boids, params)
}
