//! Fixed-size, index-stable collection of boids
//!
//! Index `i` identifies agent `i` for the whole run: boids are never inserted,
//! removed or reordered once the flock exists.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::boid::Boid;
use super::vector::Vector2;

/// The population of agents, stored contiguously
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flock {
    boids: Vec<Boid>,
}

impl Flock {
    /// Adopt an explicit set of boids, in index order
    pub fn new(boids: Vec<Boid>) -> Self {
        Self { boids }
    }

    /// `size` random boids inside a `max_x` x `max_y` world
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: usize, max_x: f64, max_y: f64) -> Self {
        let boids = (0..size).map(|_| Boid::random(rng, max_x, max_y)).collect();
        Self { boids }
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Boid> {
        self.boids.get(index)
    }

    /// Read-only view of every boid in index order
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// Mutable access to the agents' fields; the length stays fixed
    pub(crate) fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    /// Owned copy of every position, in index order
    pub fn positions(&self) -> Vec<Vector2> {
        self.boids.iter().map(|b| b.position).collect()
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Boid;
    type IntoIter = std::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}

/// Positions of the whole flock at the end of one tick.
///
/// This is what crosses over to rendering: an owned copy, never a view into
/// live simulation state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Tick that produced these positions (0 = initial state)
    pub tick: u64,
    /// One position per boid, in flock index order
    pub positions: Vec<Vector2>,
}

impl FrameSnapshot {
    pub fn capture(tick: u64, flock: &Flock) -> Self {
        Self {
            tick,
            positions: flock.positions(),
        }
    }

    /// Mean position, or `None` for an empty frame
    pub fn centroid(&self) -> Option<Vector2> {
        if self.positions.is_empty() {
            return None;
        }
        let sum: Vector2 = self.positions.iter().copied().sum();
        Some(sum / self.positions.len() as f64)
    }
}
