//! Deterministic flocking simulation
//!
//! Everything that decides where boids go lives here:
//! - Seeded RNG only
//! - Stable iteration order (by flock index)
//! - Flock-wide phase barriers within a tick
//! - No rendering or platform dependencies

pub mod boid;
pub mod controller;
pub mod flock;
pub mod runner;
pub mod steering;
pub mod vector;

pub use boid::Boid;
pub use controller::{ControllerState, SimulationController};
pub use flock::{Flock, FrameSnapshot};
pub use runner::{Pacer, RunSummary, SimulationHandle, StopHandle, run_blocking, spawn};
pub use steering::{SelfExclusion, SteeringParams, alignment, cohesion, separation, steering_force};
pub use vector::{Vector2, VectorExt};
