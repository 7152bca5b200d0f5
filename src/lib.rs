//! Flock Sim - boid flocking in a toroidal world
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering rules, tick phases, scheduling)
//! - `config`: Construction parameters and validation
//! - `render`: Frame handoff to an external renderer
//! - `error`: Configuration and controller errors

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::FlockConfig;
pub use error::{ConfigError, SimError};
pub use render::{LogSink, RecordingSink, RenderSink};
pub use sim::{Boid, Flock, FrameSnapshot, SimulationController, Vector2};

/// Simulation constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation tick period (60 Hz)
    pub const TICK_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / 60);

    /// Default number of boids
    pub const DEFAULT_FLOCK_SIZE: usize = 400;

    /// Default world width
    pub const DEFAULT_WORLD_WIDTH: f64 = 1024.0;
    /// Default world height
    pub const DEFAULT_WORLD_HEIGHT: f64 = 768.0;

    /// Default speed limit
    pub const DEFAULT_MAX_VELOCITY: f64 = 5.0;
    /// Default cap on cohesion and separation
    pub const DEFAULT_MAX_FORCE: f64 = 1.0;
    /// Default neighbour distance
    pub const DEFAULT_PERCEPTION_RADIUS: f64 = 100.0;
}
