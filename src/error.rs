//! Error types

use thiserror::Error;

/// Construction parameters that cannot drive a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("flock size must be at least 1")]
    EmptyFlock,
    #[error("world bounds must be finite and positive, got {max_x} x {max_y}")]
    InvalidBounds { max_x: f64, max_y: f64 },
    #[error("perception radius must be finite and positive, got {0}")]
    InvalidPerceptionRadius(f64),
    #[error("max velocity must be finite and positive, got {0}")]
    InvalidMaxVelocity(f64),
    #[error("max force must be finite and positive, got {0}")]
    InvalidMaxForce(f64),
}

/// Errors surfaced by the simulation controller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("flock has {actual} boids but the configuration expects {expected}")]
    FlockSizeMismatch { expected: usize, actual: usize },
    #[error("simulation has been stopped")]
    Stopped,
}
