//! Error types for the physics system

use fp2d_math::Fixed;
use thiserror::Error;

/// Physics system errors
///
/// Every variant is raised before any state is written, so a failed call
/// leaves the world exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// Index at or beyond the current body count
    #[error("Rigid body not found: index {index} (count {count})")]
    BodyNotFound { index: usize, count: usize },

    /// Non-positive width, height or radius
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Mass not strictly positive
    #[error("Invalid mass: {0}")]
    InvalidMass(Fixed),

    /// Restitution outside [0, 1]
    #[error("Invalid restitution: {0}")]
    InvalidRestitution(Fixed),

    /// World already holds the configured maximum number of bodies
    #[error("Body capacity exceeded (max {max})")]
    CapacityExceeded { max: usize },

    /// Negative timestep, or one above the configured maximum
    #[error("Invalid timestep: {0}")]
    InvalidTimestep(Fixed),

    /// Forces and velocities cannot be set on static bodies
    #[error("Rigid body {0} is static")]
    StaticBody(usize),

    /// Dynamic-dynamic impulse between bodies of too different masses
    #[error("Unstable mass ratio {ratio} (max {max})")]
    UnstableMassRatio { ratio: Fixed, max: Fixed },

    /// Invalid configuration
    #[error("Invalid physics configuration: {0}")]
    InvalidConfig(String),

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, PhysicsError>;

impl From<bincode::Error> for PhysicsError {
    fn from(e: bincode::Error) -> Self {
        PhysicsError::Snapshot(e.to_string())
    }
}

impl From<toml::de::Error> for PhysicsError {
    fn from(e: toml::de::Error) -> Self {
        PhysicsError::InvalidConfig(e.to_string())
    }
}
