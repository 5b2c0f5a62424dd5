//! Physics configuration
//!
//! Fixed-point fields are stored as raw integers when serialized, so a TOML
//! file spells 9.81 as `9810000000`:
//!
//! ```toml
//! gravity = 9810000000
//! max_bodies = 100
//! max_timestep = 1000000000
//! max_mass_ratio = 1000000000000
//! ```

use std::path::Path;

use fp2d_math::Fixed;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// Physics world configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to every dynamic body's y acceleration each step (y grows downward)
    pub gravity: Fixed,

    /// Maximum number of bodies a world may hold
    pub max_bodies: usize,

    /// Largest accepted timestep
    pub max_timestep: Fixed,

    /// Largest heavier/lighter mass ratio allowed in a dynamic-dynamic impulse
    pub max_mass_ratio: Fixed,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Fixed::from_milli(9_810),
            max_bodies: 100,
            max_timestep: Fixed::ONE,
            max_mass_ratio: Fixed::from_int(1_000),
        }
    }
}

impl PhysicsConfig {
    /// No gravity, everything else default
    pub fn zero_gravity() -> Self {
        Self {
            gravity: Fixed::ZERO,
            ..Default::default()
        }
    }

    /// Heavy gravity and short maximum step for snappy platformer motion
    pub fn arcade() -> Self {
        Self {
            gravity: Fixed::from_int(20),
            max_timestep: Fixed::from_milli(50),
            ..Default::default()
        }
    }

    /// Set gravity
    pub fn with_gravity(mut self, gravity: Fixed) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set body capacity
    pub fn with_max_bodies(mut self, max_bodies: usize) -> Self {
        self.max_bodies = max_bodies;
        self
    }

    /// Set the largest accepted timestep
    pub fn with_max_timestep(mut self, max_timestep: Fixed) -> Self {
        self.max_timestep = max_timestep;
        self
    }

    /// Set the mass ratio bound
    pub fn with_max_mass_ratio(mut self, max_mass_ratio: Fixed) -> Self {
        self.max_mass_ratio = max_mass_ratio;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_bodies == 0 {
            return Err(PhysicsError::InvalidConfig("max_bodies must be at least 1".into()));
        }
        if !self.max_timestep.is_positive() {
            return Err(PhysicsError::InvalidConfig(format!(
                "max_timestep must be positive, got {}",
                self.max_timestep
            )));
        }
        if self.max_mass_ratio < Fixed::ONE {
            return Err(PhysicsError::InvalidConfig(format!(
                "max_mass_ratio must be at least 1, got {}",
                self.max_mass_ratio
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration; missing keys take defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PhysicsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PhysicsError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}
