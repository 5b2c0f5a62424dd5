//! Physics materials defining surface properties

use fp2d_math::Fixed;
use serde::{Deserialize, Serialize};

/// Surface response of a body. Only restitution is modelled; friction is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    /// Restitution/bounciness (0 = no bounce, 1 = perfect bounce)
    pub restitution: Fixed,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self::inelastic()
    }
}

impl PhysicsMaterial {
    /// Create a new physics material, clamping restitution into [0, 1]
    pub fn new(restitution: Fixed) -> Self {
        Self {
            restitution: restitution.clamp(Fixed::ZERO, Fixed::ONE),
        }
    }

    /// Bodies stick together on impact
    pub fn inelastic() -> Self {
        Self { restitution: Fixed::ZERO }
    }

    /// Wood material
    pub fn wood() -> Self {
        Self { restitution: Fixed::from_milli(300) }
    }

    /// Bouncy rubber-like material
    pub fn rubber() -> Self {
        Self { restitution: Fixed::from_milli(800) }
    }

    /// No energy lost on impact
    pub fn elastic() -> Self {
        Self { restitution: Fixed::ONE }
    }

    /// Effective restitution of a contact between two materials
    pub fn combine_restitution(&self, other: &PhysicsMaterial) -> Fixed {
        combine_restitution(self.restitution, other.restitution)
    }
}

/// Restitution of a contact: the average of both coefficients
#[inline]
pub fn combine_restitution(a: Fixed, b: Fixed) -> Fixed {
    (a + b).half()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_is_average() {
        let e = PhysicsMaterial::elastic().combine_restitution(&PhysicsMaterial::inelastic());
        assert_eq!(e, Fixed::HALF);
        assert_eq!(combine_restitution(Fixed::ONE, Fixed::ONE), Fixed::ONE);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(PhysicsMaterial::new(Fixed::from_int(3)).restitution, Fixed::ONE);
        assert_eq!(PhysicsMaterial::new(-Fixed::ONE).restitution, Fixed::ZERO);
    }
}
