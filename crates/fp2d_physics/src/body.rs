//! Rigid body types and descriptions

use fp2d_math::{Aabb, Fixed, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};
use crate::material::PhysicsMaterial;
use crate::shape::Shape;

/// Mass sentinel for effectively immovable anchors
pub const INFINITE_MASS: Fixed = Fixed::MAX;

/// Per-body physical state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigidBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub shape: Shape,
    /// Always strictly positive
    pub mass: Fixed,
    /// In [0, 1]
    pub restitution: Fixed,
    /// Static bodies never move but still push dynamic bodies away
    pub is_static: bool,
}

impl RigidBody {
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        !self.is_static
    }

    /// Current bounding box
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.shape.bounds(self.position)
    }

    /// Move to `position`, keeping a rectangle's box centered on it
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.shape = self.shape.recentered(position);
    }

    /// Move by `delta`
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.position + delta);
    }

    /// Check every stored-body invariant
    pub fn validate(&self) -> Result<()> {
        if !self.shape.has_positive_extents() {
            return Err(PhysicsError::InvalidGeometry(format!(
                "{:?} has a non-positive dimension",
                self.shape
            )));
        }
        if let Shape::Rectangle(aabb) = self.shape {
            if aabb.recentered(self.position) != aabb {
                return Err(PhysicsError::InvalidGeometry(
                    "rectangle is not centered on its body".into(),
                ));
            }
        }
        if self.is_static && (self.velocity != Vec2::ZERO || self.acceleration != Vec2::ZERO) {
            return Err(PhysicsError::InvalidGeometry(
                "static body carries velocity or acceleration".into(),
            ));
        }
        validate_mass(self.mass)?;
        validate_restitution(self.restitution)
    }
}

pub(crate) fn validate_mass(mass: Fixed) -> Result<()> {
    if mass.is_positive() {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass(mass))
    }
}

pub(crate) fn validate_restitution(restitution: Fixed) -> Result<()> {
    if restitution < Fixed::ZERO || restitution > Fixed::ONE {
        Err(PhysicsError::InvalidRestitution(restitution))
    } else {
        Ok(())
    }
}

/// Geometry requested for a new body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeDesc {
    Rectangle { width: Fixed, height: Fixed },
    Circle { radius: Fixed },
}

/// Description for creating a rigid body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyDesc {
    pub shape: ShapeDesc,
    /// Initial position
    pub position: Vec2,
    /// Initial velocity, ignored for static bodies
    pub velocity: Vec2,
    pub mass: Fixed,
    pub restitution: Fixed,
    pub is_static: bool,
}

impl BodyDesc {
    /// Dynamic rectangle with unit mass at the origin
    pub fn rect(width: Fixed, height: Fixed) -> Self {
        Self::new(ShapeDesc::Rectangle { width, height })
    }

    /// Dynamic circle with unit mass at the origin
    pub fn circle(radius: Fixed) -> Self {
        Self::new(ShapeDesc::Circle { radius })
    }

    fn new(shape: ShapeDesc) -> Self {
        Self {
            shape,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            mass: Fixed::ONE,
            restitution: PhysicsMaterial::default().restitution,
            is_static: false,
        }
    }

    /// Make the body static
    pub fn fixed(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Static anchor with [`INFINITE_MASS`]
    pub fn anchor(self) -> Self {
        self.fixed().with_mass(INFINITE_MASS)
    }

    /// Set position
    pub fn with_position(mut self, x: Fixed, y: Fixed) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Set initial velocity
    pub fn with_velocity(mut self, x: Fixed, y: Fixed) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Set mass
    pub fn with_mass(mut self, mass: Fixed) -> Self {
        self.mass = mass;
        self
    }

    /// Set restitution
    pub fn with_restitution(mut self, restitution: Fixed) -> Self {
        self.restitution = restitution;
        self
    }

    /// Take restitution from a material
    pub fn with_material(self, material: PhysicsMaterial) -> Self {
        self.with_restitution(material.restitution)
    }

    /// Validate and build the body
    pub fn build(&self) -> Result<RigidBody> {
        let shape = match self.shape {
            ShapeDesc::Rectangle { width, height } => {
                if !width.is_positive() || !height.is_positive() {
                    return Err(PhysicsError::InvalidGeometry(format!(
                        "rectangle extents must be positive, got {} x {}",
                        width, height
                    )));
                }
                Shape::rectangle(self.position, width, height)
            }
            ShapeDesc::Circle { radius } => {
                if !radius.is_positive() {
                    return Err(PhysicsError::InvalidGeometry(format!(
                        "circle radius must be positive, got {}",
                        radius
                    )));
                }
                Shape::circle(radius)
            }
        };

        let body = RigidBody {
            position: self.position,
            velocity: if self.is_static { Vec2::ZERO } else { self.velocity },
            acceleration: Vec2::ZERO,
            shape,
            mass: self.mass,
            restitution: self.restitution,
            is_static: self.is_static,
        };
        body.validate()?;
        Ok(body)
    }
}
