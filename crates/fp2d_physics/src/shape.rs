//! Collision shapes

use fp2d_math::{Aabb, Fixed, Vec2};
use serde::{Deserialize, Serialize};

/// Persisted discriminant of a [`Shape`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShapeTag {
    Rectangle = 0,
    Circle = 1,
}

impl ShapeTag {
    /// Decode a persisted tag
    pub fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Rectangle),
            1 => Some(Self::Circle),
            _ => None,
        }
    }
}

/// Collision shape of a rigid body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Box kept centered on the body position
    Rectangle(Aabb),
    /// Circle around the body position
    Circle { radius: Fixed },
}

impl Shape {
    /// Rectangle of the given full size centered on `center`
    pub fn rectangle(center: Vec2, width: Fixed, height: Fixed) -> Self {
        Self::Rectangle(Aabb::from_center_size(center, width, height))
    }

    /// Circle with radius
    pub fn circle(radius: Fixed) -> Self {
        Self::Circle { radius }
    }

    pub fn tag(&self) -> ShapeTag {
        match self {
            Self::Rectangle(_) => ShapeTag::Rectangle,
            Self::Circle { .. } => ShapeTag::Circle,
        }
    }

    /// Bounding box for a body at `position`
    pub fn bounds(&self, position: Vec2) -> Aabb {
        match self {
            Self::Rectangle(aabb) => *aabb,
            Self::Circle { radius } => Aabb::from_circle(position, *radius),
        }
    }

    /// Shape moved so it is centered on `position`
    pub fn recentered(&self, position: Vec2) -> Self {
        match self {
            Self::Rectangle(aabb) => Self::Rectangle(aabb.recentered(position)),
            circle @ Self::Circle { .. } => *circle,
        }
    }

    /// All dimensions strictly positive
    pub fn has_positive_extents(&self) -> bool {
        match self {
            Self::Rectangle(aabb) => {
                let size = aabb.size();
                size.x.is_positive() && size.y.is_positive()
            }
            Self::Circle { radius } => radius.is_positive(),
        }
    }
}
