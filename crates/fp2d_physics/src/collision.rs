//! Collision detection
//!
//! Detection is always broad-then-narrow: bounding boxes first, then the
//! exact test for the shape pair. [`contact`] turns an overlapping pair into
//! a contact normal and penetration depth for the resolver.
//!
//! Normals point from the second body toward the first, i.e. along the
//! direction the first body has to move to separate.

use fp2d_math::{circle_aabb, circle_circle, Aabb, Fixed, Vec2};
use serde::{Deserialize, Serialize};

use crate::body::RigidBody;
use crate::shape::Shape;

/// Contact geometry between two overlapping bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unit normal from the second body toward the first
    pub normal: Vec2,
    /// Overlap depth along `normal`
    pub penetration: Fixed,
}

impl Contact {
    /// Same contact seen from the other body
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            penetration: self.penetration,
        }
    }
}

/// Bounding-box overlap
#[inline]
pub fn broad_phase(a: &RigidBody, b: &RigidBody) -> bool {
    a.bounds().intersects(&b.bounds())
}

/// Exact overlap test for the shape pair
pub fn narrow_phase(a: &RigidBody, b: &RigidBody) -> bool {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle(a.position, ra, b.position, rb)
        }
        // Boxes are their own bounds
        (Shape::Rectangle(_), Shape::Rectangle(_)) => true,
        (Shape::Circle { radius }, Shape::Rectangle(aabb)) => circle_aabb(a.position, radius, &aabb),
        (Shape::Rectangle(aabb), Shape::Circle { radius }) => circle_aabb(b.position, radius, &aabb),
    }
}

/// Broad phase, then narrow phase
#[inline]
pub fn detect(a: &RigidBody, b: &RigidBody) -> bool {
    broad_phase(a, b) && narrow_phase(a, b)
}

/// Contact normal and penetration for an overlapping pair.
///
/// `None` when the pair has no usable normal (two circles with coincident
/// centers); such a pair is treated as already resolved.
pub fn contact(a: &RigidBody, b: &RigidBody) -> Option<Contact> {
    match (a.shape, b.shape) {
        (Shape::Rectangle(box_a), Shape::Rectangle(box_b)) => Some(rect_rect(&box_a, &box_b)),
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circle_circle_contact(a.position, ra, b.position, rb)
        }
        (Shape::Circle { radius }, Shape::Rectangle(aabb)) => {
            Some(circle_rect_contact(a.position, radius, &aabb))
        }
        (Shape::Rectangle(aabb), Shape::Circle { radius }) => {
            Some(circle_rect_contact(b.position, radius, &aabb).flipped())
        }
    }
}

/// Minimum translation vector between two boxes.
///
/// The axis with the smaller overlap wins; an exact tie picks x.
fn rect_rect(a: &Aabb, b: &Aabb) -> Contact {
    let overlap_x = a.max.x.min(b.max.x) - a.min.x.max(b.min.x);
    let overlap_y = a.max.y.min(b.max.y) - a.min.y.max(b.min.y);
    let (center_a, center_b) = (a.center(), b.center());

    if overlap_x <= overlap_y {
        let normal = if center_a.x < center_b.x { -Vec2::X } else { Vec2::X };
        Contact {
            normal,
            penetration: overlap_x,
        }
    } else {
        let normal = if center_a.y < center_b.y { -Vec2::Y } else { Vec2::Y };
        Contact {
            normal,
            penetration: overlap_y,
        }
    }
}

fn circle_circle_contact(pa: Vec2, ra: Fixed, pb: Vec2, rb: Fixed) -> Option<Contact> {
    let delta = pa - pb;
    let normal = delta.normalize()?;
    Some(Contact {
        normal,
        penetration: ra + rb - delta.length(),
    })
}

/// Contact with the circle as the first body
fn circle_rect_contact(center: Vec2, radius: Fixed, aabb: &Aabb) -> Contact {
    let delta = center - aabb.closest_point(center);
    // Center inside the box: push out along +x
    let normal = delta.normalize().unwrap_or(Vec2::X);
    Contact {
        normal,
        penetration: radius - delta.length(),
    }
}
