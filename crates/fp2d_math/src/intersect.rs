//! Overlap tests between primitives
//!
//! All tests are inclusive: shapes that merely touch are reported as
//! overlapping. Distances are compared squared so no square root is taken.

use crate::bounds::Aabb;
use crate::fixed::Fixed;
use crate::vector::Vec2;

/// AABB-AABB overlap
#[inline]
pub fn aabb_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

/// Circle-circle overlap
pub fn circle_circle(center_a: Vec2, radius_a: Fixed, center_b: Vec2, radius_b: Fixed) -> bool {
    let reach = radius_a + radius_b;
    center_a.distance_squared(center_b) <= reach * reach
}

/// Circle-AABB overlap via the closest point on the box
pub fn circle_aabb(center: Vec2, radius: Fixed, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}
