//! Spatial queries against a world
//!
//! Queries are brute force over every body and return indices in ascending
//! order. They test the exact shape, not just the bounding box.

use fp2d_math::{circle_aabb, Aabb, Vec2};

use crate::body::RigidBody;
use crate::shape::Shape;
use crate::world::World;

/// Whether the body's shape contains `point` (boundary included)
pub fn contains_point(body: &RigidBody, point: Vec2) -> bool {
    match body.shape {
        Shape::Rectangle(aabb) => aabb.contains_point(point),
        Shape::Circle { radius } => body.position.distance_squared(point) <= radius * radius,
    }
}

/// Whether the body's shape overlaps `area` (touching counts)
pub fn overlaps_aabb(body: &RigidBody, area: &Aabb) -> bool {
    match body.shape {
        Shape::Rectangle(aabb) => aabb.intersects(area),
        Shape::Circle { radius } => circle_aabb(body.position, radius, area),
    }
}

impl World {
    /// Indices of bodies containing `point`
    pub fn query_point(&self, point: Vec2) -> Vec<usize> {
        self.iter()
            .filter(|(_, body)| contains_point(body, point))
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices of bodies overlapping `area`
    pub fn query_aabb(&self, area: &Aabb) -> Vec<usize> {
        self.iter()
            .filter(|(_, body)| overlaps_aabb(body, area))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use fp2d_math::Fixed;

    fn m(milli: i64) -> Fixed {
        Fixed::from_milli(milli)
    }

    fn sample_world() -> World {
        let mut world = World::new(PhysicsConfig::zero_gravity());
        // 0: box spanning [0, 2] x [0, 2]
        world
            .add_rect(Fixed::ONE, Fixed::ONE, m(2_000), m(2_000), Fixed::ONE, Fixed::ZERO, true)
            .unwrap();
        // 1: circle of radius 1 at (4, 0)
        world
            .add_circle(m(4_000), Fixed::ZERO, Fixed::ONE, Fixed::ONE, Fixed::ZERO, false)
            .unwrap();
        world
    }

    #[test]
    fn test_query_point() {
        let world = sample_world();
        assert_eq!(world.query_point(Vec2::new(Fixed::ONE, Fixed::ONE)), vec![0]);
        assert_eq!(world.query_point(Vec2::new(m(4_500), Fixed::ZERO)), vec![1]);
        // Inside the circle's bounding box but outside the circle
        assert!(world.query_point(Vec2::new(m(4_900), m(900))).is_empty());
        // Boundary counts
        assert_eq!(world.query_point(Vec2::new(m(2_000), m(2_000))), vec![0]);
    }

    #[test]
    fn test_query_aabb_ascending() {
        let world = sample_world();
        let area = Aabb::new(
            Vec2::new(m(1_500), -m(500)),
            Vec2::new(m(3_500), m(500)),
        );
        assert_eq!(world.query_aabb(&area), vec![0, 1]);

        let corner = Aabb::new(Vec2::new(m(4_800), m(800)), Vec2::new(m(5_000), m(1_000)));
        assert!(world.query_aabb(&corner).is_empty());
    }

    #[test]
    fn test_query_follows_swap_remove() {
        let mut world = sample_world();
        world.remove(0).unwrap();
        assert_eq!(world.query_point(Vec2::new(m(4_000), Fixed::ZERO)), vec![0]);
    }
}
