//! Axis-aligned bounding boxes

use crate::fixed::Fixed;
use crate::vector::Vec2;

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Create from center and full width/height.
    ///
    /// Odd raw extents lose their last raw unit to the halving.
    #[inline]
    pub fn from_center_size(center: Vec2, width: Fixed, height: Fixed) -> Self {
        Self::from_center_half_extents(center, Vec2::new(width.half(), height.half()))
    }

    /// Bounding box of a circle
    #[inline]
    pub fn from_circle(center: Vec2, radius: Fixed) -> Self {
        Self::from_center_half_extents(center, Vec2::splat(radius))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.min.x + (self.max.x - self.min.x).half(),
            self.min.y + (self.max.y - self.min.y).half(),
        )
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new((self.max.x - self.min.x).half(), (self.max.y - self.min.y).half())
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if the AABB is valid (min <= max)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Overlap test; touching edges count as overlapping
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Point inside the box closest to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Same extents, centered on `center`
    #[inline]
    pub fn recentered(&self, center: Vec2) -> Self {
        Self::from_center_half_extents(center, self.half_extents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Vec2 {
        Vec2::new(Fixed::from_milli(x), Fixed::from_milli(y))
    }

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(p(1_000, 2_000), Fixed::from_int(2), Fixed::from_int(4));
        assert_eq!(aabb.min, p(0, 0));
        assert_eq!(aabb.max, p(2_000, 4_000));
        assert_eq!(aabb.center(), p(1_000, 2_000));
        assert_eq!(aabb.size(), p(2_000, 4_000));
        assert!(aabb.is_valid());
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::new(p(0, 0), p(1_000, 1_000));
        let b = Aabb::new(p(500, 500), p(1_500, 1_500));
        let c = Aabb::new(p(2_000, 2_000), p(3_000, 3_000));
        let touching = Aabb::new(p(1_000, 0), p(2_000, 1_000));

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&touching));
    }

    #[test]
    fn test_closest_point_and_contains() {
        let a = Aabb::new(p(0, 0), p(1_000, 1_000));
        assert_eq!(a.closest_point(p(2_000, 500)), p(1_000, 500));
        assert_eq!(a.closest_point(p(250, 250)), p(250, 250));
        assert!(a.contains_point(p(1_000, 1_000)));
        assert!(!a.contains_point(p(1_001, 0)));
    }

    #[test]
    fn test_recentered_keeps_extents() {
        let a = Aabb::from_center_size(Vec2::ZERO, Fixed::from_int(3), Fixed::ONE);
        let moved = a.recentered(p(10_000, -5_000));
        assert_eq!(moved.size(), a.size());
        assert_eq!(moved.center(), p(10_000, -5_000));
    }

    #[test]
    fn test_from_circle() {
        let a = Aabb::from_circle(p(1_000, 1_000), Fixed::from_milli(250));
        assert_eq!(a.min, p(750, 750));
        assert_eq!(a.max, p(1_250, 1_250));
    }
}
