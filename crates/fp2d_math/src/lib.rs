//! # fp2d_math - Deterministic Fixed-Point Math
//!
//! Integer-only math primitives for the fp2d physics engine. No floating
//! point is used anywhere, so results are bit-identical across platforms.
//!
//! - [`Fixed`]: signed scalar with [`SCALE`] raw units per whole
//! - [`Vec2`]: 2D vector of `Fixed`
//! - [`Aabb`]: axis-aligned bounding box
//! - [`intersect`]: inclusive overlap tests

#![cfg_attr(not(feature = "std"), no_std)]

pub mod fixed;
pub mod vector;
pub mod bounds;
pub mod intersect;

pub use fixed::*;
pub use vector::*;
pub use bounds::*;
pub use intersect::*;

pub mod prelude {
    pub use crate::fixed::{Fixed, SCALE};
    pub use crate::vector::Vec2;
    pub use crate::bounds::Aabb;
    pub use crate::intersect::{aabb_aabb, circle_aabb, circle_circle};
}
