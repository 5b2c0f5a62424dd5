//! Semi-implicit Euler integration
//!
//! Each phase runs over the whole population before the next one starts:
//! gravity, then velocity, then position. Static bodies are skipped by every
//! phase, so their state never changes.

use fp2d_math::{Fixed, Vec2};

use crate::body::RigidBody;

/// `acceleration.y += gravity`
pub fn apply_gravity(bodies: &mut [RigidBody], gravity: Fixed) {
    for body in bodies.iter_mut().filter(|b| b.is_dynamic()) {
        body.acceleration.y += gravity;
    }
}

/// `velocity += acceleration * dt`
pub fn integrate_velocity(bodies: &mut [RigidBody], dt: Fixed) {
    for body in bodies.iter_mut().filter(|b| b.is_dynamic()) {
        body.velocity += body.acceleration * dt;
    }
}

/// `position += velocity * dt`, refreshing rectangle boxes
pub fn integrate_position(bodies: &mut [RigidBody], dt: Fixed) {
    for body in bodies.iter_mut().filter(|b| b.is_dynamic()) {
        let delta = body.velocity * dt;
        body.translate(delta);
    }
}

/// Drop forces and gravity consumed this step; velocity persists
pub fn reset_accelerations(bodies: &mut [RigidBody]) {
    for body in bodies.iter_mut().filter(|b| b.is_dynamic()) {
        body.acceleration = Vec2::ZERO;
    }
}
