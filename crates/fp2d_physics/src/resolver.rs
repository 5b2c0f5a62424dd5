//! Impulse-based collision response
//!
//! [`resolve`] works on copies of two bodies and hands them back together
//! with a `collided` flag; the caller writes the bodies back only when the
//! flag is set. Response happens in two stages:
//!
//! 1. positional correction pushes overlapping bodies apart along the contact
//!    normal (static bodies never move);
//! 2. velocity response applies an impulse when the bodies are approaching.

use fp2d_math::Fixed;

use crate::body::RigidBody;
use crate::collision::{self, Contact};
use crate::error::{PhysicsError, Result};
use crate::material::combine_restitution;

/// Outcome of resolving one pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub first: RigidBody,
    pub second: RigidBody,
    /// Contact used for the response, if one could be computed
    pub contact: Option<Contact>,
    /// Whether the pair overlapped; write `first`/`second` back only if set
    pub collided: bool,
}

/// Detect and resolve a collision between two bodies.
///
/// Static-static pairs report `collided` without any work. Fails with
/// [`PhysicsError::UnstableMassRatio`] when two dynamic bodies approaching
/// each other have masses further apart than `max_mass_ratio`.
pub fn resolve(first: RigidBody, second: RigidBody, max_mass_ratio: Fixed) -> Result<Resolution> {
    let mut resolution = Resolution {
        first,
        second,
        contact: None,
        collided: false,
    };

    if first.is_static && second.is_static {
        resolution.collided = true;
        return Ok(resolution);
    }
    if !collision::detect(&first, &second) {
        return Ok(resolution);
    }
    resolution.collided = true;

    let Some(contact) = collision::contact(&first, &second) else {
        return Ok(resolution);
    };
    resolution.contact = Some(contact);

    separate(&mut resolution.first, &mut resolution.second, &contact);
    apply_impulse(
        &mut resolution.first,
        &mut resolution.second,
        &contact,
        max_mass_ratio,
    )?;
    Ok(resolution)
}

/// Positional correction along the contact normal
fn separate(a: &mut RigidBody, b: &mut RigidBody, contact: &Contact) {
    let normal = contact.normal;
    match (a.is_dynamic(), b.is_dynamic()) {
        (true, true) => {
            let share = normal * contact.penetration.half();
            a.translate(share);
            b.translate(-share);
        }
        (true, false) => a.translate(normal * contact.penetration),
        (false, true) => b.translate(-(normal * contact.penetration)),
        (false, false) => {}
    }
}

fn apply_impulse(
    a: &mut RigidBody,
    b: &mut RigidBody,
    contact: &Contact,
    max_mass_ratio: Fixed,
) -> Result<()> {
    let normal = contact.normal;
    let vel_along_normal = (a.velocity - b.velocity).dot(normal);
    if vel_along_normal.is_positive() {
        // Already separating
        return Ok(());
    }

    let bounce = Fixed::ONE + combine_restitution(a.restitution, b.restitution);
    match (a.is_dynamic(), b.is_dynamic()) {
        (true, true) => {
            check_mass_ratio(a.mass, b.mass, max_mass_ratio)?;
            // j / m1 = speed * m2 / (m1 + m2), and symmetrically for b
            let speed = -(bounce * vel_along_normal);
            let share_a = b
                .mass
                .share_of_sum(a.mass)
                .ok_or(PhysicsError::InvalidMass(a.mass))?;
            let share_b = a
                .mass
                .share_of_sum(b.mass)
                .ok_or(PhysicsError::InvalidMass(b.mass))?;
            a.velocity += normal * (speed * share_a);
            b.velocity -= normal * (speed * share_b);
        }
        // Static anchor: reflect only the normal component
        (true, false) => a.velocity -= normal * (bounce * vel_along_normal),
        (false, true) => b.velocity += normal * (bounce * vel_along_normal),
        (false, false) => {}
    }
    Ok(())
}

fn check_mass_ratio(m1: Fixed, m2: Fixed, max: Fixed) -> Result<()> {
    let (heavy, light) = if m1 >= m2 { (m1, m2) } else { (m2, m1) };
    let ratio = heavy
        .checked_div(light)
        .ok_or(PhysicsError::InvalidMass(light))?;
    if ratio > max {
        log::warn!("refusing impulse between masses {} and {} (ratio {})", m1, m2, ratio);
        return Err(PhysicsError::UnstableMassRatio { ratio, max });
    }
    Ok(())
}
