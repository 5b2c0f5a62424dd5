//! Physics world - body store and step orchestration
//!
//! Bodies live in a gapless vector and are identified by their current
//! index. Removal swaps the last body into the freed slot, so an index stays
//! valid only until the next removal (see [`crate::handle`] for a stable
//! layer on top).

use fp2d_math::{Fixed, Vec2};

use crate::body::{BodyDesc, RigidBody};
use crate::config::PhysicsConfig;
use crate::error::{PhysicsError, Result};
use crate::events::{CollisionEvent, CollisionKind, EventCollector, PhysicsEventHandler};
use crate::integrator;
use crate::resolver;

/// A collection of rigid bodies advanced one timestep at a time
#[derive(Debug, Clone)]
pub struct World {
    /// Configuration
    config: PhysicsConfig,

    /// Index-addressed bodies, no gaps
    bodies: Vec<RigidBody>,

    /// Contacts resolved by the last committed step
    events: EventCollector,
}

impl World {
    /// Create an empty world
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            events: EventCollector::new(),
        }
    }

    /// Create an empty world after validating `config`
    pub fn try_new(config: PhysicsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Rebuild a world from already constructed bodies, checking every invariant
    pub(crate) fn from_bodies(config: PhysicsConfig, bodies: Vec<RigidBody>) -> Result<Self> {
        config.validate()?;
        if bodies.len() > config.max_bodies {
            return Err(PhysicsError::CapacityExceeded {
                max: config.max_bodies,
            });
        }
        for body in &bodies {
            body.validate()?;
        }
        Ok(Self {
            config,
            bodies,
            events: EventCollector::new(),
        })
    }

    /// Get the physics configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    // ==================== Bodies ====================

    /// Add a rectangle centered on `(x, y)` and return its index
    #[allow(clippy::too_many_arguments)]
    pub fn add_rect(
        &mut self,
        x: Fixed,
        y: Fixed,
        width: Fixed,
        height: Fixed,
        mass: Fixed,
        restitution: Fixed,
        is_static: bool,
    ) -> Result<usize> {
        let desc = BodyDesc::rect(width, height)
            .with_position(x, y)
            .with_mass(mass)
            .with_restitution(restitution);
        self.add_body(if is_static { desc.fixed() } else { desc })
    }

    /// Add a circle centered on `(x, y)` and return its index
    pub fn add_circle(
        &mut self,
        x: Fixed,
        y: Fixed,
        radius: Fixed,
        mass: Fixed,
        restitution: Fixed,
        is_static: bool,
    ) -> Result<usize> {
        let desc = BodyDesc::circle(radius)
            .with_position(x, y)
            .with_mass(mass)
            .with_restitution(restitution);
        self.add_body(if is_static { desc.fixed() } else { desc })
    }

    /// Validate `desc`, append the body and return its index
    pub fn add_body(&mut self, desc: BodyDesc) -> Result<usize> {
        let body = desc.build()?;
        if self.bodies.len() >= self.config.max_bodies {
            return Err(PhysicsError::CapacityExceeded {
                max: self.config.max_bodies,
            });
        }

        self.bodies.push(body);
        let index = self.bodies.len() - 1;
        log::debug!(
            "added {:?} body {} at ({}, {})",
            body.shape.tag(),
            index,
            body.position.x,
            body.position.y
        );
        Ok(index)
    }

    /// Remove the body at `index` by swapping the last body into its slot.
    ///
    /// Returns `Some(index)` when another body was moved into `index`, or
    /// `None` when the removed body was the last one. Collision events of
    /// the previous step are dropped since their indices no longer hold.
    pub fn remove(&mut self, index: usize) -> Result<Option<usize>> {
        self.check_index(index)?;
        let last = self.bodies.len() - 1;
        self.bodies.swap_remove(index);
        self.events.clear();

        let moved = (index != last).then_some(index);
        match moved {
            Some(slot) => log::debug!("removed body {}, body {} moved into slot {}", index, last, slot),
            None => log::debug!("removed body {}", index),
        }
        Ok(moved)
    }

    /// Remove every body
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.events.clear();
    }

    /// Copy of the body at `index`
    pub fn get(&self, index: usize) -> Result<RigidBody> {
        self.body(index).copied()
    }

    /// Borrow the body at `index`
    pub fn body(&self, index: usize) -> Result<&RigidBody> {
        self.bodies.get(index).ok_or(PhysicsError::BodyNotFound {
            index,
            count: self.bodies.len(),
        })
    }

    /// Number of bodies
    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// All bodies in index order
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &RigidBody)> {
        self.bodies.iter().enumerate()
    }

    /// Accumulate `force / mass` into the body's acceleration until the next step
    pub fn apply_force(&mut self, index: usize, fx: Fixed, fy: Fixed) -> Result<()> {
        let body = self.dynamic_body_mut(index)?;
        let delta = Vec2::new(fx, fy)
            .checked_div(body.mass)
            .ok_or(PhysicsError::InvalidMass(body.mass))?;
        body.acceleration += delta;
        Ok(())
    }

    /// Overwrite the body's velocity
    pub fn set_velocity(&mut self, index: usize, vx: Fixed, vy: Fixed) -> Result<()> {
        let body = self.dynamic_body_mut(index)?;
        body.velocity = Vec2::new(vx, vy);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        self.body(index).map(|_| ())
    }

    fn dynamic_body_mut(&mut self, index: usize) -> Result<&mut RigidBody> {
        let count = self.bodies.len();
        let body = self
            .bodies
            .get_mut(index)
            .ok_or(PhysicsError::BodyNotFound { index, count })?;
        if body.is_static {
            return Err(PhysicsError::StaticBody(index));
        }
        Ok(body)
    }

    // ==================== Simulation ====================

    /// Advance the simulation by `dt`.
    ///
    /// A zero timestep does nothing. The step is atomic: on error the world
    /// is left exactly as it was.
    pub fn step(&mut self, dt: Fixed) -> Result<()> {
        self.step_internal(dt, None)
    }

    /// Advance by `dt`, additionally colliding dynamic bodies against the
    /// static bodies of `obstacles`. Only bodies of `self` are moved.
    pub fn step_with_obstacles(&mut self, dt: Fixed, obstacles: &World) -> Result<()> {
        self.step_internal(dt, Some(obstacles))
    }

    fn step_internal(&mut self, dt: Fixed, obstacles: Option<&World>) -> Result<()> {
        if dt.is_zero() {
            return Ok(());
        }
        if dt.is_negative() || dt > self.config.max_timestep {
            return Err(PhysicsError::InvalidTimestep(dt));
        }

        let mut scratch = self.bodies.clone();
        let mut events = EventCollector::new();

        integrator::apply_gravity(&mut scratch, self.config.gravity);
        integrator::integrate_velocity(&mut scratch, dt);
        integrator::integrate_position(&mut scratch, dt);

        let outcome = resolve_pairs(&mut scratch, self.config.max_mass_ratio, &mut events)
            .and_then(|()| match obstacles {
                Some(obstacles) => resolve_obstacles(
                    &mut scratch,
                    obstacles.bodies(),
                    self.config.max_mass_ratio,
                    &mut events,
                ),
                None => Ok(()),
            });
        if let Err(e) = outcome {
            log::warn!("step of {} aborted: {}", dt, e);
            return Err(e);
        }

        integrator::reset_accelerations(&mut scratch);

        self.bodies = scratch;
        self.events = events;
        log::debug!(
            "stepped {} bodies by {}, {} contacts",
            self.bodies.len(),
            dt,
            self.events.len()
        );
        Ok(())
    }

    // ==================== Events ====================

    /// Get collision events from the last step
    pub fn collision_events(&self) -> &[CollisionEvent] {
        &self.events.collision_events
    }

    /// Contacts between bodies of this world
    pub fn body_collisions(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.events.body_collisions()
    }

    /// Contacts against obstacle bodies
    pub fn obstacle_collisions(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.events.obstacle_collisions()
    }

    /// Contacts involving the body at `index`
    pub fn events_for(&self, index: usize) -> impl Iterator<Item = &CollisionEvent> {
        self.events
            .collision_events
            .iter()
            .filter(move |e| e.involves(index))
    }

    /// Forward the last step's events to `handler`
    pub fn dispatch_events(&self, handler: &mut dyn PhysicsEventHandler) {
        self.events.dispatch(handler);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

/// Resolve every pair `i < j` in index order
fn resolve_pairs(
    bodies: &mut [RigidBody],
    max_mass_ratio: Fixed,
    events: &mut dyn PhysicsEventHandler,
) -> Result<()> {
    let count = bodies.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let resolution = resolver::resolve(bodies[i], bodies[j], max_mass_ratio)?;
            if !resolution.collided {
                continue;
            }
            bodies[i] = resolution.first;
            bodies[j] = resolution.second;

            if let Some(contact) = resolution.contact {
                log::trace!("contact {} <-> {}: depth {}", i, j, contact.penetration);
                events.on_collision(&CollisionEvent {
                    first: i,
                    second: j,
                    kind: CollisionKind::Body,
                    normal: contact.normal,
                    penetration: contact.penetration,
                });
            }
        }
    }
    Ok(())
}

/// Resolve every dynamic body against every static obstacle
fn resolve_obstacles(
    bodies: &mut [RigidBody],
    obstacles: &[RigidBody],
    max_mass_ratio: Fixed,
    events: &mut dyn PhysicsEventHandler,
) -> Result<()> {
    for (i, body) in bodies.iter_mut().enumerate() {
        if body.is_static {
            continue;
        }
        for (k, obstacle) in obstacles.iter().enumerate().filter(|(_, o)| o.is_static) {
            let resolution = resolver::resolve(*body, *obstacle, max_mass_ratio)?;
            if !resolution.collided {
                continue;
            }
            *body = resolution.first;

            if let Some(contact) = resolution.contact {
                log::trace!("contact {} <-> obstacle {}: depth {}", i, k, contact.penetration);
                events.on_collision(&CollisionEvent {
                    first: i,
                    second: k,
                    kind: CollisionKind::Obstacle,
                    normal: contact.normal,
                    penetration: contact.penetration,
                });
            }
        }
    }
    Ok(())
}
