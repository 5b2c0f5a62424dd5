//! Physics events (contacts resolved during a step)

use fp2d_math::{Fixed, Vec2};
use serde::{Deserialize, Serialize};

/// What the first body collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Another body of the same world; `second` indexes that world
    Body,
    /// A static body of the obstacle world; `second` indexes the obstacle world
    Obstacle,
}

/// A contact resolved during the last step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// Index of the first body in the stepped world
    pub first: usize,
    /// Index of the second body, see [`CollisionKind`]
    pub second: usize,
    pub kind: CollisionKind,
    /// Contact normal, pointing from the second body toward the first
    pub normal: Vec2,
    /// Penetration depth before separation
    pub penetration: Fixed,
}

impl CollisionEvent {
    /// Check if this event involves `index` of the stepped world
    pub fn involves(&self, index: usize) -> bool {
        self.first == index || (self.kind == CollisionKind::Body && self.second == index)
    }
}

/// Handler trait for physics events
pub trait PhysicsEventHandler {
    /// Called once per resolved contact
    fn on_collision(&mut self, event: &CollisionEvent);
}

/// Default event handler that collects events into a buffer
#[derive(Debug, Clone, Default)]
pub struct EventCollector {
    /// Collision events of the last step
    pub collision_events: Vec<CollisionEvent>,
}

impl EventCollector {
    /// Create a new event collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all collected events
    pub fn clear(&mut self) {
        self.collision_events.clear();
    }

    pub fn len(&self) -> usize {
        self.collision_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty()
    }

    /// Contacts between bodies of the stepped world
    pub fn body_collisions(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.kind == CollisionKind::Body)
    }

    /// Contacts against obstacle geometry
    pub fn obstacle_collisions(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.kind == CollisionKind::Obstacle)
    }

    /// Forward every collected event to another handler
    pub fn dispatch(&self, handler: &mut dyn PhysicsEventHandler) {
        for event in &self.collision_events {
            handler.on_collision(event);
        }
    }
}

impl PhysicsEventHandler for EventCollector {
    fn on_collision(&mut self, event: &CollisionEvent) {
        self.collision_events.push(*event);
    }
}
