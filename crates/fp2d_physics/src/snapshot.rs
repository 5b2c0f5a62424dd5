//! Fixed-width body records and world snapshots
//!
//! A [`BodyRecord`] stores every field as a raw fixed-point integer, and the
//! shape as a tag plus four raw words:
//!
//! | tag | shape_data                         |
//! |-----|------------------------------------|
//! | 0   | `[min.x, min.y, max.x, max.y]`     |
//! | 1   | `[radius, 0, 0, 0]`                |
//!
//! Snapshots go through `bincode`, whose default encoding keeps integers at
//! fixed width, so every record encodes to the same number of bytes.

use fp2d_math::{Aabb, Fixed, Vec2};
use serde::{Deserialize, Serialize};

use crate::body::RigidBody;
use crate::config::PhysicsConfig;
use crate::error::{PhysicsError, Result};
use crate::shape::{Shape, ShapeTag};
use crate::world::World;

/// Flat persisted form of a [`RigidBody`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyRecord {
    pub position_x: i64,
    pub position_y: i64,
    pub velocity_x: i64,
    pub velocity_y: i64,
    pub acceleration_x: i64,
    pub acceleration_y: i64,
    pub shape_tag: u8,
    pub shape_data: [i64; 4],
    pub mass: i64,
    pub restitution: i64,
    pub is_static: bool,
}

impl From<&RigidBody> for BodyRecord {
    fn from(body: &RigidBody) -> Self {
        let shape_data = match body.shape {
            Shape::Rectangle(aabb) => [
                aabb.min.x.raw(),
                aabb.min.y.raw(),
                aabb.max.x.raw(),
                aabb.max.y.raw(),
            ],
            Shape::Circle { radius } => [radius.raw(), 0, 0, 0],
        };
        Self {
            position_x: body.position.x.raw(),
            position_y: body.position.y.raw(),
            velocity_x: body.velocity.x.raw(),
            velocity_y: body.velocity.y.raw(),
            acceleration_x: body.acceleration.x.raw(),
            acceleration_y: body.acceleration.y.raw(),
            shape_tag: body.shape.tag() as u8,
            shape_data,
            mass: body.mass.raw(),
            restitution: body.restitution.raw(),
            is_static: body.is_static,
        }
    }
}

impl TryFrom<BodyRecord> for RigidBody {
    type Error = PhysicsError;

    fn try_from(record: BodyRecord) -> Result<Self> {
        let tag = ShapeTag::from_u8(record.shape_tag)
            .ok_or_else(|| PhysicsError::Snapshot(format!("unknown shape tag {}", record.shape_tag)))?;
        let [a, b, c, d] = record.shape_data;
        let shape = match tag {
            ShapeTag::Rectangle => Shape::Rectangle(Aabb::new(
                Vec2::new(Fixed::from_raw(a), Fixed::from_raw(b)),
                Vec2::new(Fixed::from_raw(c), Fixed::from_raw(d)),
            )),
            ShapeTag::Circle => {
                if [b, c, d] != [0; 3] {
                    return Err(PhysicsError::Snapshot("circle record carries extra shape data".into()));
                }
                Shape::circle(Fixed::from_raw(a))
            }
        };

        let body = RigidBody {
            position: vec2(record.position_x, record.position_y),
            velocity: vec2(record.velocity_x, record.velocity_y),
            acceleration: vec2(record.acceleration_x, record.acceleration_y),
            shape,
            mass: Fixed::from_raw(record.mass),
            restitution: Fixed::from_raw(record.restitution),
            is_static: record.is_static,
        };
        body.validate()?;
        Ok(body)
    }
}

fn vec2(x: i64, y: i64) -> Vec2 {
    Vec2::new(Fixed::from_raw(x), Fixed::from_raw(y))
}

/// Configuration plus body records, the unit [`encode_world`] writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub config: PhysicsConfig,
    pub bodies: Vec<BodyRecord>,
}

impl World {
    /// Records for every body, in index order
    pub fn to_records(&self) -> Vec<BodyRecord> {
        self.bodies().iter().map(BodyRecord::from).collect()
    }

    /// Rebuild a world from records, validating every body and the capacity
    pub fn from_records(config: PhysicsConfig, records: &[BodyRecord]) -> Result<Self> {
        let bodies = records
            .iter()
            .map(|record| RigidBody::try_from(*record))
            .collect::<Result<Vec<_>>>()?;
        World::from_bodies(config, bodies)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            config: *self.config(),
            bodies: self.to_records(),
        }
    }
}

/// Serialize a world with bincode
pub fn encode_world(world: &World) -> Result<Vec<u8>> {
    Ok(bincode::serialize(&world.snapshot())?)
}

/// Deserialize and validate a world written by [`encode_world`]
pub fn decode_world(bytes: &[u8]) -> Result<World> {
    let snapshot: WorldSnapshot = bincode::deserialize(bytes)?;
    log::debug!("decoded snapshot with {} bodies", snapshot.bodies.len());
    World::from_records(snapshot.config, &snapshot.bodies)
}
