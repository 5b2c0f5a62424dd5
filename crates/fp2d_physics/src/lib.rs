//! fp2d Physics - Deterministic Fixed-Point 2D Rigid Bodies
//!
//! Integer-only rigid-body simulation: every position, velocity, mass and
//! timestep is a [`Fixed`](fp2d_math::Fixed), so identical inputs give
//! bit-identical results on every platform.
//!
//! # Features
//!
//! - Rectangle (axis-aligned) and circle bodies, static or dynamic
//! - Semi-implicit Euler integration with configurable gravity
//! - Brute-force pairwise collision detection and impulse response
//! - Collision against a shared read-only obstacle world
//! - Collision events, spatial queries, stable handles, snapshots
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                      World                        │
//! │  ┌──────────────────┐  ┌───────────┐ ┌─────────┐ │
//! │  │ Vec<RigidBody>   │  │  Events   │ │ Queries │ │
//! │  │ (index identity) │  └───────────┘ └─────────┘ │
//! │  └──────────────────┘                             │
//! │  ┌───────────────────────────────────────────────┐│
//! │  │ step: gravity → velocity → position           ││
//! │  │       → pairs (i < j) → obstacles → reset     ││
//! │  └───────────────────────────────────────────────┘│
//! └───────────────────────────────────────────────────┘
//!                         │
//!          ┌──────────────┼──────────────┐
//!          ▼              ▼              ▼
//!    ┌───────────┐  ┌───────────┐  ┌───────────┐
//!    │integrator │  │ collision │  │ resolver  │
//!    └───────────┘  └───────────┘  └───────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use fp2d_physics::prelude::*;
//! use fp2d_math::Fixed;
//!
//! let mut world = World::new(PhysicsConfig::default());
//! let ball = world
//!     .add_circle(
//!         Fixed::ZERO,
//!         Fixed::ZERO,
//!         Fixed::from_milli(250),
//!         Fixed::ONE,
//!         Fixed::HALF,
//!         false,
//!     )
//!     .unwrap();
//!
//! world.step(Fixed::from_milli(20)).unwrap();
//! assert_eq!(world.get(ball).unwrap().velocity.y, Fixed::from_micro(196_200));
//! ```

pub mod body;
pub mod collision;
pub mod config;
pub mod error;
pub mod events;
pub mod handle;
pub mod integrator;
pub mod material;
pub mod query;
pub mod resolver;
pub mod shape;
pub mod snapshot;
pub mod world;

pub mod prelude {
    //! Common imports for physics functionality
    pub use crate::body::{BodyDesc, RigidBody, ShapeDesc, INFINITE_MASS};
    pub use crate::collision::Contact;
    pub use crate::config::PhysicsConfig;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::events::{CollisionEvent, CollisionKind, EventCollector, PhysicsEventHandler};
    pub use crate::handle::{BodyHandle, BodyHandles};
    pub use crate::material::PhysicsMaterial;
    pub use crate::resolver::Resolution;
    pub use crate::shape::{Shape, ShapeTag};
    pub use crate::snapshot::{decode_world, encode_world, BodyRecord, WorldSnapshot};
    pub use crate::world::World;
}

pub use prelude::*;
