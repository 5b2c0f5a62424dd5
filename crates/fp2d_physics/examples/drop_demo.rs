//! Drop demonstration
//!
//! This example shows:
//! - Loading a configuration from TOML (or the defaults)
//! - A shared obstacle world holding the level floor
//! - Balls and crates falling, bouncing and colliding
//! - Reading collision events after each step
//! - Snapshotting the world and resuming from the snapshot
//!
//! Run with `RUST_LOG=debug` to see the engine's own logging, and pass a
//! TOML file path to override the configuration.

use fp2d_math::Fixed;
use fp2d_physics::prelude::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => PhysicsConfig::load(path)?,
        None => PhysicsConfig::default(),
    };

    println!("fp2d Drop Demo");
    println!("==============\n");

    // Level geometry lives in its own world and is never stepped
    let mut level = World::new(config);
    level.add_rect(
        Fixed::ZERO,
        Fixed::from_int(5),
        Fixed::from_int(20),
        Fixed::ONE,
        INFINITE_MASS,
        Fixed::from_milli(500),
        true,
    )?;

    let mut world = World::new(config);
    let mut handles = BodyHandles::new();
    let ball = handles.add(
        &mut world,
        BodyDesc::circle(Fixed::from_milli(250)).with_material(PhysicsMaterial::rubber()),
    )?;
    let crate_box = handles.add(
        &mut world,
        BodyDesc::rect(Fixed::HALF, Fixed::HALF)
            .with_position(Fixed::from_milli(300), -Fixed::from_int(2))
            .with_mass(Fixed::from_int(2))
            .with_material(PhysicsMaterial::wood()),
    )?;

    let dt = Fixed::from_milli(20);
    for tick in 0..150 {
        world.step_with_obstacles(dt, &level)?;
        for event in world.collision_events() {
            println!(
                "tick {:3}: {:?} contact {} <-> {} depth {}",
                tick, event.kind, event.first, event.second, event.penetration
            );
        }
    }

    for (name, handle) in [("ball", ball), ("crate", crate_box)] {
        if let Some(body) = handles.get(&world, handle) {
            println!(
                "{} at ({}, {}) moving ({}, {})",
                name, body.position.x, body.position.y, body.velocity.x, body.velocity.y
            );
        }
    }

    let bytes = encode_world(&world)?;
    let mut resumed = decode_world(&bytes)?;
    world.step_with_obstacles(dt, &level)?;
    resumed.step_with_obstacles(dt, &level)?;
    println!(
        "\nsnapshot: {} bytes, resumed run identical: {}",
        bytes.len(),
        resumed.bodies() == world.bodies()
    );

    Ok(())
}
