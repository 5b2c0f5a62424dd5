//! End-to-end scenarios for fp2d_physics

use fp2d_math::{Fixed, Vec2};
use fp2d_physics::prelude::*;

fn m(milli: i64) -> Fixed {
    Fixed::from_milli(milli)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn scenario_free_fall_single_tick() {
    init_logging();
    let mut world = World::default();
    let ball = world
        .add_circle(Fixed::ZERO, Fixed::ZERO, m(250), Fixed::ONE, m(500), false)
        .unwrap();

    world.step(m(20)).unwrap();

    let body = world.get(ball).unwrap();
    assert_eq!(body.velocity, Vec2::new(Fixed::ZERO, Fixed::from_micro(196_200)));
    assert_eq!(body.position, Vec2::new(Fixed::ZERO, Fixed::from_micro(3_924)));
    assert_eq!(body.acceleration, Vec2::ZERO);
}

#[test]
fn scenario_four_bodies_remove_one() {
    let mut world = World::default();
    for i in 0..4 {
        world
            .add_circle(Fixed::from_int(i * 10), Fixed::ZERO, m(250), Fixed::ONE, m(500), false)
            .unwrap();
    }
    let former_last = world.get(3).unwrap();

    assert_eq!(world.remove(1).unwrap(), Some(1));
    assert_eq!(world.count(), 3);
    assert_eq!(world.get(1).unwrap(), former_last);
    assert!(matches!(world.get(3), Err(PhysicsError::BodyNotFound { index: 3, count: 3 })));
}

#[test]
fn scenario_head_on_inelastic() {
    let mut world = World::new(PhysicsConfig::zero_gravity());
    let a = world
        .add_body(
            BodyDesc::circle(m(500))
                .with_velocity(Fixed::from_int(2), Fixed::ZERO)
                .with_material(PhysicsMaterial::inelastic()),
        )
        .unwrap();
    let b = world
        .add_body(
            BodyDesc::circle(m(500))
                .with_position(m(1_100), Fixed::ZERO)
                .with_velocity(-Fixed::from_int(2), Fixed::ZERO)
                .with_material(PhysicsMaterial::inelastic()),
        )
        .unwrap();

    // Overlap appears during the first tick
    world.step(m(50)).unwrap();
    assert_eq!(world.body_collisions().count(), 1);
    assert_eq!(world.get(a).unwrap().velocity, Vec2::ZERO);
    assert_eq!(world.get(b).unwrap().velocity, Vec2::ZERO);

    // Positional correction removed the overlap
    let gap = world.get(b).unwrap().position.x - world.get(a).unwrap().position.x;
    assert_eq!(gap, Fixed::ONE);
}

#[test]
fn scenario_elastic_box_reflects_off_static() {
    let mut world = World::new(PhysicsConfig::zero_gravity());
    let a = world
        .add_body(
            BodyDesc::rect(Fixed::ONE, Fixed::ONE)
                .with_velocity(Fixed::ONE, Fixed::ZERO)
                .with_material(PhysicsMaterial::elastic()),
        )
        .unwrap();
    let b = world
        .add_body(
            BodyDesc::rect(Fixed::ONE, Fixed::ONE)
                .with_position(m(1_100), Fixed::ZERO)
                .with_velocity(-Fixed::ONE, Fixed::ZERO)
                .fixed()
                .with_material(PhysicsMaterial::elastic()),
        )
        .unwrap();
    world.set_velocity(a, Fixed::ONE, Fixed::ZERO).unwrap();
    assert!(world.get(b).unwrap().is_static);

    world.step(m(100)).unwrap();

    // Full reflection against the static box
    assert_eq!(world.get(a).unwrap().velocity.x, -Fixed::ONE);
    assert_eq!(world.get(b).unwrap().velocity, Vec2::ZERO);
    assert_eq!(world.get(a).unwrap().position.x, m(100));
}

#[test]
fn scenario_dynamic_pair_velocity_exchange() {
    let mut world = World::new(PhysicsConfig::zero_gravity());
    for (x, vx) in [(0, 3_000), (900, 0)] {
        world
            .add_body(
                BodyDesc::circle(m(500))
                    .with_position(m(x), Fixed::ZERO)
                    .with_velocity(m(vx), Fixed::ZERO)
                    .with_material(PhysicsMaterial::elastic()),
            )
            .unwrap();
    }

    world.step(m(10)).unwrap();

    assert_eq!(world.get(0).unwrap().velocity.x, Fixed::ZERO);
    assert_eq!(world.get(1).unwrap().velocity.x, Fixed::from_int(3));
}

#[test]
fn scenario_heavy_pair_velocity_exchange() {
    let mut world = World::new(PhysicsConfig::zero_gravity());
    for (x, vx) in [(0, 1_000), (900, -1_000)] {
        world
            .add_body(
                BodyDesc::circle(m(500))
                    .with_position(m(x), Fixed::ZERO)
                    .with_velocity(m(vx), Fixed::ZERO)
                    .with_mass(Fixed::from_int(3))
                    .with_material(PhysicsMaterial::elastic()),
            )
            .unwrap();
    }

    world.step(m(10)).unwrap();

    assert_eq!(world.get(0).unwrap().velocity.x, -Fixed::ONE);
    assert_eq!(world.get(1).unwrap().velocity.x, Fixed::ONE);
}

#[test]
fn scenario_ball_settles_on_level_floor() {
    init_logging();
    let mut level = World::default();
    level
        .add_rect(Fixed::ZERO, Fixed::from_int(2), Fixed::from_int(20), Fixed::ONE, INFINITE_MASS, Fixed::ZERO, true)
        .unwrap();

    let mut world = World::default();
    let ball = world
        .add_circle(Fixed::ZERO, Fixed::ZERO, m(250), Fixed::ONE, Fixed::ZERO, false)
        .unwrap();

    let mut hit_floor = false;
    for _ in 0..200 {
        world.step_with_obstacles(m(20), &level).unwrap();
        hit_floor |= world.obstacle_collisions().count() > 0;
    }

    assert!(hit_floor);
    let body = world.get(ball).unwrap();
    // Resting on the floor's top face at y = 1.5
    assert!(body.position.y <= m(1_250));
    assert!(body.position.y > m(1_200));
    assert!(body.velocity.y.abs() < m(200));
    assert_eq!(level.count(), 1);
}

#[test]
fn scenario_snapshot_resumes_bit_identical() {
    let mut world = World::new(PhysicsConfig::arcade());
    world
        .add_rect(Fixed::ZERO, Fixed::from_int(3), Fixed::from_int(10), Fixed::ONE, Fixed::ONE, m(300), true)
        .unwrap();
    for i in 0..5 {
        world
            .add_circle(m(i * 400 - 800), -Fixed::from_int(i), m(200), Fixed::ONE, m(700), false)
            .unwrap();
    }
    for _ in 0..20 {
        world.step(m(20)).unwrap();
    }

    let bytes = encode_world(&world).unwrap();
    let mut resumed = decode_world(&bytes).unwrap();
    for _ in 0..40 {
        world.step(m(20)).unwrap();
        resumed.step(m(20)).unwrap();
        assert_eq!(resumed.to_records(), world.to_records());
    }
}

#[test]
fn scenario_config_from_toml() {
    let config = PhysicsConfig::from_toml_str(
        r#"
        gravity = 0
        max_bodies = 1
        "#,
    )
    .unwrap();
    let mut world = World::try_new(config).unwrap();
    world.add_circle(Fixed::ZERO, Fixed::ZERO, Fixed::ONE, Fixed::ONE, Fixed::ZERO, false).unwrap();
    assert_eq!(
        world.add_circle(Fixed::ZERO, Fixed::ZERO, Fixed::ONE, Fixed::ONE, Fixed::ZERO, false),
        Err(PhysicsError::CapacityExceeded { max: 1 })
    );

    world.step(Fixed::ONE).unwrap();
    assert_eq!(world.get(0).unwrap().position, Vec2::ZERO);
}

#[test]
fn scenario_handles_survive_removals() {
    let mut world = World::new(PhysicsConfig::zero_gravity());
    let mut handles = BodyHandles::new();
    let ids: Vec<BodyHandle> = (0..5)
        .map(|i| {
            handles
                .add(&mut world, BodyDesc::circle(m(100)).with_position(Fixed::from_int(i), Fixed::ZERO))
                .unwrap()
        })
        .collect();

    handles.remove(&mut world, ids[0]).unwrap();
    handles.remove(&mut world, ids[2]).unwrap();

    for (i, id) in ids.iter().enumerate() {
        match i {
            0 | 2 => assert!(!handles.contains(*id)),
            _ => {
                let body = handles.get(&world, *id).unwrap();
                assert_eq!(body.position.x, Fixed::from_int(i as i64));
            }
        }
    }
}

#[test]
fn scenario_events_reach_custom_handler() {
    struct Counter(usize);
    impl PhysicsEventHandler for Counter {
        fn on_collision(&mut self, _event: &CollisionEvent) {
            self.0 += 1;
        }
    }

    let mut world = World::new(PhysicsConfig::zero_gravity());
    world.add_circle(Fixed::ZERO, Fixed::ZERO, m(500), Fixed::ONE, Fixed::ZERO, false).unwrap();
    world.add_circle(m(600), Fixed::ZERO, m(500), Fixed::ONE, Fixed::ZERO, false).unwrap();
    world.step(m(10)).unwrap();

    let mut counter = Counter(0);
    world.dispatch_events(&mut counter);
    assert_eq!(counter.0, 1);
}
