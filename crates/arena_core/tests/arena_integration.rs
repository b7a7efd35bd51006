//! Integration tests for the arena movement pipeline
//!
//! These tests build the real four-wall layout and drive the world tick by tick:
//! 1. The player settles at eye height
//! 2. Walking toward a wall center stops at the clearance radius
//! 3. The ends of long walls stay passable (center-distance check)
//! 4. Jumping and landing inside the arena

use arena_core::{
    Entity, GroundPlane, Material, PhysicsConfig, ShapeRef, TickInput, Vec3, World,
    ARENA_WALLS, FLOOR_TAG, PLAYER_SPAWN, WALL_TAG,
};

fn build_arena() -> World {
    let mut world = World::with_capacity(5).with_physics(PhysicsConfig::default());

    world.add_entity(
        Entity::with_material(ShapeRef::shared(GroundPlane::square(200.0)), Material::from_hex(0x3366ff))
            .with_name("floor")
            .with_tag(FLOOR_TAG),
    );

    for spec in ARENA_WALLS {
        world.add_entity(spec.entity(Material::from_hex(0x222266)));
        world.physics_mut().unwrap().add_wall(spec.collider());
    }

    world.physics_mut().unwrap().set_player(PLAYER_SPAWN);
    world
}

fn walk(world: &mut World, step: Vec3, ticks: usize) -> usize {
    let mut rejections = 0;
    for _ in 0..ticks {
        let outcome = world.tick(TickInput {
            displacement: step,
            pointer_locked: true,
        });
        if outcome.reverted() {
            rejections += 1;
        }
    }
    rejections
}

fn player_position(world: &World) -> Vec3 {
    world.physics().unwrap().player_position().unwrap()
}

// ==================== Layout Tests ====================

#[test]
fn test_arena_has_floor_and_four_walls() {
    let world = build_arena();

    assert_eq!(world.entity_count(), 5);
    assert_eq!(world.iter_tagged(WALL_TAG).count(), 4);
    assert_eq!(world.iter_tagged(FLOOR_TAG).count(), 1);
    assert_eq!(world.physics().unwrap().walls().len(), 4);

    let north = world
        .iter()
        .find(|e| e.name.as_deref() == Some("wall_north"))
        .expect("north wall should exist");
    assert_eq!(north.position, Vec3::new(0.0, 1.5, -10.0));
}

// ==================== Movement Tests ====================

#[test]
fn test_player_settles_at_eye_height() {
    let mut world = build_arena();
    walk(&mut world, Vec3::ZERO, 60);

    let pos = player_position(&world);
    assert_eq!(pos, PLAYER_SPAWN);
    assert!(world.physics().unwrap().player().unwrap().can_jump);
}

#[test]
fn test_walking_north_stops_at_clearance() {
    let mut world = build_arena();

    // From z = 5 toward the north wall center at z = -10
    let rejections = walk(&mut world, Vec3::new(0.0, 0.0, -0.1), 300);
    assert!(rejections > 0, "the north wall never blocked the player");

    let pos = player_position(&world);
    let dist = pos.distance(Vec3::new(0.0, 1.5, -10.0));
    assert!(dist >= 2.0 && dist < 2.1, "stopped at distance {}", dist);
    assert!(pos.y >= 1.7);
}

#[test]
fn test_wall_end_is_passable() {
    let mut world = build_arena();

    // Walk along x = 6: the north wall's center is never within reach,
    // so the player passes straight through the wall's far end
    walk(&mut world, Vec3::new(0.1, 0.0, 0.0), 60);
    let rejections = walk(&mut world, Vec3::new(0.0, 0.0, -0.1), 200);

    assert_eq!(rejections, 0);
    let pos = player_position(&world);
    assert!(pos.z < -10.0, "expected to pass beyond the wall, at {:?}", pos);
}

#[test]
fn test_unlocked_ticks_do_not_move_player() {
    let mut world = build_arena();
    for _ in 0..30 {
        world.tick(TickInput {
            displacement: Vec3::new(0.1, 0.0, 0.1),
            pointer_locked: false,
        });
    }
    assert_eq!(player_position(&world), PLAYER_SPAWN);
}

#[test]
fn test_jump_inside_arena() {
    let mut world = build_arena();
    walk(&mut world, Vec3::ZERO, 1);

    assert!(world.physics_mut().unwrap().player_jump());
    walk(&mut world, Vec3::ZERO, 10);
    assert!(player_position(&world).y > 2.5);

    walk(&mut world, Vec3::ZERO, 60);
    assert_eq!(player_position(&world).y, 1.7);
    assert!(world.physics_mut().unwrap().player_jump());
}
