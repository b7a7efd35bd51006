//! The fixed arena layout
//!
//! Four walls standing on the floor around the origin. The layout is built once
//! at startup and never changes.

use arena_math::{Cuboid, Vec3};
use arena_physics::WallCollider;
use crate::{Entity, Material, ShapeRef};

/// Height of every wall
pub const WALL_HEIGHT: f32 = 3.0;

/// Where the player starts: eye height, five units south of the center
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.7, 5.0);

/// Tag carried by wall entities
pub const WALL_TAG: &str = "wall";

/// Tag carried by the floor entity
pub const FLOOR_TAG: &str = "floor";

/// Footprint of a wall standing on the floor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSpec {
    pub name: &'static str,
    /// Center X
    pub x: f32,
    /// Center Z
    pub z: f32,
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub depth: f32,
}

impl WallSpec {
    /// World-space center; walls rest on y = 0
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, WALL_HEIGHT / 2.0, self.z)
    }

    /// Full box size
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, WALL_HEIGHT, self.depth)
    }

    pub fn collider(&self) -> WallCollider {
        WallCollider::new(self.center(), self.size())
    }

    /// Visible wall entity, tagged [`WALL_TAG`]
    pub fn entity(&self, material: Material) -> Entity {
        Entity::with_material(
            ShapeRef::owned(Cuboid::new(self.width, WALL_HEIGHT, self.depth)),
            material,
        )
        .with_name(self.name)
        .with_tag(WALL_TAG)
        .with_position(self.center())
    }
}

/// The four arena walls
pub const ARENA_WALLS: [WallSpec; 4] = [
    WallSpec { name: "wall_north", x: 0.0, z: -10.0, width: 20.0, depth: 1.0 },
    WallSpec { name: "wall_east", x: 10.0, z: 0.0, width: 1.0, depth: 20.0 },
    WallSpec { name: "wall_west", x: -10.0, z: 0.0, width: 1.0, depth: 20.0 },
    WallSpec { name: "wall_south", x: 0.0, z: 10.0, width: 20.0, depth: 1.0 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_centers_at_half_height() {
        for wall in ARENA_WALLS {
            assert_eq!(wall.center().y, 1.5);
            assert_eq!(wall.size().y, 3.0);
        }
    }

    #[test]
    fn test_walls_enclose_spawn() {
        let xs: Vec<f32> = ARENA_WALLS.iter().map(|w| w.x).collect();
        let zs: Vec<f32> = ARENA_WALLS.iter().map(|w| w.z).collect();
        assert!(xs.iter().any(|&x| x > PLAYER_SPAWN.x));
        assert!(xs.iter().any(|&x| x < PLAYER_SPAWN.x));
        assert!(zs.iter().any(|&z| z > PLAYER_SPAWN.z));
        assert!(zs.iter().any(|&z| z < PLAYER_SPAWN.z));
    }

    #[test]
    fn test_spawn_is_clear_of_walls() {
        let colliders: Vec<WallCollider> = ARENA_WALLS.iter().map(WallSpec::collider).collect();
        assert_eq!(arena_physics::first_blocking_wall(&colliders, PLAYER_SPAWN, 2.0), None);
    }

    #[test]
    fn test_wall_entity() {
        let spec = ARENA_WALLS[1];
        let entity = spec.entity(Material::from_hex(0x222266));
        assert_eq!(entity.name.as_deref(), Some("wall_east"));
        assert!(entity.has_tag(WALL_TAG));
        assert_eq!(entity.position, Vec3::new(10.0, 1.5, 0.0));
        assert_eq!(entity.shape().vertex_count(), 24);
    }
}
