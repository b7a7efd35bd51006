//! SceneBuilder - Declarative scene construction
//!
//! Every visible wall is paired with a collider, so what the player sees is
//! what blocks them.

use arena_core::{
    Entity, GroundPlane, Material, PhysicsConfig, ShapeRef, Vec3, WallSpec, World,
    ARENA_WALLS, FLOOR_TAG, WALL_TAG,
};

use crate::config::AppConfig;

/// Builder for constructing the arena world with physics
///
/// # Example
/// ```ignore
/// let world = SceneBuilder::new()
///     .with_physics(PhysicsConfig::default())
///     .add_floor(200.0, Material::from_hex(0x3366ff))
///     .add_arena_walls(Material::from_hex(0x222266))
///     .add_player(PLAYER_SPAWN)
///     .build();
/// ```
pub struct SceneBuilder {
    world: World,
    player_start: Option<Vec3>,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self {
            world: World::new(),
            player_start: None,
        }
    }

    /// Create a scene builder with a pre-allocated world capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            world: World::with_capacity(capacity),
            player_start: None,
        }
    }

    /// Enable physics with the given constants
    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.world = self.world.with_physics(config);
        self
    }

    /// Add a square floor centered on the origin at y = 0
    ///
    /// The floor is visual only; the eye-height clamp keeps the player above it.
    pub fn add_floor(mut self, size: f32, material: Material) -> Self {
        self.world.add_entity(
            Entity::with_material(ShapeRef::shared(GroundPlane::square(size)), material)
                .with_name("floor")
                .with_tag(FLOOR_TAG),
        );
        self
    }

    /// Add one wall: a visible box plus its collider
    pub fn add_wall(mut self, spec: &WallSpec, material: Material) -> Self {
        if let Some(physics) = self.world.physics_mut() {
            physics.add_wall(spec.collider());
        }
        self.world.add_entity(spec.entity(material));
        self
    }

    /// Add the four walls surrounding the spawn point
    pub fn add_arena_walls(self, material: Material) -> Self {
        ARENA_WALLS
            .iter()
            .fold(self, |builder, spec| builder.add_wall(spec, material))
    }

    /// Place the player's eye at the given position
    pub fn add_player(mut self, position: Vec3) -> Self {
        self.player_start = Some(position);

        if let Some(physics) = self.world.physics_mut() {
            physics.set_player(position);
        }

        self
    }

    /// Build the scene and return the configured World
    pub fn build(self) -> World {
        log::info!(
            "Scene built: {} entities, {} walls, {} colliders",
            self.world.entity_count(),
            self.world.iter_tagged(WALL_TAG).count(),
            self.world.physics().map_or(0, |p| p.walls().len())
        );
        self.world
    }

    /// Get the player's starting position (if a player was added)
    pub fn player_start(&self) -> Option<Vec3> {
        self.player_start
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The full arena described by `config`: floor, four walls, and the player
pub fn arena_scene(config: &AppConfig) -> SceneBuilder {
    SceneBuilder::with_capacity(1 + ARENA_WALLS.len())
        .with_physics(config.physics.to_physics_config())
        .add_floor(config.arena.floor_size, Material::from_hex(config.arena.floor_color))
        .add_arena_walls(Material::from_hex(config.arena.wall_color))
        .add_player(config.camera.start_position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::PLAYER_SPAWN;

    fn named<'a>(world: &'a World, name: &str) -> &'a Entity {
        world
            .iter()
            .find(|e| e.name.as_deref() == Some(name))
            .unwrap_or_else(|| panic!("no entity named {}", name))
    }

    #[test]
    fn test_empty_scene() {
        let world = SceneBuilder::new().build();
        assert_eq!(world.entity_count(), 0);
        assert!(world.physics().is_none());
    }

    #[test]
    fn test_scene_with_physics() {
        let world = SceneBuilder::new()
            .with_physics(PhysicsConfig::new(-0.02))
            .build();

        let physics = world.physics().unwrap();
        assert_eq!(physics.config.gravity, -0.02);
    }

    #[test]
    fn test_scene_with_floor() {
        let world = SceneBuilder::new()
            .add_floor(200.0, Material::from_hex(0x3366ff))
            .build();

        assert_eq!(world.entity_count(), 1);
        let floor = named(&world, "floor");
        assert!(floor.has_tag(FLOOR_TAG));
        assert_eq!(floor.material, Material::from_hex(0x3366ff));
    }

    #[test]
    fn test_walls_without_physics_are_visual_only() {
        let world = SceneBuilder::new()
            .add_arena_walls(Material::GRAY)
            .build();

        assert_eq!(world.iter_tagged(WALL_TAG).count(), 4);
        assert!(world.physics().is_none());
    }

    #[test]
    fn test_scene_with_player() {
        let world = SceneBuilder::new()
            .with_physics(PhysicsConfig::default())
            .add_player(PLAYER_SPAWN)
            .build();

        let player = world.physics().unwrap().player().unwrap();
        assert_eq!(player.position, PLAYER_SPAWN);
        assert!(!player.can_jump);
    }

    #[test]
    fn test_arena_scene_from_defaults() {
        let builder = arena_scene(&AppConfig::default());
        assert_eq!(builder.player_start(), Some(PLAYER_SPAWN));

        let world = builder.build();
        assert_eq!(world.entity_count(), 5);
        assert_eq!(world.iter_tagged(WALL_TAG).count(), 4);

        let physics = world.physics().unwrap();
        assert_eq!(physics.walls().len(), 4);
        assert_eq!(physics.config.gravity, -0.01);
        assert_eq!(physics.player_position(), Some(PLAYER_SPAWN));
    }

    #[test]
    fn test_arena_scene_uses_configured_colors() {
        let mut config = AppConfig::default();
        config.arena.wall_color = 0xff0000;

        let world = arena_scene(&config).build();
        let wall = named(&world, "wall_west");
        assert_eq!(wall.material, Material::from_rgb(1.0, 0.0, 0.0));
    }
}
