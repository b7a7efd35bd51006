//! World container for entities
//!
//! The World owns every visible entity plus the physics simulation that moves
//! the player among them.

use crate::Entity;
use arena_physics::{PhysicsConfig, PhysicsWorld, TickInput, TickOutcome};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational key to an entity in the world
    pub struct EntityKey;
}

/// The arena world containing all entities
pub struct World {
    /// All entities in the world
    entities: SlotMap<EntityKey, Entity>,
    /// Optional physics simulation (None = no physics)
    physics_world: Option<PhysicsWorld>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            physics_world: None,
        }
    }

    /// Create a world with pre-allocated capacity for entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: SlotMap::with_capacity_and_key(capacity),
            physics_world: None,
        }
    }

    /// Enable physics for this world
    pub fn with_physics(mut self, config: PhysicsConfig) -> Self {
        self.physics_world = Some(PhysicsWorld::with_config(config));
        self
    }

    /// Get the physics world (if enabled)
    pub fn physics(&self) -> Option<&PhysicsWorld> {
        self.physics_world.as_ref()
    }

    /// Get mutable physics world (if enabled)
    pub fn physics_mut(&mut self) -> Option<&mut PhysicsWorld> {
        self.physics_world.as_mut()
    }

    /// Add an entity to the world, returning its key
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        log::debug!(
            "Adding entity {} ({} triangles)",
            entity.name.as_deref().unwrap_or("<unnamed>"),
            entity.shape().triangle_count()
        );
        self.entities.insert(entity)
    }

    /// Iterate over entities carrying a tag
    pub fn iter_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities.values().filter(move |e| e.has_tag(tag))
    }

    /// Get the number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Run one physics tick (no-op without physics)
    pub fn tick(&mut self, input: TickInput) -> TickOutcome {
        match self.physics_world.as_mut() {
            Some(physics) => physics.step(input),
            None => TickOutcome::default(),
        }
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }
}
