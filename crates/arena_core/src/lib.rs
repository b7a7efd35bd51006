//! Core types for ArenaWalk
//!
//! This crate provides the foundational types for building the arena:
//!
//! - [`Material`] - Visual properties of an entity
//! - [`Entity`] - An object in the world with position, shape, and material
//! - [`ShapeRef`] - Reference to a shape (shared or owned)
//! - [`World`] - Container for all entities plus the physics world
//! - [`EntityKey`] - Generational key to an entity in the world
//! - [`WallSpec`] / [`ARENA_WALLS`] - The fixed four-wall layout

mod entity;
mod world;
pub mod arena;

pub use entity::{Material, Entity, ShapeRef};
pub use world::{World, EntityKey};
pub use arena::{WallSpec, ARENA_WALLS, PLAYER_SPAWN, WALL_HEIGHT, WALL_TAG, FLOOR_TAG};

// Re-export commonly used types from arena_math for convenience
pub use arena_math::{Vec3, MeshShape, Triangle, Cuboid, GroundPlane};

// Re-export physics types for convenient access through arena_core
pub use arena_physics::{PhysicsConfig, PhysicsWorld, TickInput, TickOutcome, WallCollider};
