//! Physics simulation for ArenaWalk
//!
//! This crate provides the first-person movement model:
//! - Per-tick gravity with a floor clamp at eye height
//! - Jumping from the floor
//! - Wall collision by distance to each wall's center, undoing the rejected tick

pub mod collision;
pub mod player;
pub mod world;

// Re-export commonly used types
pub use collision::{first_blocking_wall, WallCollider};
pub use player::{PlayerPhysics, DEFAULT_EYE_HEIGHT, DEFAULT_JUMP_VELOCITY};
pub use world::{PhysicsConfig, PhysicsWorld, TickInput, TickOutcome};
