//! Rendering for ArenaWalk
//!
//! This crate provides the wgpu-based pipeline that draws the arena from the
//! player's eyes.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera3D`] - First-person camera with yaw/pitch look
//! - [`pipeline::MeshPipeline`] - Indexed triangle rendering with hemisphere lighting
//! - [`renderable::RenderableGeometry`] - Converts World/Entity to GPU buffers

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use arena_core::{World, Entity, Material, ShapeRef, EntityKey};
pub use arena_core::{MeshShape, Triangle, Cuboid, GroundPlane, Vec3};

pub use renderable::{RenderableGeometry, srgb_to_linear, hex_to_linear};
