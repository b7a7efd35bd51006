//! 3D Mathematics Library
//!
//! This crate provides the vector, matrix, and mesh shape types for ArenaWalk.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components (Y up)
//! - [`Mat4`] - 4x4 column-major matrix for view/projection
//!
//! ## Shape Types
//!
//! - [`MeshShape`] - Trait for triangle meshes with per-vertex normals
//! - [`Cuboid`] - An axis-aligned box (walls)
//! - [`GroundPlane`] - A horizontal rectangle (floor)

mod vec3;
pub mod mat4;
pub mod shape;
pub mod cuboid;
pub mod plane;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use shape::{MeshShape, Triangle};
pub use cuboid::Cuboid;
pub use plane::GroundPlane;
