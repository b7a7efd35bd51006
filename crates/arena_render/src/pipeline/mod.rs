//! Rendering pipeline components

pub mod types;
pub mod mesh_pipeline;

pub use types::{Vertex3D, RenderUniforms};
pub use mesh_pipeline::{MeshPipeline, DEPTH_FORMAT};
