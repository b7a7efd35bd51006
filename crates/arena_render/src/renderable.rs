//! Renderable geometry - bridges World/Entity to GPU buffers
//!
//! Entity shapes are translated into world space and flattened into one
//! vertex array plus one `u32` index array.

use arena_core::{Entity, Material, World};
use crate::pipeline::Vertex3D;

/// Convert one sRGB-encoded channel to linear
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a `0xRRGGBB` color to linear RGBA
pub fn hex_to_linear(rgb: u32) -> [f32; 4] {
    linear_color(&Material::from_hex(rgb))
}

/// Material base color in linear space (alpha untouched)
fn linear_color(material: &Material) -> [f32; 4] {
    let [r, g, b, a] = material.base_color;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
}

/// GPU-ready geometry collected from entities
#[derive(Clone, Debug, Default)]
pub struct RenderableGeometry {
    /// World-space vertices
    pub vertices: Vec<Vertex3D>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl RenderableGeometry {
    /// Create an empty renderable geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create renderable geometry with pre-allocated capacity
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Collect geometry from all entities in a world
    pub fn from_world(world: &World) -> Self {
        let (vertices, triangles) = world.iter().fold((0, 0), |(v, t), e| {
            (v + e.shape().vertex_count(), t + e.shape().triangle_count())
        });

        let mut result = Self::with_capacity(vertices, triangles);
        for entity in world.iter() {
            result.add_entity(entity);
        }
        result
    }

    /// Add an entity's geometry to this collection
    pub fn add_entity(&mut self, entity: &Entity) {
        let shape = entity.shape();
        let color = linear_color(&entity.material);
        let vertex_offset = self.vertices.len() as u32;

        for (position, normal) in entity.world_vertices().zip(shape.normals()) {
            self.vertices.push(Vertex3D::new(
                position.to_array(),
                normal.to_array(),
                color,
            ));
        }

        for tri in shape.triangles() {
            self.indices.extend(tri.indices.iter().map(|i| i + vertex_offset));
        }
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
