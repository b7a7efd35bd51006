//! Shape traits and primitives for triangle meshes
//!
//! Shapes are pure geometric data in local space - no colors, materials, or
//! rendering info. Each vertex carries its own normal so faces stay flat-shaded.

use crate::Vec3;

/// A triangle defined by vertex indices, counter-clockwise when seen from the front
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// Indices into the parent shape's vertex array
    pub indices: [u32; 3],
}

impl Triangle {
    #[inline]
    pub fn new(indices: [u32; 3]) -> Self {
        Self { indices }
    }
}

/// Trait for meshes that can be drawn and placed in the arena
pub trait MeshShape: Send + Sync {
    /// Vertex positions in local space
    fn vertices(&self) -> &[Vec3];

    /// Per-vertex normals, parallel to `vertices()`
    fn normals(&self) -> &[Vec3];

    /// Triangle list
    fn triangles(&self) -> &[Triangle];

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    fn triangle_count(&self) -> usize {
        self.triangles().len()
    }
}

/// Push a quad as two triangles
///
/// `corners` must already be ordered counter-clockwise around `normal`.
pub(crate) fn push_quad(
    vertices: &mut Vec<Vec3>,
    normals: &mut Vec<Vec3>,
    triangles: &mut Vec<Triangle>,
    corners: [Vec3; 4],
    normal: Vec3,
) {
    let base = vertices.len() as u32;
    vertices.extend_from_slice(&corners);
    normals.extend_from_slice(&[normal; 4]);
    triangles.push(Triangle::new([base, base + 1, base + 2]));
    triangles.push(Triangle::new([base, base + 2, base + 3]));
}

/// Geometric normal of a triangle from its winding
#[cfg(test)]
pub(crate) fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalized()
}
