//! Axis-aligned box geometry (walls)
//!
//! Each of the 6 faces gets its own 4 vertices so normals stay per-face.

use crate::{Vec3, shape::{push_quad, MeshShape, Triangle}};

/// An axis-aligned box centered at the origin - pure geometry without colors
#[derive(Clone)]
pub struct Cuboid {
    /// Full extent along X, Y, Z
    size: Vec3,
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl Cuboid {
    /// Create a box with the given width (X), height (Y) and depth (Z)
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        let size = Vec3::new(width, height, depth);
        let half = [width * 0.5, height * 0.5, depth * 0.5];
        let axes = [Vec3::X, Vec3::Y, Vec3::Z];

        let mut vertices = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut triangles = Vec::with_capacity(12);

        for a in 0..3 {
            // (a, u, v) is a cyclic permutation, so u x v points along +a
            let u = (a + 1) % 3;
            let v = (a + 2) % 3;
            let du = axes[u] * half[u];
            let dv = axes[v] * half[v];

            for sign in [1.0f32, -1.0] {
                let normal = axes[a] * sign;
                let c = normal * half[a];
                let corners = if sign > 0.0 {
                    [c - du - dv, c + du - dv, c + du + dv, c - du + dv]
                } else {
                    [c - du - dv, c - du + dv, c + du + dv, c + du - dv]
                };
                push_quad(&mut vertices, &mut normals, &mut triangles, corners, normal);
            }
        }

        Self {
            size,
            vertices,
            normals,
            triangles,
        }
    }

    /// Full extent along each axis
    pub fn size(&self) -> Vec3 {
        self.size
    }
}

impl MeshShape for Cuboid {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}
