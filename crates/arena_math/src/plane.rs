//! Horizontal plane geometry (floor/ground)

use crate::{Vec3, shape::{push_quad, MeshShape, Triangle}};

/// A flat rectangle lying in the XZ plane at local y = 0, facing +Y
#[derive(Clone)]
pub struct GroundPlane {
    width: f32,
    depth: f32,
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl GroundPlane {
    /// Create a plane spanning `width` along X and `depth` along Z
    pub fn new(width: f32, depth: f32) -> Self {
        let hw = width * 0.5;
        let hd = depth * 0.5;

        let mut vertices = Vec::with_capacity(4);
        let mut normals = Vec::with_capacity(4);
        let mut triangles = Vec::with_capacity(2);

        // Counter-clockwise seen from above
        push_quad(
            &mut vertices,
            &mut normals,
            &mut triangles,
            [
                Vec3::new(-hw, 0.0, -hd),
                Vec3::new(-hw, 0.0, hd),
                Vec3::new(hw, 0.0, hd),
                Vec3::new(hw, 0.0, -hd),
            ],
            Vec3::Y,
        );

        Self {
            width,
            depth,
            vertices,
            normals,
            triangles,
        }
    }

    /// Square plane
    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }
}

impl MeshShape for GroundPlane {
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
