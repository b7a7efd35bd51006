//! GPU-compatible data types for the mesh pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use arena_math::{mat4, Mat4};
use bytemuck::{Pod, Zeroable};

/// A world-space vertex ready for drawing
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    /// Position in world space
    pub position: [f32; 3],
    /// Surface normal for lighting
    pub normal: [f32; 3],
    /// Linear RGBA albedo
    pub color: [f32; 4],
}

impl Vertex3D {
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, normal, color }
    }
}

impl Default for Vertex3D {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
            color: [1.0; 4],
        }
    }
}

/// Render uniforms for the mesh pass
/// Layout: 112 bytes total (must match mesh.wgsl Uniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RenderUniforms {
    /// Projection * view (64 bytes)
    pub view_proj: [[f32; 4]; 4],
    /// Hemisphere sky color, linear RGB + unused alpha (16 bytes)
    pub sky_color: [f32; 4],
    /// Hemisphere ground color (16 bytes)
    pub ground_color: [f32; 4],
    /// Light intensity + padding (16 bytes)
    pub light_intensity: f32,
    pub _padding: [f32; 3],
}

impl Default for RenderUniforms {
    fn default() -> Self {
        Self {
            view_proj: mat4::IDENTITY,
            sky_color: [1.0, 1.0, 1.0, 1.0],
            ground_color: [0.0, 0.0, 0.0, 1.0],
            light_intensity: 1.0,
            _padding: [0.0; 3],
        }
    }
}

impl RenderUniforms {
    /// Combine a projection and view matrix with the light settings
    pub fn new(
        projection: Mat4,
        view: Mat4,
        sky_color: [f32; 4],
        ground_color: [f32; 4],
        light_intensity: f32,
    ) -> Self {
        Self {
            view_proj: mat4::mul(projection, view),
            sky_color,
            ground_color,
            light_intensity,
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    /// Same hemisphere term as `fs_main` in mesh.wgsl
    fn irradiance(u: &RenderUniforms, normal: [f32; 3]) -> [f32; 3] {
        let weight = 0.5 * normal[1] + 0.5;
        let mut out = [0.0; 3];
        for (i, c) in out.iter_mut().enumerate() {
            let mixed = u.ground_color[i] + (u.sky_color[i] - u.ground_color[i]) * weight;
            *c = mixed * u.light_intensity;
        }
        out
    }

    #[test]
    fn test_vertex3d_size() {
        // 3 floats position + 3 floats normal + 4 floats color = 40 bytes
        assert_eq!(size_of::<Vertex3D>(), 40);
    }

    #[test]
    fn test_render_uniforms_size() {
        // 16 floats view_proj + 4 sky + 4 ground + 1 intensity + 3 padding = 112 bytes
        assert_eq!(size_of::<RenderUniforms>(), 112);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex3D>(), 4);
        assert_eq!(std::mem::align_of::<RenderUniforms>(), 4);
    }

    #[test]
    fn test_irradiance_hemisphere() {
        let uniforms = RenderUniforms {
            sky_color: [1.0, 1.0, 1.0, 1.0],
            ground_color: [0.2, 0.2, 0.2, 1.0],
            ..Default::default()
        };

        // Floor faces straight up: full sky
        assert_eq!(irradiance(&uniforms, [0.0, 1.0, 0.0]), [1.0, 1.0, 1.0]);
        // Wall faces are half sky, half ground
        let side = irradiance(&uniforms, [1.0, 0.0, 0.0]);
        assert!((side[0] - 0.6).abs() < 0.0001);
        // Undersides get the ground color
        let below = irradiance(&uniforms, [0.0, -1.0, 0.0]);
        assert!((below[1] - 0.2).abs() < 0.0001);
    }

    #[test]
    fn test_new_multiplies_projection_and_view() {
        let view = mat4::translation(arena_math::Vec3::new(0.0, 0.0, -5.0));
        let uniforms = RenderUniforms::new(mat4::IDENTITY, view, [1.0; 4], [0.0; 4], 0.5);
        assert_eq!(uniforms.view_proj, view);
        assert_eq!(uniforms.light_intensity, 0.5);
    }
}
