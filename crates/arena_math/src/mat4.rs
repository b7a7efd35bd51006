//! 4x4 Matrix utilities for first-person rendering
//!
//! Matrices are column-major (`m[column][row]`) to match WGSL's `mat4x4<f32>`.
//! The world is right-handed with +Y up; an unrotated camera looks down -Z.

use crate::Vec3;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Rotation about the +Y axis (yaw). Positive angles turn -Z toward -X.
pub fn rotation_y(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    [
        [cs, 0.0, -sn, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [sn, 0.0, cs, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Rotation about the +X axis (pitch). Positive angles tilt -Z toward +Y.
pub fn rotation_x(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cs, sn, 0.0],
        [0.0, -sn, cs, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Translation matrix
pub fn translation(offset: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = offset.x;
    m[3][1] = offset.y;
    m[3][2] = offset.z;
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Right-handed perspective projection with wgpu's `[0, 1]` depth range
///
/// # Arguments
/// * `fov_y` - Vertical field of view in radians
/// * `aspect` - Width / height
/// * `near`, `far` - Clip plane distances (both positive)
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

/// View matrix for a first-person eye with yaw then pitch (no roll)
///
/// This is the inverse of `translation(eye) * rotation_y(yaw) * rotation_x(pitch)`.
pub fn first_person_view(eye: Vec3, yaw: f32, pitch: f32) -> Mat4 {
    mul(
        rotation_x(-pitch),
        mul(rotation_y(-yaw), translation(-eye)),
    )
}
