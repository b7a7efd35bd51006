//! First-person camera
//!
//! Orientation is yaw about +Y followed by pitch about the camera's X axis,
//! never roll. With yaw = pitch = 0 the camera looks down -Z.

use std::f32::consts::FRAC_PI_2;
use arena_input::CameraControl;
use arena_math::{mat4, Mat4, Vec3};

/// First-person camera with yaw/pitch look
pub struct Camera3D {
    /// Eye position
    pub position: Vec3,
    /// Largest allowed |pitch| in radians
    pub pitch_limit: f32,
    yaw: f32,
    pitch: f32,
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera3D {
    /// Create a camera at the default eye position
    pub fn new() -> Self {
        Self::at(Vec3::new(0.0, 1.7, 5.0))
    }

    /// Create a camera at the given position, looking down -Z
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            pitch_limit: FRAC_PI_2,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Builder: set the pitch limit in radians
    pub fn with_pitch_limit(mut self, limit: f32) -> Self {
        self.pitch_limit = limit;
        self
    }

    /// Mouse look
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-self.pitch_limit, self.pitch_limit);
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Level the view and face -Z again (position is left alone)
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    /// Full view direction including pitch
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(-sy * cp, sp, -cy * cp)
    }

    /// Heading on the ground plane, independent of pitch
    pub fn forward_xz(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(-sy, 0.0, -cy)
    }

    /// Right direction (always horizontal)
    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy, 0.0, -sy)
    }

    /// Horizontal displacement for moving `forward` units ahead and `right` units to the side
    pub fn ground_displacement(&self, forward: f32, right: f32) -> Vec3 {
        self.forward_xz() * forward + self.right() * right
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::first_person_view(self.position, self.yaw, self.pitch)
    }
}

impl CameraControl for Camera3D {
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        Camera3D::rotate(self, delta_yaw, delta_pitch);
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
