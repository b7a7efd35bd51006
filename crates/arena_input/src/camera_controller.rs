//! First-person camera controller
//!
//! Controls:
//! - W/S: Forward/backward along the camera heading
//! - A/D: Strafe left/right
//! - Space: Jump (one request per key press)
//! - Mouse: Look around while the pointer is locked

use arena_math::Vec3;
use bitflags::bitflags;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

bitflags! {
    /// Movement keys currently held down
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MoveKeys: u8 {
        const FORWARD = 1 << 0;
        const BACKWARD = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl MoveKeys {
    /// Map a physical key to its movement flag
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(Self::FORWARD),
            KeyCode::KeyS => Some(Self::BACKWARD),
            KeyCode::KeyA => Some(Self::LEFT),
            KeyCode::KeyD => Some(Self::RIGHT),
            _ => None,
        }
    }
}

/// Camera controller for handling input
pub struct CameraController {
    keys: MoveKeys,

    // One-shot jump request, raised on Space key-down
    jump_pressed: bool,

    // Mouse deltas accumulated since the last update
    pending_yaw: f32,
    pending_pitch: f32,

    // Input smoothing state
    smooth_yaw: f32,
    smooth_pitch: f32,

    // Configuration
    /// Distance covered per simulation tick for each held movement key
    pub move_speed: f32,
    /// Radians of rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Exponential smoothing half-life in seconds
    pub smoothing_half_life: f32,
    pub smoothing_enabled: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            keys: MoveKeys::empty(),

            jump_pressed: false,

            pending_yaw: 0.0,
            pending_pitch: 0.0,

            smooth_yaw: 0.0,
            smooth_pitch: 0.0,

            move_speed: 0.1,
            mouse_sensitivity: 0.002,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was consumed by the controller.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        if let Some(flag) = MoveKeys::from_key(key) {
            self.keys.set(flag, pressed);
            return true;
        }

        match key {
            KeyCode::Space => {
                if pressed {
                    self.jump_pressed = true;
                }
                true
            }
            _ => false,
        }
    }

    /// Process raw mouse movement (pixels)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_yaw += delta_x as f32;
        self.pending_pitch += delta_y as f32;
    }

    /// Apply accumulated mouse look to the camera
    ///
    /// Look only happens while the pointer is locked; motion received while
    /// unlocked is discarded.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32, pointer_locked: bool) -> Vec3 {
        if !pointer_locked {
            self.clear_look();
            return camera.position();
        }

        let (yaw_input, pitch_input) = if self.smoothing_enabled && dt > 0.0 {
            // factor = 2^(-dt / half_life), so smaller half_life = faster response
            let smooth_factor = 2.0f32.powf(-dt / self.smoothing_half_life);
            self.smooth_yaw = self.smooth_yaw * smooth_factor + self.pending_yaw * (1.0 - smooth_factor);
            self.smooth_pitch = self.smooth_pitch * smooth_factor + self.pending_pitch * (1.0 - smooth_factor);
            (self.smooth_yaw, self.smooth_pitch)
        } else {
            (self.pending_yaw, self.pending_pitch)
        };

        // Mouse right turns right (negative yaw), mouse down looks down
        camera.rotate(
            -yaw_input * self.mouse_sensitivity,
            -pitch_input * self.mouse_sensitivity,
        );

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;

        camera.position()
    }

    /// Drop pending motion and any smoothed look still in flight
    fn clear_look(&mut self) {
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.smooth_yaw = 0.0;
        self.smooth_pitch = 0.0;
    }

    /// Currently held movement keys
    pub fn keys(&self) -> MoveKeys {
        self.keys
    }

    /// Release every held key and drop a pending jump (used when focus is lost)
    pub fn release_all(&mut self) {
        self.keys = MoveKeys::empty();
        self.jump_pressed = false;
    }

    /// Toggle input smoothing on/off
    pub fn toggle_smoothing(&mut self) -> bool {
        self.smoothing_enabled = !self.smoothing_enabled;
        self.smooth_yaw = 0.0;
        self.smooth_pitch = 0.0;
        self.smoothing_enabled
    }

    /// Consume the jump input flag
    ///
    /// Returns true if jump was pressed since last consume, then clears the flag.
    pub fn consume_jump(&mut self) -> bool {
        let was_pressed = self.jump_pressed;
        self.jump_pressed = false;
        was_pressed
    }

    /// Get raw movement input
    ///
    /// Returns (forward, right) in -1.0..=1.0. Opposing keys cancel.
    pub fn get_movement_input(&self) -> (f32, f32) {
        let axis = |pos: MoveKeys, neg: MoveKeys| {
            (self.keys.contains(pos) as i32 - self.keys.contains(neg) as i32) as f32
        };
        (
            axis(MoveKeys::FORWARD, MoveKeys::BACKWARD),
            axis(MoveKeys::RIGHT, MoveKeys::LEFT),
        )
    }

    /// Builder: set per-tick movement distance
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set mouse sensitivity
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Builder: set smoothing half-life (lower = more responsive)
    pub fn with_smoothing_half_life(mut self, half_life: f32) -> Self {
        self.smoothing_half_life = half_life;
        self
    }

    /// Builder: enable or disable smoothing
    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32);
    fn position(&self) -> Vec3;
}
