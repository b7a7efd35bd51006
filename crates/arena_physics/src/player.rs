//! Player physics for first-person movement
//!
//! The player is a single eye point. Horizontal movement is a direct
//! displacement, vertical motion is a per-tick gravity integrator clamped at
//! eye height above the floor.

use arena_math::Vec3;

/// Default eye height above the floor
pub const DEFAULT_EYE_HEIGHT: f32 = 1.7;

/// Default upward velocity applied by a jump (units per tick)
pub const DEFAULT_JUMP_VELOCITY: f32 = 0.2;

/// Player physics state
#[derive(Clone, Debug)]
pub struct PlayerPhysics {
    /// Current eye position
    pub position: Vec3,
    /// Vertical velocity in units per tick
    pub velocity_y: f32,
    /// Set when the player rests on the floor, cleared by a jump
    pub can_jump: bool,
    /// Upward velocity applied when jumping
    pub jump_velocity: f32,
    /// Where `respawn` puts the player back
    spawn: Vec3,
}

impl PlayerPhysics {
    /// Create a new player at the given position
    ///
    /// The player cannot jump until it has touched the floor once.
    pub fn new(position: Vec3) -> Self {
        Self::with_jump_velocity(position, DEFAULT_JUMP_VELOCITY)
    }

    /// Create a new player with a custom jump velocity
    pub fn with_jump_velocity(position: Vec3, jump_velocity: f32) -> Self {
        Self {
            position,
            velocity_y: 0.0,
            can_jump: false,
            jump_velocity,
            spawn: position,
        }
    }

    /// Apply a horizontal displacement (the Y component is ignored)
    pub fn apply_movement(&mut self, displacement: Vec3) {
        self.position.x += displacement.x;
        self.position.z += displacement.z;
    }

    /// Attempt to jump
    ///
    /// Returns true if the jump happened.
    pub fn jump(&mut self) -> bool {
        if self.can_jump {
            self.velocity_y = self.jump_velocity;
            self.can_jump = false;
            true
        } else {
            false
        }
    }

    /// Simulate one tick of vertical motion
    ///
    /// # Arguments
    /// * `gravity` - Velocity change per tick (negative = downward)
    /// * `eye_height` - Lowest allowed eye Y; landing here re-enables jumping
    pub fn step(&mut self, gravity: f32, eye_height: f32) {
        self.velocity_y += gravity;
        self.position.y += self.velocity_y;

        if self.position.y < eye_height {
            self.position.y = eye_height;
            self.velocity_y = 0.0;
            self.can_jump = true;
        }
    }

    /// Put the player back at its spawn point, at rest
    pub fn respawn(&mut self) {
        self.position = self.spawn;
        self.velocity_y = 0.0;
        self.can_jump = false;
    }

    /// Where [`respawn`](Self::respawn) puts the player
    pub fn spawn_point(&self) -> Vec3 {
        self.spawn
    }
}
