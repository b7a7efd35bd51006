//! Physics world and per-tick simulation

use crate::collision::{first_blocking_wall, WallCollider};
use crate::player::{PlayerPhysics, DEFAULT_EYE_HEIGHT, DEFAULT_JUMP_VELOCITY};
use arena_math::Vec3;

/// Configuration for the physics simulation
///
/// All rates are per tick, not per second.
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Vertical velocity change per tick (negative = down)
    pub gravity: f32,
    /// Upward velocity applied by a jump
    pub jump_velocity: f32,
    /// Lowest eye Y; acts as the floor
    pub eye_height: f32,
    /// Minimum allowed distance from the eye to any wall center
    pub wall_clearance: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -0.01,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            eye_height: DEFAULT_EYE_HEIGHT,
            wall_clearance: 2.0,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }
}

/// Input for one tick
#[derive(Clone, Copy, Debug, Default)]
pub struct TickInput {
    /// Horizontal displacement requested by the held movement keys
    pub displacement: Vec3,
    /// Movement and gravity only run while the pointer is locked
    pub pointer_locked: bool,
}

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOutcome {
    /// Index of the wall that rejected the move, if the move was undone
    pub blocked_by: Option<usize>,
}

impl TickOutcome {
    pub fn reverted(&self) -> bool {
        self.blocked_by.is_some()
    }
}

/// The physics world: the player and the static walls
pub struct PhysicsWorld {
    /// Static walls, fixed once the scene is built
    walls: Vec<WallCollider>,
    player: Option<PlayerPhysics>,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            walls: Vec::new(),
            player: None,
            config,
        }
    }

    /// Add a wall to the world
    pub fn add_wall(&mut self, wall: WallCollider) {
        self.walls.push(wall);
    }

    /// Get immutable access to the walls
    pub fn walls(&self) -> &[WallCollider] {
        &self.walls
    }

    /// Place the player, replacing any previous one
    pub fn set_player(&mut self, position: Vec3) {
        self.player = Some(PlayerPhysics::with_jump_velocity(
            position,
            self.config.jump_velocity,
        ));
    }

    pub fn player(&self) -> Option<&PlayerPhysics> {
        self.player.as_ref()
    }

    /// Get the player's eye position
    pub fn player_position(&self) -> Option<Vec3> {
        self.player.as_ref().map(|p| p.position)
    }

    /// Make the player jump if it is resting on the floor
    ///
    /// Returns true if the jump happened.
    pub fn player_jump(&mut self) -> bool {
        self.player.as_mut().map(|p| p.jump()).unwrap_or(false)
    }

    /// Put the player back at its spawn point
    pub fn respawn_player(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.respawn();
        }
    }

    /// Advance the simulation by one tick
    ///
    /// 1. Remember the player position
    /// 2. If the pointer is locked: apply the displacement, then gravity and the floor clamp
    /// 3. If the new position is too close to any wall center, restore the remembered position
    ///
    /// Only the position is restored; vertical velocity and the jump flag keep
    /// their new values.
    pub fn step(&mut self, input: TickInput) -> TickOutcome {
        let Some(player) = self.player.as_mut() else {
            return TickOutcome::default();
        };

        let previous = player.position;

        if input.pointer_locked {
            player.apply_movement(input.displacement);
            player.step(self.config.gravity, self.config.eye_height);
        }

        let blocked_by = first_blocking_wall(&self.walls, player.position, self.config.wall_clearance);
        if let Some(index) = blocked_by {
            player.position = previous;
            log::trace!("Move rejected by wall {} at {:?}", index, self.walls[index].center);
        }

        TickOutcome { blocked_by }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
