//! Game simulation system
//!
//! Frame time is capped, then split into fixed ticks. Each tick moves the
//! player by the held keys, applies gravity and the floor clamp, and undoes the
//! move if it came too close to a wall.

use std::time::Instant;
use arena_core::{TickInput, World};
use arena_input::CameraController;
use arena_render::camera::Camera3D;

use crate::config::PhysicsConfig;

/// Most ticks a single frame may run; any backlog beyond this is dropped
pub const MAX_TICKS_PER_FRAME: u32 = 250;

/// What happened during one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationResult {
    /// Fixed ticks run this frame
    pub ticks: u32,
    /// Ticks whose move was undone by a wall
    pub blocked_ticks: u32,
    /// A jump started this frame
    pub jumped: bool,
}

/// Manages the fixed-tick simulation loop
pub struct SimulationSystem {
    last_frame: Instant,
    accumulator: f32,
    tick_duration: f32,
    max_frame_time: f32,
}

impl SimulationSystem {
    /// Create a simulation running `physics.tick_rate` ticks per second
    pub fn new(physics: &PhysicsConfig) -> Self {
        Self::with_timing(physics.tick_duration(), physics.max_frame_time)
    }

    /// Create a simulation with explicit tick length and frame cap (seconds)
    pub fn with_timing(tick_duration: f32, max_frame_time: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            accumulator: 0.0,
            tick_duration,
            max_frame_time,
        }
    }

    /// Seconds per tick
    pub fn tick_duration(&self) -> f32 {
        self.tick_duration
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update(
        &mut self,
        world: &mut World,
        camera: &mut Camera3D,
        controller: &mut CameraController,
        pointer_locked: bool,
    ) -> SimulationResult {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.step_frame(dt, world, camera, controller, pointer_locked)
    }

    /// Run one frame of `dt` seconds
    ///
    /// 1. A pending jump request is honoured whether or not the pointer is locked
    /// 2. Mouse look is applied (locked only)
    /// 3. As many fixed ticks as the accumulated time allows
    /// 4. The camera is synced to the player's eye
    pub fn step_frame(
        &mut self,
        dt: f32,
        world: &mut World,
        camera: &mut Camera3D,
        controller: &mut CameraController,
        pointer_locked: bool,
    ) -> SimulationResult {
        let dt = if dt > 0.0 { dt.min(self.max_frame_time.max(0.0)) } else { 0.0 };
        let mut result = SimulationResult::default();

        if controller.consume_jump() {
            result.jumped = world.physics_mut().is_some_and(|p| p.player_jump());
        }

        controller.update(camera, dt, pointer_locked);

        result.ticks = self.advance(dt);
        for _ in 0..result.ticks {
            if Self::run_tick(world, camera, controller, pointer_locked) {
                result.blocked_ticks += 1;
            }
        }

        if let Some(pos) = world.physics().and_then(|p| p.player_position()) {
            camera.position = pos;
        }

        result
    }

    /// Add `dt` to the accumulator and return how many whole ticks it now holds
    ///
    /// Never more than [`MAX_TICKS_PER_FRAME`].
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut ticks = 0;
        while self.accumulator >= self.tick_duration {
            if ticks == MAX_TICKS_PER_FRAME {
                log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
                self.accumulator = 0.0;
                break;
            }
            self.accumulator -= self.tick_duration;
            ticks += 1;
        }
        ticks
    }

    /// One fixed tick; returns true if a wall undid the move
    fn run_tick(
        world: &mut World,
        camera: &mut Camera3D,
        controller: &CameraController,
        pointer_locked: bool,
    ) -> bool {
        let (forward, right) = controller.get_movement_input();
        let speed = controller.move_speed;
        let displacement = camera.ground_displacement(forward * speed, right * speed);

        let outcome = world.tick(TickInput {
            displacement,
            pointer_locked,
        });

        if let Some(pos) = world.physics().and_then(|p| p.player_position()) {
            camera.position = pos;
        }

        outcome.reverted()
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(&PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::scene::arena_scene;
    use arena_core::PLAYER_SPAWN;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    struct Harness {
        sim: SimulationSystem,
        world: World,
        camera: Camera3D,
        controller: CameraController,
    }

    impl Harness {
        fn new() -> Self {
            let world = arena_scene(&AppConfig::default()).build();
            Self {
                sim: SimulationSystem::default(),
                world,
                camera: Camera3D::at(PLAYER_SPAWN),
                controller: CameraController::new(),
            }
        }

        /// Run `frames` frames of exactly one tick each
        fn frames(&mut self, frames: usize, locked: bool) -> SimulationResult {
            let mut total = SimulationResult::default();
            let dt = self.sim.tick_duration();
            for _ in 0..frames {
                let r = self.sim.step_frame(dt, &mut self.world, &mut self.camera, &mut self.controller, locked);
                total.ticks += r.ticks;
                total.blocked_ticks += r.blocked_ticks;
                total.jumped |= r.jumped;
            }
            total
        }

        fn press(&mut self, key: KeyCode) {
            self.controller.process_keyboard(key, ElementState::Pressed);
        }

        fn release(&mut self, key: KeyCode) {
            self.controller.process_keyboard(key, ElementState::Released);
        }
    }

    #[test]
    fn test_advance_accumulates_fractions() {
        let mut sim = SimulationSystem::with_timing(0.5, 10.0);
        assert_eq!(sim.advance(1.25), 2);
        assert_eq!(sim.advance(0.125), 0);
        assert_eq!(sim.advance(0.125), 1);
    }

    #[test]
    fn test_frame_time_is_capped() {
        let mut h = Harness::new();
        let result = h.sim.step_frame(10.0, &mut h.world, &mut h.camera, &mut h.controller, true);
        // 0.25 s at 60 Hz, give or take float rounding in the accumulator
        assert!(result.ticks >= 14 && result.ticks <= 15, "ran {} ticks", result.ticks);
    }

    #[test]
    fn test_tiny_tick_length_is_bounded_per_frame() {
        let mut sim = SimulationSystem::with_timing(1e-9, 0.25);
        assert_eq!(sim.advance(0.25), MAX_TICKS_PER_FRAME);
        // Backlog was dropped rather than carried into the next frame
        assert_eq!(sim.advance(0.0), 0);
    }

    #[test]
    fn test_unusable_frame_cap_runs_no_ticks() {
        for cap in [-1.0, f32::NAN] {
            let mut h = Harness::new();
            h.sim = SimulationSystem::with_timing(1.0 / 60.0, cap);
            h.press(KeyCode::KeyW);
            let result = h.sim.step_frame(0.1, &mut h.world, &mut h.camera, &mut h.controller, true);
            assert_eq!(result.ticks, 0);
            assert_eq!(h.camera.position, PLAYER_SPAWN);
        }
    }

    #[test]
    fn test_huge_tick_rate_from_config_stays_bounded() {
        let physics = PhysicsConfig { tick_rate: 1e9, ..Default::default() };
        let mut h = Harness::new();
        h.sim = SimulationSystem::new(&physics);
        let result = h.sim.step_frame(10.0, &mut h.world, &mut h.camera, &mut h.controller, true);
        assert!(result.ticks <= MAX_TICKS_PER_FRAME, "ran {} ticks", result.ticks);
    }

    #[test]
    fn test_one_tick_per_tick_length_frame() {
        let mut h = Harness::new();
        let result = h.frames(10, true);
        assert_eq!(result.ticks, 10);
    }

    #[test]
    fn test_walk_forward_locked() {
        let mut h = Harness::new();
        h.press(KeyCode::KeyW);
        h.frames(30, true);

        // 30 ticks at 0.1 per tick down -Z
        assert!((h.camera.position.z - 2.0).abs() < 0.001, "z = {}", h.camera.position.z);
        assert_eq!(h.camera.position.y, 1.7);
        assert_eq!(h.camera.position.x, 0.0);
    }

    #[test]
    fn test_unlocked_frames_freeze_player() {
        let mut h = Harness::new();
        h.press(KeyCode::KeyD);
        h.controller.process_mouse_motion(200.0, 50.0);
        h.frames(30, false);

        assert_eq!(h.camera.position, PLAYER_SPAWN);
        assert_eq!(h.camera.yaw(), 0.0);
        assert_eq!(h.camera.pitch(), 0.0);
    }

    #[test]
    fn test_mouse_look_turns_movement() {
        let mut h = Harness::new();
        // Mouse right by enough pixels to turn 90 degrees right
        let pixels = std::f32::consts::FRAC_PI_2 / h.controller.mouse_sensitivity;
        h.controller.process_mouse_motion(pixels as f64, 0.0);
        h.frames(1, true);

        h.press(KeyCode::KeyW);
        h.frames(10, true);
        assert!(h.camera.position.x > 0.9, "x = {}", h.camera.position.x);
        assert!((h.camera.position.z - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_walking_into_wall_is_blocked() {
        let mut h = Harness::new();
        h.press(KeyCode::KeyS);
        let result = h.frames(60, true);

        assert!(result.blocked_ticks > 0);
        let dist = h.camera.position.distance(arena_core::Vec3::new(0.0, 1.5, 10.0));
        assert!(dist >= 2.0, "got within {} of the south wall", dist);
    }

    #[test]
    fn test_jump_needs_ground_contact() {
        let mut h = Harness::new();

        // Not grounded yet: the first tick has not run
        h.press(KeyCode::Space);
        let result = h.frames(1, true);
        assert!(!result.jumped);

        h.release(KeyCode::Space);
        h.press(KeyCode::Space);
        let result = h.frames(1, true);
        assert!(result.jumped);
        assert!(h.camera.position.y > 1.7);

        // Airborne: a second press does nothing
        h.press(KeyCode::Space);
        assert!(!h.frames(1, true).jumped);

        h.frames(60, true);
        assert_eq!(h.camera.position.y, 1.7);
    }

    #[test]
    fn test_jump_while_unlocked_waits_for_lock() {
        let mut h = Harness::new();
        h.frames(1, true);

        h.press(KeyCode::Space);
        let result = h.frames(5, false);
        assert!(result.jumped);

        let player = h.world.physics().unwrap().player().unwrap();
        assert_eq!(player.velocity_y, 0.2);
        assert!(!player.can_jump);
        assert_eq!(h.camera.position.y, 1.7);

        h.frames(1, true);
        assert!(h.camera.position.y > 1.7);
    }
}
