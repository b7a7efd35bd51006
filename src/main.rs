//! ArenaWalk - first-person walk around a walled arena
//!
//! Click the window to lock the pointer, then WASD to move, Space to jump and
//! the mouse to look around. Escape gives the pointer back.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use arena_core::World;
use arena_input::CameraController;
use arena_render::{camera::Camera3D, RenderableGeometry};

use arenawalk::config::AppConfig;
use arenawalk::input::{InputAction, InputMapper};
use arenawalk::scene::arena_scene;
use arenawalk::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    simulation: SimulationSystem,
    world: World,
    /// Built once; the arena is static
    geometry: RenderableGeometry,
    camera: Camera3D,
    controller: CameraController,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let builder = arena_scene(&config);
        let spawn = builder
            .player_start()
            .unwrap_or(config.camera.start_position);
        let world = builder.build();

        let geometry = RenderableGeometry::from_world(&world);
        log::info!(
            "Arena geometry: {} vertices, {} triangles",
            geometry.vertex_count(),
            geometry.triangle_count()
        );

        let camera = Camera3D::at(spawn)
            .with_pitch_limit(config.camera.pitch_limit.to_radians());

        let controller = CameraController::new()
            .with_move_speed(config.input.move_speed)
            .with_mouse_sensitivity(config.input.mouse_sensitivity)
            .with_smoothing_half_life(config.input.smoothing_half_life)
            .with_smoothing(config.input.smoothing_enabled);

        Self {
            simulation: SimulationSystem::new(&config.physics),
            config,
            window_system: None,
            render_system: None,
            world,
            geometry,
            camera,
            controller,
        }
    }

    fn pointer_locked(&self) -> bool {
        self.window_system
            .as_ref()
            .is_some_and(|ws| ws.is_pointer_locked())
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::LockPointer => {
                if let Some(ws) = &mut self.window_system {
                    ws.lock_pointer();
                }
            }
            InputAction::ReleasePointer => {
                if let Some(ws) = &mut self.window_system {
                    ws.release_pointer();
                }
            }
            InputAction::Exit => event_loop.exit(),
            InputAction::Respawn => {
                let spawn = self.world.physics_mut().and_then(|physics| {
                    physics.respawn_player();
                    physics.player().map(|p| p.spawn_point())
                });
                if let Some(spawn) = spawn {
                    self.camera.position = spawn;
                    self.camera.reset_orientation();
                    log::info!("Respawned at {:?}", spawn);
                }
            }
            InputAction::ToggleFullscreen => {
                if let Some(ws) = &self.window_system {
                    ws.toggle_fullscreen();
                }
            }
            InputAction::ToggleSmoothing => {
                let enabled = self.controller.toggle_smoothing();
                log::info!("Look smoothing: {}", if enabled { "ON" } else { "OFF" });
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let locked = self.pointer_locked();
        let result = self.simulation.update(
            &mut self.world,
            &mut self.camera,
            &mut self.controller,
            locked,
        );
        if result.blocked_ticks > 0 {
            log::trace!("{} of {} ticks blocked by walls", result.blocked_ticks, result.ticks);
        }

        if let Some(ws) = &self.window_system {
            ws.update_title(self.camera.position);
        }

        if let Some(rs) = &mut self.render_system {
            match rs.render_frame(&self.camera) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => rs.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(ws) = &self.window_system {
            ws.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(ws) => ws,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let mut render_system = match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            self.config.camera.clone(),
            self.config.window.vsync,
        ) {
            Ok(rs) => rs,
            Err(e) => {
                log::error!("Failed to initialise GPU: {}", e);
                event_loop.exit();
                return;
            }
        };

        render_system.upload_geometry(&self.geometry);

        window_system.request_redraw();
        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(rs) = &mut self.render_system {
                    rs.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                // Keys released while unfocused never arrive
                self.controller.release_all();
                if let Some(ws) = self.window_system.as_mut().filter(|ws| ws.is_pointer_locked()) {
                    ws.release_pointer();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let locked = self.pointer_locked();
                    if let Some(action) = InputMapper::map_keyboard(key, event.state, locked) {
                        self.handle_action(action, event_loop);
                        return;
                    }
                    if !event.repeat {
                        self.controller.process_keyboard(key, event.state);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let locked = self.pointer_locked();
                if let Some(action) = InputMapper::map_mouse_button(button, state, locked) {
                    self.handle_action(action, event_loop);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config comes first so it can set the log level
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting ArenaWalk");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}
