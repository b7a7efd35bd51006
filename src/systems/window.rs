//! Window management system
//!
//! Owns the window, the pointer-lock state, and the title bar, which doubles
//! as the "click to play" prompt.

use std::sync::Arc;
use arena_core::Vec3;
use winit::{
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window and pointer lock
pub struct WindowSystem {
    window: Arc<Window>,
    pointer_locked: bool,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(prompt_title(&config.title, false, None))
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            pointer_locked: false,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn is_pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// Grab and hide the cursor
    ///
    /// Falls back to a confined cursor where locking is unsupported. Returns
    /// false if neither mode is available.
    pub fn lock_pointer(&mut self) -> bool {
        let grab_result = self.window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));

        match grab_result {
            Ok(()) => {
                self.window.set_cursor_visible(false);
                self.pointer_locked = true;
                log::info!("Pointer locked - Esc to release");
                true
            }
            Err(e) => {
                log::warn!("Failed to lock pointer: {}", e);
                false
            }
        }
    }

    /// Give the cursor back and show the prompt again
    pub fn release_pointer(&mut self) {
        if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("Failed to release cursor grab: {}", e);
        }
        self.window.set_cursor_visible(true);
        self.pointer_locked = false;
        log::info!("Pointer released - click to play");
    }

    /// Toggle borderless fullscreen
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the prompt and the player's position in the title bar
    pub fn update_title(&self, position: Vec3) {
        self.window
            .set_title(&prompt_title(&self.base_title, self.pointer_locked, Some(position)));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title bar text for the given lock state
pub fn prompt_title(base: &str, pointer_locked: bool, position: Option<Vec3>) -> String {
    let prompt = if pointer_locked {
        "[Esc to release]"
    } else {
        "[Click to play - WASD move, Space jump, mouse look]"
    };

    match position {
        Some(p) => format!("{} - ({:.1}, {:.1}, {:.1}) {}", base, p.x, p.y, p.z, prompt),
        None => format!("{} {}", base, prompt),
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
