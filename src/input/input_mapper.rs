//! Input mapping from raw events to semantic actions
//!
//! What a key or click means depends on whether the pointer is locked:
//! Escape releases a held lock but quits when nothing is held.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Grab and hide the cursor (click while unlocked)
    LockPointer,
    /// Give the cursor back (Escape while locked)
    ReleasePointer,
    /// Exit application (Escape while unlocked)
    Exit,
    /// Put the player back at the spawn point (R key)
    Respawn,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Toggle look smoothing (G key)
    ToggleSmoothing,
}

/// Maps raw input events to semantic actions
///
/// WASD and Space are not mapped here.
pub struct InputMapper;

impl InputMapper {
    /// Map a key press to an action
    ///
    /// Releases and unmapped keys return `None`.
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        pointer_locked: bool,
    ) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape if pointer_locked => Some(InputAction::ReleasePointer),
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::Respawn),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyG => Some(InputAction::ToggleSmoothing),
            _ => None,
        }
    }

    /// Map a mouse button to an action
    ///
    /// Only a left press on an unlocked window does anything.
    pub fn map_mouse_button(
        button: MouseButton,
        state: ElementState,
        pointer_locked: bool,
    ) -> Option<InputAction> {
        match (button, state, pointer_locked) {
            (MouseButton::Left, ElementState::Pressed, false) => Some(InputAction::LockPointer),
            _ => None,
        }
    }
}
