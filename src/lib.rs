//! ArenaWalk application library
//!
//! The binary in `main.rs` is a thin winit shell around these modules.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
