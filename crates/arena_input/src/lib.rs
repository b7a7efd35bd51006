//! First-person Input Handling
//!
//! This crate turns raw keyboard and mouse events into movement intent,
//! jump requests, and pointer-look rotation.

mod camera_controller;

pub use camera_controller::{CameraController, CameraControl, MoveKeys};
