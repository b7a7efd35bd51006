//! Input handling module
//!
//! Special keys and clicks become [`InputAction`]s; movement keys go straight
//! to the `CameraController`.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
