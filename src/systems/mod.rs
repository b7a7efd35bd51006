//! Application systems
//!
//! The window, simulation, and GPU halves of the app, kept out of main.rs so
//! they can be tested on their own.

mod simulation;
mod window;
mod render;

pub use simulation::{SimulationSystem, SimulationResult};
pub use window::{WindowSystem, WindowError, prompt_title};
pub use render::{RenderSystem, RenderError};
