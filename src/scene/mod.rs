//! Scene construction utilities
//!
//! This module provides a fluent API for building the arena world.

mod scene_builder;

pub use scene_builder::{SceneBuilder, arena_scene};
