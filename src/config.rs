//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ARENA_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use arena_core::Vec3;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Arena layout colors and sizes
    #[serde(default)]
    pub arena: ArenaConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ARENA_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // ARENA_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("ARENA_").split("__"));

        let mut config: AppConfig = figment.extract()?;
        config.physics.validate();
        Ok(config)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title shown next to the lock prompt
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ArenaWalk".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position at spawn [x, y, z]
    pub start_position: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Maximum pitch angle in degrees
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 1.7, 5.0),
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            pitch_limit: 90.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Distance moved per tick while a movement key is held
    pub move_speed: f32,
    /// Radians of look per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Look smoothing half-life in seconds (lower = more responsive)
    pub smoothing_half_life: f32,
    /// Enable look smoothing at startup
    pub smoothing_enabled: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            mouse_sensitivity: 0.002,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }
}

/// Slowest and fastest supported simulation rates (ticks per second)
pub const MIN_TICK_RATE: f32 = 1.0;
pub const MAX_TICK_RATE: f32 = 1000.0;

/// Physics configuration
///
/// Velocities and gravity are per tick; `tick_rate` sets how many ticks run per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Vertical velocity change per tick (negative = downward)
    pub gravity: f32,
    /// Upward velocity set by a jump
    pub jump_velocity: f32,
    /// Lowest eye height; acts as the floor
    pub eye_height: f32,
    /// Minimum distance from the eye to any wall center
    pub wall_clearance: f32,
    /// Fixed simulation ticks per second
    pub tick_rate: f32,
    /// Longest frame delta fed to the simulation, in seconds
    pub max_frame_time: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -0.01,
            jump_velocity: 0.2,
            eye_height: 1.7,
            wall_clearance: 2.0,
            tick_rate: 60.0,
            max_frame_time: 0.25,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the simulation's physics constants
    pub fn to_physics_config(&self) -> arena_physics::PhysicsConfig {
        arena_physics::PhysicsConfig {
            gravity: self.gravity,
            jump_velocity: self.jump_velocity,
            eye_height: self.eye_height,
            wall_clearance: self.wall_clearance,
        }
    }

    /// Length of one tick in seconds
    pub fn tick_duration(&self) -> f32 {
        let rate = if self.tick_rate.is_finite() {
            self.tick_rate.clamp(MIN_TICK_RATE, MAX_TICK_RATE)
        } else {
            Self::default().tick_rate
        };
        1.0 / rate
    }

    /// Replace timing values the simulation cannot run with by their defaults
    pub fn validate(&mut self) {
        let defaults = Self::default();

        if !(MIN_TICK_RATE..=MAX_TICK_RATE).contains(&self.tick_rate) {
            log::warn!(
                "physics.tick_rate {} is outside {}..={}, using {}",
                self.tick_rate, MIN_TICK_RATE, MAX_TICK_RATE, defaults.tick_rate
            );
            self.tick_rate = defaults.tick_rate;
        }

        if !(self.max_frame_time.is_finite() && self.max_frame_time > 0.0) {
            log::warn!(
                "physics.max_frame_time {} must be a positive number of seconds, using {}",
                self.max_frame_time, defaults.max_frame_time
            );
            self.max_frame_time = defaults.max_frame_time;
        }
    }
}

/// Arena configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Side length of the square floor
    pub floor_size: f32,
    /// Floor color as 0xRRGGBB
    pub floor_color: u32,
    /// Wall color as 0xRRGGBB
    pub wall_color: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            floor_size: 200.0,
            floor_color: 0x3366ff,
            wall_color: 0x222266,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Clear color as 0xRRGGBB
    pub background_color: u32,
    /// Hemisphere light color from above
    pub sky_color: u32,
    /// Hemisphere light color from below
    pub ground_color: u32,
    /// Hemisphere light intensity
    pub light_intensity: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: 0x000000,
            sky_color: 0xffffff,
            ground_color: 0x222222,
            light_intensity: 1.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.physics.gravity, -0.01);
        assert_eq!(config.camera.fov, 75.0);
        assert_eq!(config.arena.floor_color, 0x3366ff);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("[arena]"));
        assert!(toml.contains("start_position = ["), "{}", toml);
    }

    #[test]
    fn test_start_position_reads_as_array() {
        let config: AppConfig = toml::from_str("[camera]\nstart_position = [1.0, 2.0, -3.0]\n").unwrap();
        assert_eq!(config.camera.start_position, Vec3::new(1.0, 2.0, -3.0));
        assert_eq!(config.camera.fov, 75.0);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("[physics]\ngravity = -0.02\n").unwrap();
        assert_eq!(config.physics.gravity, -0.02);
        assert_eq!(config.physics.jump_velocity, 0.2);
        assert_eq!(config.input.move_speed, 0.1);
    }

    #[test]
    fn test_to_physics_config() {
        let physics = PhysicsConfig::default().to_physics_config();
        assert_eq!(physics.gravity, -0.01);
        assert_eq!(physics.eye_height, 1.7);
        assert_eq!(physics.wall_clearance, 2.0);
    }

    #[test]
    fn test_tick_duration() {
        let physics = PhysicsConfig::default();
        assert!((physics.tick_duration() - 1.0 / 60.0).abs() < 1e-6);

        let broken = PhysicsConfig { tick_rate: 0.0, ..Default::default() };
        assert_eq!(broken.tick_duration(), 1.0);

        let huge = PhysicsConfig { tick_rate: 1e9, ..Default::default() };
        assert_eq!(huge.tick_duration(), 1.0 / MAX_TICK_RATE);

        let nan = PhysicsConfig { tick_rate: f32::NAN, ..Default::default() };
        assert!((nan.tick_duration() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_validate_replaces_unusable_timing() {
        let mut physics = PhysicsConfig {
            tick_rate: 1e9,
            max_frame_time: -1.0,
            ..Default::default()
        };
        physics.validate();
        assert_eq!(physics.tick_rate, 60.0);
        assert_eq!(physics.max_frame_time, 0.25);

        let mut physics = PhysicsConfig {
            tick_rate: f32::NAN,
            max_frame_time: f32::NAN,
            ..Default::default()
        };
        physics.validate();
        assert_eq!(physics.tick_rate, 60.0);
        assert_eq!(physics.max_frame_time, 0.25);
    }

    #[test]
    fn test_validate_keeps_usable_timing() {
        let mut physics = PhysicsConfig {
            tick_rate: 120.0,
            max_frame_time: 0.1,
            ..Default::default()
        };
        physics.validate();
        assert_eq!(physics.tick_rate, 120.0);
        assert_eq!(physics.max_frame_time, 0.1);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError { message: "bad value".to_string() };
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }
}
