//! Integration tests for configuration loading
//!
//! Env-var tests share process state, so they run serially.

use std::fs;
use std::path::PathBuf;

use arenawalk::config::AppConfig;
use serial_test::serial;

fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arenawalk-config-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_checked_in_defaults_match_builtin() {
    std::env::remove_var("ARENA_WINDOW__TITLE");

    let from_file = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config")).unwrap();
    let builtin = AppConfig::default();

    assert_eq!(from_file.window.title, builtin.window.title);
    assert_eq!(from_file.physics.gravity, builtin.physics.gravity);
    assert_eq!(from_file.physics.jump_velocity, builtin.physics.jump_velocity);
    assert_eq!(from_file.physics.tick_rate, builtin.physics.tick_rate);
    assert_eq!(from_file.camera.start_position, builtin.camera.start_position);
    assert_eq!(from_file.arena.floor_color, 0x3366ff);
    assert_eq!(from_file.arena.wall_color, 0x222266);
    assert_eq!(from_file.rendering.ground_color, 0x222222);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("ARENA_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/config"));
    std::env::remove_var("ARENA_WINDOW__TITLE");

    assert_eq!(config.unwrap().window.title, "Test From Env");
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    std::env::remove_var("ARENA_WINDOW__TITLE");

    let dir = temp_config_dir("user");
    fs::write(dir.join("default.toml"), "[input]\nmove_speed = 0.1\nmouse_sensitivity = 0.002\n").unwrap();
    fs::write(dir.join("user.toml"), "[input]\nmove_speed = 0.25\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.input.move_speed, 0.25);
    assert_eq!(config.input.mouse_sensitivity, 0.002);
}

#[test]
#[serial]
fn test_missing_directory_gives_defaults() {
    std::env::remove_var("ARENA_WINDOW__TITLE");

    let config = AppConfig::load_from("definitely/not/a/config/dir").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.physics.eye_height, 1.7);
}

#[test]
#[serial]
fn test_bad_value_is_an_error() {
    std::env::remove_var("ARENA_WINDOW__TITLE");

    let dir = temp_config_dir("bad");
    fs::write(dir.join("default.toml"), "[window]\nwidth = \"wide\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    fs::remove_dir_all(&dir).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_unusable_timing_falls_back_to_defaults() {
    std::env::remove_var("ARENA_WINDOW__TITLE");

    let dir = temp_config_dir("timing");
    fs::write(dir.join("user.toml"), "[physics]\ntick_rate = 1e9\nmax_frame_time = -1.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.physics.tick_rate, 60.0);
    assert_eq!(config.physics.max_frame_time, 0.25);
}

#[test]
#[serial]
fn test_env_negative_frame_cap_falls_back_to_default() {
    std::env::remove_var("ARENA_WINDOW__TITLE");
    std::env::set_var("ARENA_PHYSICS__MAX_FRAME_TIME", "-1.0");
    let config = AppConfig::load_from("definitely/not/a/config/dir");
    std::env::remove_var("ARENA_PHYSICS__MAX_FRAME_TIME");

    assert_eq!(config.unwrap().physics.max_frame_time, 0.25);
}
