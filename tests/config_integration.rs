//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use clothnet::config::AppConfig;
use serial_test::serial;

/// Fresh config directory under the system temp dir
fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("clothnet-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CLOTH_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("CLOTH_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_override_numeric() {
    std::env::set_var("CLOTH_NET__COLS", "6");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("CLOTH_NET__COLS");
    assert_eq!(config.net.cols, 6);
    assert_eq!(config.net.rows, 4);
}

#[test]
#[serial]
fn test_shipped_default_file_matches_defaults() {
    let config = AppConfig::load().unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.window.title, defaults.window.title);
    assert_eq!(config.simulation.target_fps, defaults.simulation.target_fps);
    assert_eq!(config.net.cols, defaults.net.cols);
    assert_eq!(config.net.separation, defaults.net.separation);
    assert_eq!(config.physics.gravity, defaults.physics.gravity);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = temp_config_dir("missing");
    fs::remove_dir_all(&dir).unwrap();

    let config = AppConfig::load_from(&dir).unwrap();

    assert_eq!(config.window.width, 800);
    assert_eq!(config.trails.max_length, 120);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = temp_config_dir("layered");
    fs::write(
        dir.join("default.toml"),
        "[net]\ncols = 5\nrows = 5\n\n[simulation]\ntarget_fps = 30\n",
    )
    .unwrap();
    fs::write(dir.join("user.toml"), "[net]\ncols = 8\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(config.net.cols, 8);
    assert_eq!(config.net.rows, 5);
    assert_eq!(config.simulation.target_fps, 30);
}

#[test]
#[serial]
fn test_invalid_values_rejected() {
    let dir = temp_config_dir("invalid");
    fs::write(dir.join("user.toml"), "[simulation]\nmin_fps = 0\n").unwrap();

    let result = AppConfig::load_from(&dir);
    fs::remove_dir_all(&dir).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("min_fps"));
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let dir = temp_config_dir("malformed");
    fs::write(dir.join("user.toml"), "[net]\ncols = \"many\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    fs::remove_dir_all(&dir).unwrap();

    assert!(result.is_err());
}
