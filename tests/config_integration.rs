//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use morphosis::config::AppConfig;
use morphosis_core::SamplingStrategy;
use serial_test::serial;

fn clear_env() {
    for key in [
        "MORPHOSIS_FRACTAL__MAX_ITER",
        "MORPHOSIS_FRACTAL__STRATEGY",
        "MORPHOSIS_BUILD__PARALLEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    clear_env();
    let config = AppConfig::load().unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.fractal.step_size, defaults.fractal.step_size);
    assert_eq!(config.fractal.c, defaults.fractal.c);
    assert_eq!(config.fractal.max_iter, defaults.fractal.max_iter);
    assert_eq!(config.export.obj_path, defaults.export.obj_path);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env();
    std::env::set_var("MORPHOSIS_FRACTAL__MAX_ITER", "11");
    std::env::set_var("MORPHOSIS_FRACTAL__STRATEGY", "early-exit");
    std::env::set_var("MORPHOSIS_BUILD__PARALLEL", "true");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.fractal.max_iter, 11);
    assert_eq!(config.fractal.strategy, SamplingStrategy::EarlyExit);
    assert!(config.build.parallel);

    clear_env();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    clear_env();
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.fractal.max_iter, 6);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    clear_env();
    let dir = std::env::temp_dir().join("morphosis_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[fractal]\nmax_iter = 4\nstep_size = 0.25\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[fractal]\nmax_iter = 8\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.fractal.max_iter, 8);
    assert_eq!(config.fractal.step_size, 0.25);
    assert!(config.fractal.to_params().is_ok());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
#[serial]
fn test_bad_value_is_an_error() {
    clear_env();
    std::env::set_var("MORPHOSIS_FRACTAL__STRATEGY", "sideways");
    let result = AppConfig::load_from("does/not/exist");
    assert!(result.is_err());
    assert!(format!("{}", result.unwrap_err()).contains("Configuration error"));
    clear_env();
}
