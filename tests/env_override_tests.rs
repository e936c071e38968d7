//! Environment overrides for configuration.
//!
//! Kept in its own test binary so the process environment is not shared
//! with other config tests.

use ade_agent::models::config::{load_config, load_config_from, BASE_URL_ENV};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_base_url_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[http]\nbase_url = \"http://www.adultdvdempire.com\"\n").unwrap();

    std::env::set_var(BASE_URL_ENV, "http://mirror.local");

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.http.base_url, "http://mirror.local");

    let missing = temp_dir.path().join("missing.toml");
    let (config, _) = load_config(Some(missing.as_path()));
    assert_eq!(config.http.base_url, "http://mirror.local");

    std::env::remove_var(BASE_URL_ENV);
}
