//! Tests for configuration loading

use std::path::Path;

use govmatch::config::{CONFIG_ENV_VAR, Config, ConfigError};
use serial_test::serial;

use crate::common::TestDataDir;

const FULL_CONFIG: &str = r#"
[server]
bind = "0.0.0.0"
port = 9000

[store]
data_dir = "/var/lib/govmatch"

[matching]
required_matches = 4
"#;

// =============================================================================
// FILE PARSING
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    assert_eq!(config.store.data_dir, Path::new("data"));
    assert_eq!(config.match_policy().unwrap().required_matches, 3);
}

#[test]
fn test_full_file() {
    let dir = TestDataDir::new();
    dir.write("config.toml", FULL_CONFIG);

    let config = Config::from_file(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.listen_addr(), "0.0.0.0:9000");
    assert_eq!(config.store.data_dir, Path::new("/var/lib/govmatch"));
    assert_eq!(config.matching.required_matches, 4);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TestDataDir::new();
    dir.write("config.toml", "[matching]\nrequired_matches = 2\n");

    let config = Config::from_file(&dir.path().join("config.toml")).unwrap();
    assert_eq!(config.server, Config::default().server);
    assert_eq!(config.matching.required_matches, 2);
}

#[test]
fn test_threshold_out_of_range_is_rejected() {
    let dir = TestDataDir::new();
    dir.write("config.toml", "[matching]\nrequired_matches = 7\n");

    let err = Config::from_file(&dir.path().join("config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("[matching]"));
}

#[test]
fn test_zero_port_is_rejected() {
    let dir = TestDataDir::new();
    dir.write("config.toml", "[server]\nport = 0\n");

    assert!(matches!(
        Config::from_file(&dir.path().join("config.toml")),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = TestDataDir::new();
    dir.write("config.toml", "[server\n");

    assert!(matches!(
        Config::from_file(&dir.path().join("config.toml")),
        Err(ConfigError::Parse { .. })
    ));
}

// =============================================================================
// LOOKUP ORDER
// =============================================================================

#[test]
#[serial]
fn test_explicit_path_wins_over_env() {
    let dir = TestDataDir::new();
    dir.write("explicit.toml", "[server]\nport = 7000\n");
    dir.write("env.toml", "[server]\nport = 7001\n");

    temp_env(&dir.path().join("env.toml"), || {
        let config = Config::load(Some(&dir.path().join("explicit.toml"))).unwrap();
        assert_eq!(config.server.port, 7000);
    });
}

#[test]
#[serial]
fn test_env_var_is_used() {
    let dir = TestDataDir::new();
    dir.write("env.toml", "[server]\nport = 7001\n");

    temp_env(&dir.path().join("env.toml"), || {
        assert_eq!(Config::load(None).unwrap().server.port, 7001);
    });
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    let dir = TestDataDir::new();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

/// Run `f` with the config env var pointing at `path`
fn temp_env(path: &Path, f: impl FnOnce()) {
    let previous = std::env::var_os(CONFIG_ENV_VAR);
    // SAFETY: tests touching the environment are serialized with #[serial]
    unsafe { std::env::set_var(CONFIG_ENV_VAR, path) };
    f();
    // SAFETY: as above
    unsafe {
        match previous {
            Some(value) => std::env::set_var(CONFIG_ENV_VAR, value),
            None => std::env::remove_var(CONFIG_ENV_VAR),
        }
    }
}
