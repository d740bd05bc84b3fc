use super::data::{Config, ModeOption};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        server_url: Some("http://tutor.lan:5000".to_string()),
        default_language: Some("Go".to_string()),
        modes: vec![ModeOption {
            id: "practice".to_string(),
            label: "Practice".to_string(),
        }],
        ..Default::default()
    };
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let mut config = loaded;
    config.default_language = None;
    config.request_timeout_secs = Some(30);
    config
        .save_to_path(&config_path)
        .expect("Failed to save modified config");
    let loaded = Config::load_from_path(&config_path).expect("Failed to load modified config");
    assert_eq!(loaded.default_language, None);
    assert_eq!(loaded.request_timeout_secs, Some(30));
    assert_eq!(loaded.server_url.as_deref(), Some("http://tutor.lan:5000"));
    assert_eq!(loaded.modes.len(), 1);
}

#[test]
fn test_invalid_toml_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "server_url = [").expect("write should succeed");

    let err = Config::load_from_path(&config_path).expect_err("parse should fail");
    assert!(err.to_string().starts_with("Failed to parse config at"));
}

#[test]
fn test_builtin_options_apply_when_lists_are_empty() {
    let config = Config::default();
    assert_eq!(
        config.language_options(),
        vec!["Python", "Java", "C++", "Go", "C"]
    );
    assert_eq!(config.orchestration_options(), vec!["single", "multi-agent"]);
    let modes = config.mode_options();
    assert_eq!(modes.len(), 6);
    assert_eq!(modes[0].id, "adaptive");
    assert_eq!(modes[0].label, "Adaptive (Adjusts to user's needs)");
}

#[test]
fn test_custom_lists_replace_builtins() {
    let config: Config = toml::from_str(
        r#"
        languages = ["Rust"]
        orchestrations = ["single"]

        [[modes]]
        id = "practice"
        label = "Practice"
        "#,
    )
    .expect("config should parse");
    assert_eq!(config.language_options(), vec!["Rust"]);
    assert_eq!(config.orchestration_options(), vec!["single"]);
    assert_eq!(config.mode_options()[0].id, "practice");
}

#[test]
fn test_server_url_precedence() {
    let config = Config {
        server_url: Some("http://from-config:5000/".to_string()),
        ..Default::default()
    };
    assert_eq!(
        config.server_url(Some("http://from-flag:8080")),
        "http://from-flag:8080"
    );
    assert_eq!(config.server_url(None), "http://from-config:5000");
    assert_eq!(Config::default().server_url(None), "http://localhost:5000");
}

#[test]
fn test_request_timeout_defaults_and_ignores_zero() {
    assert_eq!(Config::default().request_timeout(), Duration::from_secs(120));
    let config = Config {
        request_timeout_secs: Some(0),
        ..Default::default()
    };
    assert_eq!(config.request_timeout(), Duration::from_secs(120));
}

#[test]
fn test_set_and_unset_keys() {
    let mut config = Config::default();
    config.set_key("server-url", "http://x:1").unwrap();
    config.set_key("default-mode", "debug").unwrap();
    config.set_key("request-timeout", "45s").unwrap();
    assert_eq!(config.server_url.as_deref(), Some("http://x:1"));
    assert_eq!(config.default_mode.as_deref(), Some("debug"));
    assert_eq!(config.request_timeout_secs, Some(45));

    assert!(config.set_key("request-timeout", "soon").is_err());
    assert!(config.set_key("default-language", "  ").is_err());
    assert!(config.set_key("theme", "dark").is_err());

    config.unset_key("default-mode").unwrap();
    assert_eq!(config.default_mode, None);
    assert!(config.unset_key("nope").is_err());
}
