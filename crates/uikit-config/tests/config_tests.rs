// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration system.

use uikit_config::diagnostic::ConfigError;
use uikit_config::model::UikitConfig;
use uikit_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Every section and key deserializes.
#[test]
fn full_toml_deserializes() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 8080
catalog_path = "catalog.toml"

[registry]
url = "https://registry.example.com"
timeout_secs = 3

[install]
path = "src/ui"
extension = "jsx"
overwrite = false

[logging]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.catalog_path.as_deref(), Some("catalog.toml"));
    assert_eq!(config.registry.url, "https://registry.example.com");
    assert_eq!(config.registry.timeout_secs, 3);
    assert_eq!(config.install.path, "src/ui");
    assert_eq!(config.install.extension, "jsx");
    assert!(!config.install.overwrite);
    assert_eq!(config.logging.level, "debug");
}

/// An empty file yields the defaults.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert!(config.server.catalog_path.is_none());
    assert_eq!(config.registry.url, "http://localhost:3000");
    assert_eq!(config.registry.timeout_secs, 10);
    assert_eq!(config.install.path, "components");
    assert_eq!(config.install.extension, "tsx");
    assert!(config.install.overwrite);
    assert_eq!(config.logging.level, "info");
}

/// Dotted keys merged on top of a file win, which is how env overrides land.
#[test]
fn dotted_override_beats_file_value() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: UikitConfig = Figment::new()
        .merge(Serialized::defaults(UikitConfig::default()))
        .merge(Toml::string("[registry]\nurl = \"http://from-file:1\"\n"))
        .merge(("registry.url", "http://from-env:2"))
        .merge(("registry.timeout_secs", 7))
        .extract()
        .expect("override should merge");

    assert_eq!(config.registry.url, "http://from-env:2");
    assert_eq!(config.registry.timeout_secs, 7);
}

#[test]
fn unknown_key_is_rejected_with_suggestion() {
    let toml = r#"
[install]
extention = "tsx"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "extention"
                && suggestion.as_deref() == Some("extension")
                && valid_keys.contains("overwrite")
        })
    });
    assert!(found, "expected UnknownKey for `extention`, got: {errors:?}");
}

#[test]
fn unknown_section_is_rejected() {
    let err = load_config_from_str("[agent]\nname = \"x\"\n")
        .expect_err("unknown top-level section should be rejected");
    let msg = err.to_string();
    assert!(
        msg.contains("unknown field") || msg.contains("agent"),
        "got: {msg}"
    );
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[server]\nport = \"eighty\"\n")
        .expect_err("string port should be rejected");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))),
        "got: {errors:?}"
    );
}

#[test]
fn validation_runs_after_load() {
    let errors = load_and_validate_str("[registry]\ntimeout_secs = 0\n")
        .expect_err("zero timeout should fail validation");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("timeout_secs"))
    ));
}

#[test]
fn explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[install]\npath = \"app/components\"\n").unwrap();

    let config = load_and_validate_path(&path).expect("file should load");
    assert_eq!(config.install.path, "app/components");
}

#[test]
fn explicit_config_file_errors_point_at_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[server]\nprot = 1\n").unwrap();

    let errors = load_and_validate_path(&path).expect_err("typo should fail");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion, .. }
            if key == "prot" && suggestion.as_deref() == Some("port")
    )));
}

#[test]
fn diagnostics_render_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "extention".to_string(),
        suggestion: Some("extension".to_string()),
        valid_keys: "path, extension, overwrite".to_string(),
        span: None,
        src: None,
    };
    assert!(error.code().is_some());
    let help = error.help().expect("help text").to_string();
    assert!(help.contains("did you mean `extension`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render");
    assert!(buf.contains("extention"));
}
