// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde attributes cannot express: non-empty strings,
//! URL schemes, positive timeouts, known log levels.

use crate::diagnostic::ConfigError;
use crate::model::UikitConfig;

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &UikitConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if let Some(path) = &config.server.catalog_path
        && path.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "server.catalog_path must not be empty when set".to_string(),
        });
    }

    let url = config.registry.url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("registry.url `{url}` must start with http:// or https://"),
        });
    }

    if config.registry.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "registry.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.install.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "install.path must not be empty".to_string(),
        });
    }

    let ext = config.install.extension.as_str();
    if ext.is_empty() || ext.contains(['.', '/', '\\']) {
        errors.push(ConfigError::Validation {
            message: format!(
                "install.extension `{ext}` must be a bare extension such as `tsx`"
            ),
        });
    }

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "logging.level `{}` must be one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
