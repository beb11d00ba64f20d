// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key fails
//! at startup instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level uikit configuration.
///
/// Every section is optional and falls back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UikitConfig {
    /// Registry service (`uikit serve`) settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Where clients find the registry.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Installer (`uikit add`) settings.
    #[serde(default)]
    pub install: InstallConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to a TOML catalog manifest. `None` serves the built-in catalog.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Client-side registry location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Base URL of the registry service, without the `/api` suffix.
    #[serde(default = "default_registry_url")]
    pub url: String,

    /// Timeout for a single registry call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_registry_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Installer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Destination directory for installed components.
    #[serde(default = "default_install_path")]
    pub path: String,

    /// File extension for installed components, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Replace an existing file of the same name.
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            path: default_install_path(),
            extension: default_extension(),
            overwrite: default_overwrite(),
        }
    }
}

fn default_install_path() -> String {
    "components".to_string()
}

fn default_extension() -> String {
    "tsx".to_string()
}

fn default_overwrite() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level for `uikit serve` (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
