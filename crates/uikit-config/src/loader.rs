// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./uikit.toml` > `~/.config/uikit/uikit.toml` > `/etc/uikit/uikit.toml`,
//! with environment variable overrides via the `UIKIT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::UikitConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/uikit/uikit.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "uikit.toml";

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("uikit").join("uikit.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/uikit/uikit.toml`
/// 3. `~/.config/uikit/uikit.toml`
/// 4. `./uikit.toml`
/// 5. `UIKIT_*` environment variables
pub fn load_config() -> Result<UikitConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<UikitConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UikitConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file, with env var overrides.
///
/// Unlike [`load_config`], a missing file is an error here: the operator
/// named it on the command line.
pub fn load_config_from_path(path: &Path) -> Result<UikitConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(UikitConfig::default()))
        .merge(Toml::file_exact(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used by [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(UikitConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config path.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `UIKIT_REGISTRY_TIMEOUT_SECS` maps to `registry.timeout_secs`.
pub(crate) fn env_key_to_path(key: &str) -> String {
    for section in ["server", "registry", "install", "logging"] {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|r| r.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}

/// Environment provider for `UIKIT_*` variables, using explicit section mapping
/// rather than `Env::split("_")`, which would break keys like `timeout_secs`.
fn env_provider() -> Env {
    Env::prefixed("UIKIT_").map(|key| env_key_to_path(key.as_str()).into())
}
