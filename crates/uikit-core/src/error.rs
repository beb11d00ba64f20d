// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the uikit registry and installer.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed source error carried by the variants that wrap a lower-level failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The primary error type used across the catalog, registry service, and clients.
#[derive(Debug, Error)]
pub enum UikitError {
    /// Runtime configuration errors that surface outside of config loading
    /// (unusable HTTP client settings, bad header values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A component or the component listing could not be resolved: not found,
    /// registry unreachable, timed out, malformed response, or invalid slug.
    #[error("failed to resolve {target}: {message}")]
    Resolution {
        target: String,
        message: String,
        source: Option<BoxError>,
    },

    /// A resolved payload could not be persisted to disk.
    #[error("failed to install {}: {message}", path.display())]
    Install {
        path: PathBuf,
        message: String,
        source: Option<BoxError>,
    },

    /// Invalid catalog construction (duplicate slug, bad manifest).
    #[error("catalog error: {0}")]
    Catalog(String),

    /// The registry service could not bind or stopped serving.
    #[error("registry error: {message}")]
    Registry {
        message: String,
        source: Option<BoxError>,
    },
}

impl UikitError {
    /// Shorthand for a `Resolution` error without an underlying source.
    pub fn resolution(target: impl Into<String>, message: impl Into<String>) -> Self {
        UikitError::Resolution {
            target: target.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for an `Install` error wrapping an I/O failure.
    pub fn install_io(path: impl Into<PathBuf>, message: impl Into<String>, err: std::io::Error) -> Self {
        UikitError::Install {
            path: path.into(),
            message: format!("{}: {err}", message.into()),
            source: Some(Box::new(err)),
        }
    }

    /// Returns true for resolution failures.
    pub fn is_resolution(&self) -> bool {
        matches!(self, UikitError::Resolution { .. })
    }

    /// Returns true for install failures.
    pub fn is_install(&self) -> bool {
        matches!(self, UikitError::Install { .. })
    }
}
