// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component installer.
//!
//! Resolves a slug through the registry, then writes the payload to
//! `<destination>/<slug>.<extension>`. The write goes through a temporary
//! file in the destination directory followed by a rename, so the target is
//! either the complete payload or untouched.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};
use uikit_core::UikitError;

use crate::client::RegistryClient;

/// Where and how to install a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// Destination directory, as the operator gave it (relative to the
    /// working directory or absolute).
    pub destination: PathBuf,
    /// File extension without the dot.
    pub extension: String,
    /// Replace an existing file of the same name.
    pub overwrite: bool,
}

impl InstallOptions {
    /// Options for `destination` with the default `tsx` extension and overwrite on.
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            extension: "tsx".to_string(),
            overwrite: true,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// File name a slug is installed under.
    pub fn file_name(&self, slug: &str) -> String {
        format!("{slug}.{}", self.extension)
    }
}

/// Outcome of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallResult {
    pub slug: String,
    /// Path of the written file.
    pub destination_path: PathBuf,
    /// Ready-to-paste import statement.
    pub import_snippet: String,
}

/// Resolve `slug` through the registry and write it under `options.destination`.
///
/// Nothing touches the filesystem unless the fetch succeeds.
pub async fn install(
    client: &RegistryClient,
    slug: &str,
    options: &InstallOptions,
) -> Result<InstallResult, UikitError> {
    let payload = client.fetch_source(slug).await?;

    let dir = options.destination.clone();
    let file_name = options.file_name(slug);
    let overwrite = options.overwrite;
    let destination_path = tokio::task::spawn_blocking(move || {
        write_component(&dir, &file_name, payload.as_bytes(), overwrite)
    })
    .await
    .map_err(|e| UikitError::Install {
        path: options.destination.join(options.file_name(slug)),
        message: format!("write task failed: {e}"),
        source: Some(Box::new(e)),
    })??;

    info!(slug, path = %destination_path.display(), "component installed");

    Ok(InstallResult {
        slug: slug.to_string(),
        destination_path,
        import_snippet: import_snippet(slug, &options.destination),
    })
}

/// Write `payload` to `dir/file_name`, creating `dir` and its parents first.
///
/// With `overwrite` off, an existing entry at the target path is an error and
/// is left as it was. Other files in `dir` are never touched.
pub fn write_component(
    dir: &Path,
    file_name: &str,
    payload: &[u8],
    overwrite: bool,
) -> Result<PathBuf, UikitError> {
    let target = dir.join(file_name);

    std::fs::create_dir_all(dir)
        .map_err(|e| UikitError::install_io(&target, "cannot create destination directory", e))?;

    if !overwrite && target.exists() {
        return Err(UikitError::Install {
            path: target,
            message: "file already exists (overwrite disabled)".to_string(),
            source: None,
        });
    }
    if target.is_dir() {
        return Err(UikitError::Install {
            path: target,
            message: "destination is a directory".to_string(),
            source: None,
        });
    }

    let mut tmp = tempfile::Builder::new()
        .prefix(".uikit-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| UikitError::install_io(&target, "cannot create temporary file", e))?;
    tmp.write_all(payload)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| UikitError::install_io(&target, "write failed", e))?;

    let persisted = if overwrite {
        tmp.persist(&target)
    } else {
        tmp.persist_noclobber(&target)
    };
    // On failure the PersistError owns the temp file and removes it when dropped.
    persisted.map_err(|e| UikitError::install_io(&target, "cannot move file into place", e.error))?;

    debug!(path = %target.display(), bytes = payload.len(), "component written");
    Ok(target)
}

/// Exported symbol name a component is expected to have: the slug with its
/// first character upper-cased.
pub fn export_name(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Import statement for an installed component, e.g.
/// `import { Button } from './components/button';`.
///
/// Relative destinations are written with a leading `./`, as module
/// resolvers expect.
pub fn import_snippet(slug: &str, destination: &Path) -> String {
    format!(
        "import {{ {} }} from '{}';",
        export_name(slug),
        module_path(destination, slug)
    )
}

fn module_path(destination: &Path, slug: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut absolute = false;
    for component in destination.components() {
        match component {
            Component::Prefix(p) => parts.push(p.as_os_str().to_string_lossy().into_owned()),
            Component::RootDir => absolute = true,
            Component::CurDir => {}
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(s) => parts.push(s.to_string_lossy().into_owned()),
        }
    }
    parts.push(slug.to_string());

    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}
