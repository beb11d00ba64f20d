// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `uikit add` command implementation.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use uikit_client::{install, InstallOptions, RegistryClient};
use uikit_config::UikitConfig;
use uikit_core::UikitError;

/// Installs `slug` into `path` (or `install.path`) and prints where it went.
pub async fn run_add(
    config: &UikitConfig,
    slug: &str,
    path: Option<PathBuf>,
    ext: Option<String>,
    overwrite: bool,
) -> Result<(), UikitError> {
    let options = install_options(config, path, ext, overwrite)?;
    let client = RegistryClient::new(
        &config.registry.url,
        Duration::from_secs(config.registry.timeout_secs),
    )?;

    let result = install(&client, slug, &options).await?;

    if std::io::stdout().is_terminal() {
        use colored::Colorize;
        println!(
            "{} Installed {} to {}",
            "✓".green(),
            result.slug.bold(),
            result.destination_path.display()
        );
    } else {
        println!("Installed {} to {}", result.slug, result.destination_path.display());
    }
    println!();
    println!("Import it with:");
    println!("  {}", result.import_snippet);
    Ok(())
}

fn install_options(
    config: &UikitConfig,
    path: Option<PathBuf>,
    ext: Option<String>,
    overwrite: bool,
) -> Result<InstallOptions, UikitError> {
    let extension = ext.unwrap_or_else(|| config.install.extension.clone());
    let extension = extension.trim_start_matches('.').to_string();
    if extension.is_empty() || extension.contains(['.', '/', '\\']) {
        return Err(UikitError::Config(format!(
            "invalid file extension `{extension}`"
        )));
    }

    let destination = path.unwrap_or_else(|| PathBuf::from(&config.install.path));
    Ok(InstallOptions::new(destination)
        .with_extension(extension)
        .with_overwrite(overwrite))
}
