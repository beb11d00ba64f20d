// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `uikit list` command implementation.
//!
//! If `--json` is passed, prints the registry listing as JSON for scripting.
//! If `--plain` is passed or stdout is not a TTY, disables colors.

use std::io::IsTerminal;
use std::time::Duration;

use uikit_client::{render_listing, RegistryClient};
use uikit_config::UikitConfig;
use uikit_core::UikitError;

pub async fn run_list(config: &UikitConfig, json: bool, plain: bool) -> Result<(), UikitError> {
    let client = RegistryClient::new(
        &config.registry.url,
        Duration::from_secs(config.registry.timeout_secs),
    )?;
    let list = client.list_components().await?;

    let output = if json {
        serde_json::to_string_pretty(&list).map_err(|e| UikitError::Resolution {
            target: "component list".to_string(),
            message: format!("cannot encode listing: {e}"),
            source: Some(Box::new(e)),
        })?
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        render_listing(&list, use_color)
    };
    println!("{output}");
    Ok(())
}
