// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `uikit serve` command implementation.
//!
//! Builds the catalog (from a manifest when one is configured, the built-in
//! set otherwise) and serves it until SIGINT or SIGTERM.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};
use uikit_catalog::{builtin_catalog, load_catalog_manifest, Catalog, CatalogStore};
use uikit_config::UikitConfig;
use uikit_core::UikitError;
use uikit_registry::{RegistryService, ServerConfig};

/// Runs the `uikit serve` command. Flags override the `[server]` section.
pub async fn run_serve(
    config: UikitConfig,
    host: Option<String>,
    port: Option<u16>,
    catalog: Option<PathBuf>,
) -> Result<(), UikitError> {
    let catalog_path = catalog.or_else(|| config.server.catalog_path.map(PathBuf::from));
    let catalog = load_catalog(catalog_path.as_deref())?;

    let server = ServerConfig {
        host: host.unwrap_or(config.server.host),
        port: port.unwrap_or(config.server.port),
    };
    info!(
        host = %server.host,
        port = server.port,
        components = catalog.len(),
        "starting registry"
    );

    RegistryService::new(server, Arc::new(catalog))
        .run(shutdown_signal())
        .await?;

    info!("registry stopped");
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, UikitError> {
    match path {
        Some(path) => load_catalog_manifest(path),
        None => {
            debug!("no catalog manifest configured, using built-in catalog");
            Ok(builtin_catalog())
        }
    }
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("received SIGINT (Ctrl+C), shutting down"),
                    _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                ctrl_c.await;
                info!("received SIGINT (Ctrl+C), shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await;
        info!("received Ctrl+C, shutting down");
    }
}
