// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state.

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uikit_catalog::CatalogStore;
use uikit_core::UikitError;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct RegistryState {
    /// The catalog being served. Never mutated after startup.
    pub catalog: Arc<dyn CatalogStore>,
    /// Process start time for uptime reporting.
    pub start_time: std::time::Instant,
}

impl RegistryState {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            catalog,
            start_time: std::time::Instant::now(),
        }
    }
}

/// Server bind configuration (mirrors `[server]` in uikit-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind. `0` picks an ephemeral port.
    pub port: u16,
}

/// Build the registry router:
/// - GET /api/components/list
/// - GET /api/components/{slug}
/// - GET /health
///
/// Unmatched paths get a JSON 404. Every response carries a permissive
/// CORS policy.
pub fn build_router(state: RegistryState) -> Router {
    Router::new()
        .route("/api/components/list", get(handlers::list_components))
        .route("/api/components/{slug}", get(handlers::get_component))
        .route("/health", get(handlers::get_health))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind a TCP listener for the configured address.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, UikitError> {
    let addr = format!("{}:{}", config.host, config.port);
    TcpListener::bind(&addr)
        .await
        .map_err(|e| UikitError::Registry {
            message: format!("failed to bind registry to {addr}: {e}"),
            source: Some(Box::new(e)),
        })
}

/// Serve the registry on an already-bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: RegistryState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), UikitError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, components = state.catalog.len(), "registry listening");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| UikitError::Registry {
            message: format!("registry server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("registry stopped");
    Ok(())
}

/// Bind and serve in one call.
pub async fn start_server(
    config: &ServerConfig,
    state: RegistryState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), UikitError> {
    let listener = bind(config).await?;
    serve(listener, state, shutdown).await
}
