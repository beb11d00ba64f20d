// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only HTTP registry service for the component catalog.
//!
//! The service owns a catalog injected at construction and exposes it through
//! two GET routes: enumerate all components, and fetch one component's source
//! by slug. There are no write routes and no authentication; anyone who can
//! reach the port can read everything.

pub mod handlers;
pub mod server;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uikit_catalog::CatalogStore;
use uikit_core::UikitError;

pub use server::{build_router, RegistryState, ServerConfig};

/// A registry service bound to a catalog and an address.
pub struct RegistryService {
    config: ServerConfig,
    state: RegistryState,
}

impl RegistryService {
    /// Create a service for `catalog`. Nothing is bound until it runs.
    pub fn new(config: ServerConfig, catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            config,
            state: RegistryState::new(catalog),
        }
    }

    /// The axum router, for embedding or in-process testing.
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Serve until `shutdown` resolves.
    pub async fn run(
        self,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), UikitError> {
        server::start_server(&self.config, self.state, shutdown).await
    }

    /// Bind now and serve on a background task.
    ///
    /// Binding happens before this returns, so the reported address is
    /// already accepting connections.
    pub async fn spawn(self) -> Result<RunningRegistry, UikitError> {
        let listener = server::bind(&self.config).await?;
        let addr = listener.local_addr().map_err(|e| UikitError::Registry {
            message: format!("failed to read bound address: {e}"),
            source: Some(Box::new(e)),
        })?;

        let token = CancellationToken::new();
        let shutdown = token.clone();
        let handle = tokio::spawn(async move {
            server::serve(listener, self.state, shutdown.cancelled_owned()).await
        });

        Ok(RunningRegistry {
            addr,
            token,
            handle,
        })
    }
}

/// Handle to a registry serving on a background task.
pub struct RunningRegistry {
    addr: SocketAddr,
    token: CancellationToken,
    handle: JoinHandle<Result<(), UikitError>>,
}

impl RunningRegistry {
    /// Address the registry is listening on.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL clients should use, e.g. `http://127.0.0.1:41234`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for the server task to finish.
    pub async fn shutdown(self) -> Result<(), UikitError> {
        self.token.cancel();
        self.handle.await.map_err(|e| UikitError::Registry {
            message: format!("registry task failed: {e}"),
            source: Some(Box::new(e)),
        })?
    }
}
