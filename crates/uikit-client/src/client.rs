// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the registry service.
//!
//! Every failure on this path, whether a refused connection, a timeout, a 404,
//! or a body that does not parse, comes back as `UikitError::Resolution`.
//! Nothing is retried.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;
use uikit_core::{validate_slug, ComponentList, ErrorBody, UikitError};

const LISTING_TARGET: &str = "component list";

/// Client for the registry's two read endpoints.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RegistryClient {
    /// Creates a client for the registry at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// `timeout` bounds each whole request, connect through body.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UikitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("uikit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UikitError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Registry base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a component's source.
    pub fn component_url(&self, slug: &str) -> String {
        format!("{}/api/components/{slug}", self.base_url)
    }

    /// URL of the catalog listing.
    pub fn list_url(&self) -> String {
        format!("{}/api/components/list", self.base_url)
    }

    /// Fetch the raw source of one component.
    pub async fn fetch_source(&self, slug: &str) -> Result<String, UikitError> {
        let target = format!("component `{slug}`");
        validate_slug(slug).map_err(|e| UikitError::Resolution {
            target: target.clone(),
            message: format!("invalid slug: {e}"),
            source: Some(Box::new(e)),
        })?;

        let url = self.component_url(slug);
        debug!(%url, "fetching component source");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(&target, e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.request_error(&target, e))?;
        debug!(%status, bytes = bytes.len(), "component response received");

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            return Err(UikitError::resolution(target, status_message(status, &body)));
        }

        // The payload is kept byte for byte; no BOM or charset handling.
        String::from_utf8(bytes.to_vec()).map_err(|e| UikitError::Resolution {
            target,
            message: format!("response body is not valid UTF-8: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Fetch the catalog listing.
    ///
    /// A listing whose `total` disagrees with its entries is treated as malformed.
    pub async fn list_components(&self) -> Result<ComponentList, UikitError> {
        let url = self.list_url();
        debug!(%url, "fetching component list");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(LISTING_TARGET, e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.request_error(LISTING_TARGET, e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            return Err(UikitError::resolution(
                LISTING_TARGET,
                status_message(status, &body),
            ));
        }

        let list: ComponentList =
            serde_json::from_slice(&bytes).map_err(|e| UikitError::Resolution {
                target: LISTING_TARGET.to_string(),
                message: format!("malformed response: {e}"),
                source: Some(Box::new(e)),
            })?;

        if list.total != list.components.len() {
            return Err(UikitError::resolution(
                LISTING_TARGET,
                format!(
                    "malformed response: total is {} but {} components were sent",
                    list.total,
                    list.components.len()
                ),
            ));
        }

        Ok(list)
    }

    fn request_error(&self, target: &str, e: reqwest::Error) -> UikitError {
        let message = if e.is_timeout() {
            format!(
                "registry at {} did not respond within {}s",
                self.base_url,
                self.timeout.as_secs_f32()
            )
        } else if e.is_connect() {
            format!("registry unreachable at {}: {e}", self.base_url)
        } else {
            format!("request failed: {e}")
        };
        UikitError::Resolution {
            target: target.to_string(),
            message,
            source: Some(Box::new(e)),
        }
    }
}

/// Message for a non-success response, preferring the registry's `error` field.
fn status_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => format!("{} (HTTP {})", err.error, status.as_u16()),
        Err(_) if status == StatusCode::NOT_FOUND => {
            format!("{} (HTTP 404)", uikit_core::NOT_FOUND_MESSAGE)
        }
        Err(_) => format!("registry returned HTTP {}", status.as_u16()),
    }
}
