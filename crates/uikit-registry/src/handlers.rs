// SPDX-FileCopyrightText: 2026 Uikit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the registry API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uikit_core::{ComponentList, ErrorBody, NOT_FOUND_MESSAGE};

use crate::server::RegistryState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of components in the catalog.
    pub components: usize,
    pub uptime_secs: u64,
}

/// GET /api/components/list
///
/// Metadata for every component in catalog order, plus the count.
pub async fn list_components(State(state): State<RegistryState>) -> Json<ComponentList> {
    Json(ComponentList::new(state.catalog.list()))
}

/// GET /api/components/{slug}
///
/// The raw component source as `text/plain`, or 404 with a JSON error body.
pub async fn get_component(
    State(state): State<RegistryState>,
    Path(slug): Path<String>,
) -> Response {
    match state.catalog.get(&slug) {
        Some(record) => {
            tracing::debug!(slug = %slug, bytes = record.source.len(), "serving component");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain")],
                record.source,
            )
                .into_response()
        }
        None => {
            tracing::debug!(slug = %slug, "component not found");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Fallback for paths no route matches.
///
/// Misses under `/api/components` (an empty slug, extra segments) get the
/// same JSON body as an unknown slug.
pub async fn not_found(uri: Uri) -> Response {
    let message = if uri.path().starts_with("/api/components") {
        NOT_FOUND_MESSAGE
    } else {
        "Not found"
    };
    tracing::debug!(path = %uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// GET /health
pub async fn get_health(State(state): State<RegistryState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        components: state.catalog.len(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
