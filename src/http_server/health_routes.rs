//! Health HTTP Route
//!
//! Unauthenticated liveness check that also reports whether the post
//! directory is readable.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use super::server::AppState;
use crate::posts::DocumentBackend;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: String,
    /// Whether login is possible (a password hash is configured)
    pub login_configured: bool,
}

/// Health check route at `/health`
pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let store_ok = state.store.backend().names().is_ok();
    let status = if store_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if store_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if store_ok { "readable" } else { "unreadable" }.to_string(),
        login_configured: state.auth.is_configured(),
    };

    (status, Json(response))
}
