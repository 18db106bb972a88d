//! Auth HTTP Routes
//!
//! `POST /login` and the bearer-token middleware guarding post routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use super::errors::{auth_error, json_body, ApiResult};
use super::server::AppState;
use crate::observability::{log_event, log_event_with_fields, Event};

/// Auth routes with shared state
pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

// ==================
// Handlers
// ==================

/// Login handler
async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let request = json_body(body)?;
    match state.auth.login(request.password.as_deref()) {
        Ok(token) => {
            log_event(Event::LoginSucceeded);
            Ok(Json(LoginResponse { token }))
        }
        Err(e) => {
            let reason = e.to_string();
            log_event_with_fields(Event::LoginRejected, &[("reason", reason.as_str())]);
            Err(auth_error(e))
        }
    }
}

/// Reject requests without a valid admin bearer token
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match state.auth.authorize(header) {
        Ok(_) => next.run(request).await,
        Err(e) => {
            let reason = e.to_string();
            log_event_with_fields(
                Event::AuthFailure,
                &[("path", request.uri().path()), ("reason", reason.as_str())],
            );
            auth_error(e).into_response()
        }
    }
}
