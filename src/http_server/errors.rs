//! HTTP error responses.
//!
//! Every failure is rendered as `{"error": ..., "code": ...}`. Storage
//! failures carry a fixed per-operation message; the underlying detail
//! is logged, never returned.

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde::Serialize;

use crate::auth::AuthError;
use crate::observability::{log_event_with_fields, Event};
use crate::posts::PostError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Handler result
pub type ApiResult<T> = Result<T, ApiError>;

/// Build an error response from a status code and message
pub fn error_response(code: u16, message: impl Into<String>) -> ApiError {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: status.as_u16(),
        }),
    )
}

/// Map an auth error to a response
pub fn auth_error(err: AuthError) -> ApiError {
    error_response(err.status_code(), err.to_string())
}

/// Unwrap a JSON request body, reporting any extraction failure
/// (bad syntax, wrong field types, missing content type) as a 400
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value).map_err(|rejection| {
        error_response(400, format!("Invalid request body: {}", rejection.body_text()))
    })
}

/// Map a store error to a response; storage detail is replaced by
/// `failure_message`
pub fn post_error(err: PostError, operation: &str, failure_message: &str) -> ApiError {
    match err {
        PostError::Storage(detail) => {
            log_event_with_fields(
                Event::StorageFailure,
                &[("operation", operation), ("detail", detail.as_str())],
            );
            error_response(500, failure_message)
        }
        other => error_response(other.status_code(), other.to_string()),
    }
}
