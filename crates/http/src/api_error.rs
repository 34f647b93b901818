//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status code.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use passage_archive_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: the form is incomplete or malformed.
    BadRequest(String),
    /// 409 Conflict: the supplement passage is already archived.
    Conflict(String),
    /// 500 Internal Server Error: the append failed. The store's message is returned as-is.
    WriteFailed(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::WriteFailed(msg) => {
                tracing::error!(error = %msg, "record append failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(ref e) if e.is_duplicate() => Self::Conflict(err.to_string()),
            ServiceError::Validation(e) => Self::BadRequest(e.to_string()),
            ServiceError::Write(e) => Self::WriteFailed(e.to_string()),
            ServiceError::Read(_) => Self::Internal(err.into()),
        }
    }
}
