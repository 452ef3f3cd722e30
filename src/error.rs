// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients. Upstream failures degrade to a
/// user-facing message instead of crashing the handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    /// An upstream provider is down or timing out.
    #[error("{0}")]
    Unavailable(&'static str),

    /// An upstream provider answered with an error status.
    #[error("upstream returned {0}")]
    Upstream(StatusCode),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, (*msg).to_string()),
            AppError::Upstream(code) => {
                // 4xx pass through; upstream 5xx becomes a bad gateway here.
                let status = if code.is_client_error() {
                    *code
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (status, format!("Upstream service error ({})", code.as_u16()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
