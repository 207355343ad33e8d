// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::services::gemini::GeminiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Quota exceeded. Please try again later.")]
    QuotaExceeded,
    #[error("Request blocked or failed. Reason: {0}.")]
    Blocked(String),
    #[error("An unexpected error occurred: {0}")]
    Upstream(String),
}

impl From<GeminiError> for AppError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::RateLimited => AppError::QuotaExceeded,
            GeminiError::Blocked { reason } => AppError::Blocked(reason),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            AppError::Blocked(_) | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(%self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
