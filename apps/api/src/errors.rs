use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Body shape shared by every JSON endpoint.
///
/// Failures are reported in the body only; the HTTP status stays 200.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Success { result: T },
    Error { message: String },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid action parameter. Expected '{expected}'.")]
    InvalidAction { expected: &'static str },

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidAction { .. } | AppError::Validation(_) => {
                tracing::warn!("Rejected request: {self}");
            }
            AppError::MalformedBody(_) => {
                tracing::error!("Request failed: {self}");
            }
        }

        Json(ApiResponse::<()>::Error {
            message: self.to_string(),
        })
        .into_response()
    }
}
