//! HTTP request handlers

pub mod health;
pub mod leads;
pub mod status;

use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use validator::ValidationErrors;

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Rejection for a payload that failed validation
pub(crate) fn validation_rejection(
    errors: &ValidationErrors,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: "Invalid submission".to_string(),
            code: "INVALID_SUBMISSION".to_string(),
            details: serde_json::to_value(errors).ok(),
        }),
    )
}

/// Rejection for a storage failure
pub(crate) fn storage_rejection(error: &veranda_core::Error) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(%error, "failed to persist lead data");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to store submission".to_string(),
            code: "STORAGE_ERROR".to_string(),
            details: None,
        }),
    )
}
