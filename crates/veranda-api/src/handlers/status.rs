//! Status-check ping endpoints
//!
//! External uptime monitors POST a ping here; the recent pings are
//! readable back for the admin dashboard's diagnostics view.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use validator::Validate;
use veranda_core::types::{StatusCheck, StatusCheckSubmission};

use crate::handlers::{storage_rejection, validation_rejection, ErrorResponse};
use crate::state::AppState;

/// Record a status-check ping
///
/// # Errors
///
/// * `UNPROCESSABLE_ENTITY` - Ping failed field validation
/// * `INTERNAL_SERVER_ERROR` - Ping could not be persisted
pub async fn record_status_check(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<StatusCheckSubmission>,
) -> Result<(StatusCode, Json<StatusCheck>), (StatusCode, Json<ErrorResponse>)> {
    submission.validate().map_err(|e| validation_rejection(&e))?;

    let record = state
        .repository
        .insert_status_check(submission)
        .map_err(|e| storage_rejection(&e))?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// List recorded status-check pings
pub async fn list_status_checks(State(state): State<Arc<AppState>>) -> Json<Vec<StatusCheck>> {
    Json(state.repository.status_checks())
}
