//! Lead submission and retrieval endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use tracing::info;
use validator::Validate;
use veranda_core::types::{BrochureLeadSubmission, VisitLeadSubmission};
use veranda_core::{BrochureLead, VisitLead};

use crate::handlers::{storage_rejection, validation_rejection, ErrorResponse};
use crate::state::AppState;

/// Store a brochure-download lead
///
/// The server assigns the id and timestamp; clients send only the form
/// fields. The stored record is echoed back.
///
/// # Errors
///
/// * `UNPROCESSABLE_ENTITY` - Submission failed field validation
/// * `INTERNAL_SERVER_ERROR` - Lead could not be persisted
pub async fn submit_brochure_lead(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<BrochureLeadSubmission>,
) -> Result<(StatusCode, Json<BrochureLead>), (StatusCode, Json<ErrorResponse>)> {
    submission.validate().map_err(|e| validation_rejection(&e))?;

    let lead = state
        .repository
        .insert_brochure_lead(submission)
        .map_err(|e| storage_rejection(&e))?;

    state.notifier.brochure_lead_stored(&lead);

    Ok((StatusCode::CREATED, Json(lead)))
}

/// List all brochure-download leads
pub async fn list_brochure_leads(State(state): State<Arc<AppState>>) -> Json<Vec<BrochureLead>> {
    let leads = state.repository.brochure_leads();
    info!(count = leads.len(), "listing brochure leads");
    Json(leads)
}

/// Store a site-visit contact lead
///
/// # Errors
///
/// * `UNPROCESSABLE_ENTITY` - Submission failed field validation
/// * `INTERNAL_SERVER_ERROR` - Lead could not be persisted
pub async fn submit_visit_lead(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<VisitLeadSubmission>,
) -> Result<(StatusCode, Json<VisitLead>), (StatusCode, Json<ErrorResponse>)> {
    submission.validate().map_err(|e| validation_rejection(&e))?;

    let lead = state
        .repository
        .insert_visit_lead(submission)
        .map_err(|e| storage_rejection(&e))?;

    state.notifier.visit_lead_stored(&lead);

    Ok((StatusCode::CREATED, Json(lead)))
}

/// List all site-visit contact leads
pub async fn list_visit_leads(State(state): State<Arc<AppState>>) -> Json<Vec<VisitLead>> {
    let leads = state.repository.visit_leads();
    info!(count = leads.len(), "listing site visit leads");
    Json(leads)
}
