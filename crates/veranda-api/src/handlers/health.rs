//! Health check endpoints for monitoring and diagnostics

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Stored collection sizes
    pub collections: CollectionCounts,
}

/// Sizes of the stored lead collections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionCounts {
    /// Brochure-download leads on file
    pub brochure_leads: usize,
    /// Site-visit leads on file
    pub contact_leads: usize,
    /// Status-check pings on file
    pub status_checks: usize,
}

/// Basic health check for load balancers and uptime monitors
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        collections: CollectionCounts {
            brochure_leads: state.repository.brochure_leads().len(),
            contact_leads: state.repository.visit_leads().len(),
            status_checks: state.repository.status_checks().len(),
        },
    })
}
