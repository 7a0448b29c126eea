//! API route definitions

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;

use crate::{handlers, state::AppState};

/// Build the lead-storage API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api", get(api_info))
        .route("/api/", get(api_info))
        // Brochure-download leads
        .route(
            "/api/brochure-lead",
            post(handlers::leads::submit_brochure_lead),
        )
        .route(
            "/api/brochure-leads",
            get(handlers::leads::list_brochure_leads),
        )
        // Site-visit leads
        .route("/api/contact-lead", post(handlers::leads::submit_visit_lead))
        .route("/api/contact-leads", get(handlers::leads::list_visit_leads))
        // Uptime pings
        .route(
            "/api/status",
            post(handlers::status::record_status_check).get(handlers::status::list_status_checks),
        )
        .layer(CompressionLayer::new())
}

/// Build health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Combine all route groups
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new().merge(api_routes()).merge(health_routes())
}

/// Service identification endpoint
async fn api_info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "veranda-lead-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/brochure-lead": "Store a brochure-download lead",
            "GET /api/brochure-leads": "List brochure-download leads",
            "POST /api/contact-lead": "Store a site-visit lead",
            "GET /api/contact-leads": "List site-visit leads",
            "POST /api/status": "Record a status-check ping",
            "GET /api/status": "List status-check pings",
            "GET /health": "Health check"
        }
    }))
}
