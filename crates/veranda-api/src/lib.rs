//! Lead-storage API server for the Veranda lead toolkit
//!
//! Serves the two lead collections the admin dashboard fetches, accepts
//! new submissions from the public site's forms, and records uptime
//! pings. All data lives in a single JSON file behind [`veranda_store`].

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]

pub mod handlers;
pub mod notifier;
pub mod routes;
pub mod state;

pub use notifier::{LeadNotifier, LogNotifier};
pub use state::AppState;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use veranda_core::{Config, Result};

/// Build the API router with all routes and middleware
///
/// # Errors
///
/// Returns an error if the leads data file cannot be opened.
pub fn build_router(config: Config) -> Result<Router> {
    let cors = cors_layer(&config);
    let state = Arc::new(AppState::new(config)?);

    Ok(routes::build_router().layer(cors).with_state(state))
}

/// Build a CORS layer from the configured allowed origins
///
/// The development default of `"*"` allows any origin so the site and
/// dashboard can run off localhost ports.
fn cors_layer(config: &Config) -> CorsLayer {
    let wildcard = config.server.cors_origins.iter().any(|o| o == "*");

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter(|o| *o != "*")
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if wildcard || origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}
