//! Integration tests for the lead-storage API endpoints

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use veranda_core::Config;

fn app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let mut config = Config::default();
    config.storage.data_dir = dir.path().to_path_buf();

    let router = veranda_api::build_router(config).expect("router");
    (router, dir)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_health_reports_collection_counts() {
    let (app, _dir) = app();

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["collections"]["brochure_leads"], 0);
}

#[tokio::test]
async fn test_submit_brochure_lead_assigns_id_and_timestamp() {
    let (app, _dir) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/brochure-lead",
            json!({"name": "Asha Patel", "phone": "9876543210", "preference": "2 BHK"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Asha Patel");
    assert_eq!(body["preference"], "2 BHK");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_submitted_leads_appear_in_listing() {
    let (app, _dir) = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/brochure-lead",
            json!({"name": "Ravi Kumar", "phone": "9123456780"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(Request::get("/api/brochure-leads").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let leads = body.as_array().expect("array body");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["name"], "Ravi Kumar");
    // Preference was not sent and must be absent, not null
    assert!(leads[0].get("preference").is_none());
}

#[tokio::test]
async fn test_invalid_submission_is_rejected() {
    let (app, _dir) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/brochure-lead",
            json!({"name": "", "phone": "9876543210"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_SUBMISSION");
}

#[tokio::test]
async fn test_visit_lead_round_trip_uses_camel_case() {
    let (app, _dir) = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/contact-lead",
            json!({
                "name": "Meera Shah",
                "phone": "9988776655",
                "email": "meera@example.com",
                "preferredDate": "2024-01-10",
                "preferredTime": "Morning",
                "preferredContact": "whatsapp"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(Request::get("/api/contact-leads").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    let leads = body.as_array().expect("array body");
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0]["preferredDate"], "2024-01-10");
    assert_eq!(leads[0]["preferredContact"], "whatsapp");
}

#[tokio::test]
async fn test_status_check_ping_round_trip() {
    let (app, _dir) = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/status",
            json!({"client_name": "uptime-monitor"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(Request::get("/api/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    let pings = body.as_array().expect("array body");
    assert_eq!(pings.len(), 1);
    assert_eq!(pings[0]["client_name"], "uptime-monitor");
}

#[tokio::test]
async fn test_leads_survive_router_rebuild() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = Config::default();
    config.storage.data_dir = dir.path().to_path_buf();

    let app = veranda_api::build_router(config.clone()).expect("router");
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/brochure-lead",
            json!({"name": "Asha Patel", "phone": "9876543210"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // A fresh router over the same data dir sees the stored lead.
    let app = veranda_api::build_router(config).expect("router");
    let response = app
        .oneshot(Request::get("/api/brochure-leads").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = body_json(response).await;
    assert_eq!(body.as_array().expect("array body").len(), 1);
}
