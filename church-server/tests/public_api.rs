//! Health and events integration tests

mod common;

use common::*;
use http::StatusCode;

#[tokio::test]
async fn health_reports_ok() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(!body["timestamp"].as_str().expect("timestamp").is_empty());
    assert!(!body["version"].as_str().expect("version").is_empty());
}

#[tokio::test]
async fn events_listing_is_public_and_fixed() {
    let app = spawn_app().await;

    let (status, body) = get(&app, "/api/events", None).await;

    assert_eq!(status, StatusCode::OK);
    let events = body.as_array().expect("array body");
    assert_eq!(events.len(), 10);
    assert_eq!(events[0]["title"], "Sunday Mass");
    assert_eq!(events[0]["date"], "2026-02-22");
    assert_eq!(events[9]["title"], "Baptism Class");
}
