//! Integration tests for the health endpoint.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_returns_200_with_status_ok() {
    let state = common::fixture_state().await;
    let app = common::build_test_app(&state);

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_reports_the_round_being_served() {
    let state = common::fixture_state().await;

    let (_, health) = common::get_json(common::build_test_app(&state), "/health").await;
    let (_, round) = common::get_json(common::build_test_app(&state), "/api/v1/round").await;

    assert_eq!(health["round_id"], round["round_id"]);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let state = common::fixture_state().await;
    let app = common::build_test_app(&state);

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/api/v1/nonexistent")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
