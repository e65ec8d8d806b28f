//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use composerdle_core::provider::{AnswerOracle, CandidateProvider};
use composerdle_selection::application::driver::RoundDriver;
use composerdle_test_support::{
    FixedAnswerOracle, FixedClock, RecordingGuessSink, StaticCandidateProvider, fixtures,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use composerdle_api::build_router;
use composerdle_api::state::AppState;

/// Application state over the Bach/Mozart fixture catalog, answer Bach's
/// cello suite.
pub async fn fixture_state() -> AppState {
    state_with(
        Arc::new(StaticCandidateProvider::fixture()),
        Arc::new(FixedAnswerOracle(fixtures::answer())),
    )
    .await
}

/// Application state over a custom provider and answer.
pub async fn state_with(
    provider: Arc<dyn CandidateProvider>,
    answer: Arc<dyn AnswerOracle>,
) -> AppState {
    let driver = RoundDriver::start(
        answer,
        fixtures::prefixes(),
        provider,
        Arc::new(RecordingGuessSink::new()),
        Arc::new(FixedClock::standard()),
    )
    .await;
    AppState::new(driver)
}

/// Build the full app router over `state`. Uses the same router as `main.rs`.
pub fn build_test_app(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request without a body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Select the offered option with `value`.
pub async fn select(state: &AppState, value: i64) -> serde_json::Value {
    let (status, json) = post_json(
        build_test_app(state),
        "/api/v1/round/select",
        &serde_json::json!({ "value": value }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "select {value} failed: {json}");
    json
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
