//! Integration tests for playing a round over HTTP.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use composerdle_test_support::{FailingCandidateProvider, FixedAnswerOracle, fixtures};

#[tokio::test]
async fn test_winning_guess_resets_with_empty_placeholder() {
    // Arrange
    let state = common::fixture_state().await;
    common::select(&state, fixtures::BACH.0).await;
    common::select(&state, fixtures::CELLO_SUITE.0).await;

    // Act
    let (status, json) =
        common::post_empty(common::build_test_app(&state), "/api/v1/round/submit").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["verdict"], "solved");
    assert_eq!(json["round"]["placeholder"], "");
    assert!(json["round"]["selection"].as_array().unwrap().is_empty());
    assert_eq!(json["round"]["options"][0]["label"], "Bach");
    assert!(json["round"]["committed_composer_id"].is_null());
}

#[tokio::test]
async fn test_partial_credit_locks_composer_then_wins() {
    // Arrange
    let state = common::fixture_state().await;
    common::select(&state, fixtures::BACH.0).await;
    common::select(&state, fixtures::GOLDBERG.0).await;

    // Act
    let (_, partial) =
        common::post_empty(common::build_test_app(&state), "/api/v1/round/submit").await;
    common::select(&state, fixtures::CELLO_SUITE.0).await;
    let (_, solved) =
        common::post_empty(common::build_test_app(&state), "/api/v1/round/submit").await;

    // Assert
    assert_eq!(partial["verdict"], "composer_correct");
    let selection = partial["round"]["selection"].as_array().unwrap();
    assert_eq!(selection.len(), 1);
    assert_eq!(selection[0]["label"], "Bach");
    assert_eq!(selection[0]["is_fixed"], true);
    assert_eq!(partial["round"]["committed_composer_id"], fixtures::BACH.0);
    assert_eq!(
        partial["round"]["options"][1]["label"],
        "(BWV 988) Goldberg Variations"
    );
    assert_eq!(solved["verdict"], "solved");
}

#[tokio::test]
async fn test_locked_composer_cannot_be_removed() {
    // Arrange
    let state = common::fixture_state().await;
    common::select(&state, fixtures::BACH.0).await;
    common::select(&state, fixtures::GOLDBERG.0).await;
    common::post_empty(common::build_test_app(&state), "/api/v1/round/submit").await;

    // Act
    let (status, json) = common::post_json(
        common::build_test_app(&state),
        "/api/v1/round/remove",
        &serde_json::json!({ "position": 0 }),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["applied"], false);
    assert_eq!(json["round"]["selection"][0]["is_fixed"], true);
}

#[tokio::test]
async fn test_wrong_composer_resets_to_composer_prompt() {
    // Arrange
    let state = common::fixture_state().await;
    common::select(&state, fixtures::MOZART.0).await;
    common::select(&state, fixtures::REQUIEM.0).await;

    // Act
    let (_, json) =
        common::post_empty(common::build_test_app(&state), "/api/v1/round/submit").await;

    // Assert
    assert_eq!(json["verdict"], "missed");
    assert_eq!(json["round"]["placeholder"], "Enter composer...");
    assert!(json["round"]["selection"].as_array().unwrap().is_empty());
    assert_eq!(json["round"]["options"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_third_selection_replaces_staged_work() {
    // Arrange
    let state = common::fixture_state().await;
    common::select(&state, fixtures::BACH.0).await;
    common::select(&state, fixtures::CELLO_SUITE.0).await;

    // Act
    let json = common::select(&state, fixtures::GOLDBERG.0).await;

    // Assert
    let selection = json["round"]["selection"].as_array().unwrap();
    assert_eq!(selection.len(), 2);
    assert_eq!(selection[0]["value"], fixtures::BACH.0);
    assert_eq!(selection[1]["value"], fixtures::GOLDBERG.0);
    assert_eq!(json["round"]["can_submit"], true);
}

#[tokio::test]
async fn test_guess_history_records_every_judged_submission() {
    // Arrange
    let state = common::fixture_state().await;
    common::select(&state, fixtures::MOZART.0).await;
    common::select(&state, fixtures::REQUIEM.0).await;
    common::post_empty(common::build_test_app(&state), "/api/v1/round/submit").await;
    common::select(&state, fixtures::BACH.0).await;
    common::select(&state, fixtures::CELLO_SUITE.0).await;
    common::post_empty(common::build_test_app(&state), "/api/v1/round/submit").await;

    // Act
    let (status, json) =
        common::get_json(common::build_test_app(&state), "/api/v1/round/guesses").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let guesses = json.as_array().unwrap();
    assert_eq!(guesses.len(), 2);
    assert_eq!(guesses[0]["verdict"], "missed");
    assert_eq!(guesses[0]["guess"]["work"]["title"], "Requiem");
    assert_eq!(guesses[1]["verdict"], "solved");
    assert_eq!(guesses[1]["composer_correct"], true);
}

#[tokio::test]
async fn test_unavailable_catalog_offers_nothing() {
    // Arrange
    let state = common::state_with(
        Arc::new(FailingCandidateProvider),
        Arc::new(FixedAnswerOracle(fixtures::answer())),
    )
    .await;

    // Act
    let (status, json) = common::get_json(common::build_test_app(&state), "/api/v1/round").await;
    let (select_status, error) = common::post_json(
        common::build_test_app(&state),
        "/api/v1/round/select",
        &serde_json::json!({ "value": fixtures::BACH.0 }),
    )
    .await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert!(json["options"].as_array().unwrap().is_empty());
    assert_eq!(json["placeholder"], "Enter composer...");
    assert_eq!(select_status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "validation_error");
}
