//! Routes for playing the round.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use composerdle_core::catalog::{Guess, GuessVerdict};
use composerdle_core::error::DomainError;
use composerdle_selection::application::query_handlers::{
    GuessView, RoundView, get_round_view, list_guesses,
};
use composerdle_selection::domain::engine::SubmitOutcome;
use composerdle_selection::domain::selection::SelectionChange;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /round/select.
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    /// Value of one of the currently offered options.
    pub value: i64,
}

/// Request body for POST /round/remove.
#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    /// Zero-based position of the entry to remove.
    pub position: usize,
}

/// Response body returned after a selection change.
#[derive(Debug, Serialize)]
pub struct ChangeResponse {
    /// Whether the change was accepted.
    pub applied: bool,
    /// The round after the change.
    pub round: RoundView,
}

/// Response body returned after a submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// `judged`, or `ignored` when there was nothing to judge.
    pub outcome: &'static str,
    /// The judged guess.
    pub guess: Option<Guess>,
    /// Its verdict.
    pub verdict: Option<GuessVerdict>,
    /// The round after the submission.
    pub round: RoundView,
}

/// GET /round
async fn get_round(State(state): State<AppState>) -> Json<RoundView> {
    let round = state.round.lock().await;
    Json(get_round_view(round.engine()))
}

/// GET /round/guesses
async fn get_guesses(State(state): State<AppState>) -> Json<Vec<GuessView>> {
    let round = state.round.lock().await;
    Json(list_guesses(round.history()))
}

/// POST /round/select
#[instrument(skip(state, request), fields(value = request.value))]
async fn select(
    State(state): State<AppState>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<ChangeResponse>, ApiError> {
    let mut round = state.round.lock().await;
    let option = round
        .engine()
        .options()
        .iter()
        .find(|option| option.value == request.value)
        .cloned()
        .ok_or_else(|| {
            DomainError::Validation(format!("option {} is not on offer", request.value))
        })?;

    let applied = round.change(SelectionChange::Add(option)).await;

    Ok(Json(ChangeResponse {
        applied,
        round: get_round_view(round.engine()),
    }))
}

/// POST /round/remove
#[instrument(skip(state, request), fields(position = request.position))]
async fn remove(
    State(state): State<AppState>,
    Json(request): Json<RemoveRequest>,
) -> Json<ChangeResponse> {
    let mut round = state.round.lock().await;
    let applied = round
        .change(SelectionChange::Remove {
            position: request.position,
        })
        .await;

    Json(ChangeResponse {
        applied,
        round: get_round_view(round.engine()),
    })
}

/// POST /round/pop
#[instrument(skip(state))]
async fn pop(State(state): State<AppState>) -> Json<ChangeResponse> {
    let mut round = state.round.lock().await;
    let applied = round.change(SelectionChange::Pop).await;

    Json(ChangeResponse {
        applied,
        round: get_round_view(round.engine()),
    })
}

/// POST /round/submit
#[instrument(skip(state))]
async fn submit(State(state): State<AppState>) -> Json<SubmitResponse> {
    let mut round = state.round.lock().await;
    let outcome = round.submit().await;

    let (outcome, guess, verdict) = match outcome {
        SubmitOutcome::Judged { guess, verdict } => {
            info!(?verdict, "submission judged");
            ("judged", Some(guess), Some(verdict))
        }
        SubmitOutcome::NotReady | SubmitOutcome::Unresolved(_) => ("ignored", None, None),
    };

    Json(SubmitResponse {
        outcome,
        guess,
        verdict,
        round: get_round_view(round.engine()),
    })
}

/// Returns the router for the round.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/round", get(get_round))
        .route("/round/guesses", get(get_guesses))
        .route("/round/select", post(select))
        .route("/round/remove", post(remove))
        .route("/round/pop", post(pop))
        .route("/round/submit", post(submit))
}
