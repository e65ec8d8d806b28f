//! Contracts for the collaborators the selection engine depends on.

use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::{Composer, ComposerId, Guess, PuzzleAnswer, Work};
use crate::error::DomainError;

/// State of an asynchronous dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum RequestStatus<T> {
    /// Requested but not yet answered.
    Pending,
    /// The request failed with the given message.
    Failed(String),
    /// The request succeeded.
    Ready(T),
}

impl<T> RequestStatus<T> {
    /// Returns the value when the request has succeeded.
    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending | Self::Failed(_) => None,
        }
    }

    /// Whether the request has failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl<T> From<Result<T, DomainError>> for RequestStatus<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Source of the candidate composers and their works.
#[async_trait]
pub trait CandidateProvider: Send + Sync {
    /// Lists every composer that may be guessed, in no particular order.
    async fn list_composers(&self) -> Result<Vec<Composer>, DomainError>;

    /// Lists the works of `composer_id`, in provider order.
    async fn list_works_by_composer(
        &self,
        composer_id: ComposerId,
    ) -> Result<Vec<Work>, DomainError>;
}

/// Source of the current round's answer. Consulted, never triggered.
pub trait AnswerOracle: Send + Sync {
    /// Returns the answer, or its loading state.
    fn current_answer(&self) -> RequestStatus<PuzzleAnswer>;
}

/// Observer notified of every completed two-part guess.
pub trait GuessSink: Send + Sync {
    /// Called once per valid submission, whether or not the guess is correct.
    fn on_guess_submitted(&self, guess: &Guess);
}
