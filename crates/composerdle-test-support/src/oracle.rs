//! Test oracles: `AnswerOracle` implementations for each loading state.

use composerdle_core::catalog::PuzzleAnswer;
use composerdle_core::provider::{AnswerOracle, RequestStatus};

/// An oracle whose answer is always ready.
#[derive(Debug, Clone)]
pub struct FixedAnswerOracle(pub PuzzleAnswer);

impl AnswerOracle for FixedAnswerOracle {
    fn current_answer(&self) -> RequestStatus<PuzzleAnswer> {
        RequestStatus::Ready(self.0.clone())
    }
}

/// An oracle whose answer never arrives.
#[derive(Debug, Clone, Copy)]
pub struct PendingAnswerOracle;

impl AnswerOracle for PendingAnswerOracle {
    fn current_answer(&self) -> RequestStatus<PuzzleAnswer> {
        RequestStatus::Pending
    }
}

/// An oracle whose answer request has failed.
#[derive(Debug, Clone, Copy)]
pub struct FailingAnswerOracle;

impl AnswerOracle for FailingAnswerOracle {
    fn current_answer(&self) -> RequestStatus<PuzzleAnswer> {
        RequestStatus::Failed("puzzle unavailable".to_owned())
    }
}
