//! Query handlers for the Selection context.
//!
//! Read-only view DTOs built from the engine and the round history.

use composerdle_core::catalog::{Guess, GuessVerdict};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::engine::SelectionEngine;
use crate::domain::events::{RoundEvent, RoundEventKind};
use crate::domain::options::ChoiceOption;

/// Read-only view of the guess input.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    /// The round identifier.
    pub round_id: Uuid,
    /// Options currently offered.
    pub options: Vec<ChoiceOption>,
    /// Selected entries, composer first.
    pub selection: Vec<ChoiceOption>,
    /// Prompt text; empty once a pair is staged or the round is solved.
    pub placeholder: String,
    /// Whether a submission would be judged.
    pub can_submit: bool,
    /// Composer whose works are on offer, if any.
    pub committed_composer_id: Option<i64>,
}

/// One submitted guess as a guess card shows it.
#[derive(Debug, Clone, Serialize)]
pub struct GuessView {
    /// Position in the round, starting at 1.
    pub sequence_number: i64,
    /// The guess.
    pub guess: Guess,
    /// How it compared with the answer.
    pub verdict: GuessVerdict,
    /// Whether the composer half was right.
    pub composer_correct: bool,
}

/// Builds the view of `engine`'s current state.
#[must_use]
pub fn get_round_view(engine: &SelectionEngine) -> RoundView {
    RoundView {
        round_id: engine.id(),
        options: engine.options().to_vec(),
        selection: engine.selection().entries().to_vec(),
        placeholder: engine.placeholder().text().to_owned(),
        can_submit: engine.selection().is_complete(),
        committed_composer_id: engine.committed_composer().map(|id| id.0),
    }
}

/// Lists the submitted guesses in `history`, oldest first.
#[must_use]
pub fn list_guesses(history: &[RoundEvent]) -> Vec<GuessView> {
    history
        .iter()
        .filter_map(|event| match &event.kind {
            RoundEventKind::GuessSubmitted(submitted) => Some(GuessView {
                sequence_number: event.metadata.sequence_number,
                guess: submitted.guess.clone(),
                verdict: submitted.verdict,
                composer_correct: submitted.verdict.composer_correct(),
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use composerdle_core::event::EventMetadata;
    use composerdle_test_support::{FixedAnswerOracle, FixedClock, fixtures};

    use super::*;
    use crate::domain::events::{GuessSubmitted, RoundSolved};
    use crate::domain::selection::SelectionChange;

    #[test]
    fn test_get_round_view_reflects_engine_state() {
        // Arrange
        let mut engine = SelectionEngine::new(
            Arc::new(FixedAnswerOracle(fixtures::answer())),
            fixtures::prefixes(),
        );
        engine.composers_loaded(Ok(fixtures::composers()));
        engine.apply_change(SelectionChange::Add(ChoiceOption::new(
            fixtures::BACH.0,
            "Bach",
        )));

        // Act
        let view = get_round_view(&engine);

        // Assert
        assert_eq!(view.round_id, engine.id());
        assert_eq!(view.selection.len(), 1);
        assert_eq!(view.placeholder, "Select a work...");
        assert!(!view.can_submit);
        assert_eq!(view.committed_composer_id, Some(fixtures::BACH.0));
    }

    #[test]
    fn test_list_guesses_skips_non_guess_events() {
        // Arrange
        let round_id = Uuid::new_v4();
        let clock = FixedClock::standard();
        let history = vec![
            RoundEvent {
                metadata: EventMetadata::new("round.guess_submitted", round_id, 1, &clock),
                kind: RoundEventKind::GuessSubmitted(GuessSubmitted {
                    guess: fixtures::winning_guess(),
                    verdict: GuessVerdict::Solved,
                }),
            },
            RoundEvent {
                metadata: EventMetadata::new("round.round_solved", round_id, 2, &clock),
                kind: RoundEventKind::RoundSolved(RoundSolved {
                    guess: fixtures::winning_guess(),
                }),
            },
        ];

        // Act
        let guesses = list_guesses(&history);

        // Assert
        assert_eq!(guesses.len(), 1);
        assert_eq!(guesses[0].sequence_number, 1);
        assert_eq!(guesses[0].verdict, GuessVerdict::Solved);
        assert!(guesses[0].composer_correct);
    }
}
