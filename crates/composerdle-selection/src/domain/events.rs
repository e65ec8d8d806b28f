//! Domain events recorded by a round.

use composerdle_core::catalog::{ComposerId, Guess, GuessVerdict};
use composerdle_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

/// Emitted for every judged submission, correct or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessSubmitted {
    /// The resolved guess.
    pub guess: Guess,
    /// How it compared with the answer.
    pub verdict: GuessVerdict,
}

/// Emitted when a correct composer is locked in after a wrong work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposerLocked {
    /// The locked composer.
    pub composer_id: ComposerId,
}

/// Emitted when the answer is guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSolved {
    /// The winning guess.
    pub guess: Guess,
}

/// Event type identifier for [`GuessSubmitted`].
pub const GUESS_SUBMITTED_EVENT_TYPE: &str = "round.guess_submitted";

/// Event type identifier for [`ComposerLocked`].
pub const COMPOSER_LOCKED_EVENT_TYPE: &str = "round.composer_locked";

/// Event type identifier for [`RoundSolved`].
pub const ROUND_SOLVED_EVENT_TYPE: &str = "round.round_solved";

/// Event type identifier for a reset after a wrong composer.
pub const ROUND_RESET_EVENT_TYPE: &str = "round.round_reset";

/// Event payload variants for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEventKind {
    /// A guess was submitted and judged.
    GuessSubmitted(GuessSubmitted),
    /// The composer was right; it is now fixed.
    ComposerLocked(ComposerLocked),
    /// The round is over.
    RoundSolved(RoundSolved),
    /// The composer was wrong; the selection started over.
    RoundReset,
}

impl RoundEventKind {
    /// Type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::GuessSubmitted(_) => GUESS_SUBMITTED_EVENT_TYPE,
            Self::ComposerLocked(_) => COMPOSER_LOCKED_EVENT_TYPE,
            Self::RoundSolved(_) => ROUND_SOLVED_EVENT_TYPE,
            Self::RoundReset => ROUND_RESET_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: RoundEventKind,
}

impl DomainEvent for RoundEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("RoundEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
