//! Shared test doubles and fixtures for the Composerdle guessing game.

mod clock;
pub mod fixtures;
mod oracle;
mod provider;
mod sink;

pub use clock::FixedClock;
pub use oracle::{FailingAnswerOracle, FixedAnswerOracle, PendingAnswerOracle};
pub use provider::{FailingCandidateProvider, StaticCandidateProvider};
pub use sink::RecordingGuessSink;
