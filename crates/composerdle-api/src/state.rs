//! Shared application state.

use std::sync::Arc;

use composerdle_core::catalog::Guess;
use composerdle_core::provider::GuessSink;
use composerdle_selection::application::driver::RoundDriver;
use tokio::sync::Mutex;
use tracing::info;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The round being played. Requests are serialised through the lock.
    pub round: Arc<Mutex<RoundDriver>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(round: RoundDriver) -> Self {
        Self {
            round: Arc::new(Mutex::new(round)),
        }
    }
}

/// Guess sink that writes every submitted guess to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingGuessSink;

impl GuessSink for LoggingGuessSink {
    fn on_guess_submitted(&self, guess: &Guess) {
        info!(
            composer = %guess.composer.full_name,
            work = %guess.work.title,
            "guess submitted"
        );
    }
}
