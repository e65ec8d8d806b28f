//! Test sink: records submitted guesses.

use std::sync::Mutex;

use composerdle_core::catalog::Guess;
use composerdle_core::provider::GuessSink;

/// A guess sink that keeps every guess it is handed.
#[derive(Debug, Default)]
pub struct RecordingGuessSink {
    guesses: Mutex<Vec<Guess>>,
}

impl RecordingGuessSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all guesses received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn guesses(&self) -> Vec<Guess> {
        self.guesses.lock().unwrap().clone()
    }
}

impl GuessSink for RecordingGuessSink {
    fn on_guess_submitted(&self, guess: &Guess) {
        self.guesses.lock().unwrap().push(guess.clone());
    }
}
