//! Async driver that connects the selection engine to its collaborators.
//!
//! The engine queues the data it needs; the driver drains that queue after
//! every user operation, awaits the candidate provider and feeds each
//! response back under the key it was requested with.

use std::sync::Arc;

use composerdle_core::catalog::CatalogPrefixes;
use composerdle_core::event::Clock;
use composerdle_core::provider::{AnswerOracle, CandidateProvider, GuessSink};
use tracing::instrument;

use crate::domain::engine::{Request, SelectionEngine, SubmitOutcome};
use crate::domain::events::RoundEvent;
use crate::domain::selection::SelectionChange;

/// One round of guessing, with the provider, sink and clock it runs against.
pub struct RoundDriver {
    engine: SelectionEngine,
    provider: Arc<dyn CandidateProvider>,
    sink: Arc<dyn GuessSink>,
    clock: Arc<dyn Clock>,
    history: Vec<RoundEvent>,
}

impl std::fmt::Debug for RoundDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundDriver")
            .field("engine", &self.engine)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl RoundDriver {
    /// Starts a round and waits for the composer list.
    pub async fn start(
        answer: Arc<dyn AnswerOracle>,
        prefixes: CatalogPrefixes,
        provider: Arc<dyn CandidateProvider>,
        sink: Arc<dyn GuessSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut driver = Self {
            engine: SelectionEngine::new(answer, prefixes),
            provider,
            sink,
            clock,
            history: Vec::new(),
        };
        driver.fulfil_requests().await;
        driver
    }

    /// The engine, for reading state.
    #[must_use]
    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    /// Every event the round has recorded, oldest first.
    #[must_use]
    pub fn history(&self) -> &[RoundEvent] {
        &self.history
    }

    /// Applies a user edit and loads whatever it made necessary.
    /// Returns `false` if the edit was rejected.
    #[instrument(skip(self), fields(round_id = %self.engine.id()))]
    pub async fn change(&mut self, change: SelectionChange) -> bool {
        let applied = self.engine.apply_change(change);
        self.fulfil_requests().await;
        applied
    }

    /// Submits the staged pair.
    #[instrument(skip(self), fields(round_id = %self.engine.id()))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.engine.submit(self.sink.as_ref(), self.clock.as_ref());
        self.history
            .extend(self.engine.uncommitted_events().iter().cloned());
        self.engine.clear_uncommitted_events();
        self.fulfil_requests().await;
        outcome
    }

    async fn fulfil_requests(&mut self) {
        loop {
            let requests = self.engine.take_requests();
            if requests.is_empty() {
                return;
            }
            for request in requests {
                match request {
                    Request::LoadComposers => {
                        let result = self.provider.list_composers().await;
                        self.engine.composers_loaded(result);
                    }
                    Request::LoadWorks(composer_id) => {
                        let result = self.provider.list_works_by_composer(composer_id).await;
                        self.engine.works_loaded(composer_id, result);
                    }
                }
            }
        }
    }
}
