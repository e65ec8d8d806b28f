//! The selection engine: the state of one round's guess input.

use std::fmt;
use std::sync::Arc;

use composerdle_core::catalog::{
    CatalogPrefixes, Composer, ComposerId, Guess, GuessVerdict, Work, WorkId,
};
use composerdle_core::error::DomainError;
use composerdle_core::event::{Clock, EventMetadata};
use composerdle_core::provider::{AnswerOracle, GuessSink, RequestStatus};
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::events::{ComposerLocked, GuessSubmitted, RoundEvent, RoundEventKind, RoundSolved};
use super::options::{ChoiceOption, OptionStage, derive_options};
use super::selection::{Selection, SelectionChange, Transition, apply_selection_change};

/// Prompt shown in the empty part of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// Asking for a composer.
    ComposerPrompt,
    /// Asking for a work by the committed composer.
    WorkPrompt,
    /// No prompt: a pair is staged, or the round is finished.
    Empty,
}

impl Placeholder {
    /// Display text.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::ComposerPrompt => "Enter composer...",
            Self::WorkPrompt => "Select a work...",
            Self::Empty => "",
        }
    }
}

/// A data request the engine needs fulfilled by the candidate provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Load every composer.
    LoadComposers,
    /// Load the works of one composer.
    LoadWorks(ComposerId),
}

/// Result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fewer than two entries were selected; nothing happened.
    NotReady,
    /// The selection could not be resolved against the loaded data;
    /// nothing happened.
    Unresolved(DomainError),
    /// The guess was handed to the sink and judged.
    Judged {
        /// The resolved guess.
        guess: Guess,
        /// How it compared with the answer.
        verdict: GuessVerdict,
    },
}

/// Works loaded for one composer, keyed so late responses can be recognised.
#[derive(Debug, Clone)]
struct WorkList {
    composer_id: ComposerId,
    status: RequestStatus<Vec<Work>>,
}

/// Owns the options, selection and placeholder of a round and applies every
/// transition to them.
///
/// The engine never awaits. Data it needs is queued as [`Request`]s for a
/// driver to fulfil through [`SelectionEngine::composers_loaded`] and
/// [`SelectionEngine::works_loaded`].
pub struct SelectionEngine {
    id: Uuid,
    answer: Arc<dyn AnswerOracle>,
    prefixes: CatalogPrefixes,
    composers: RequestStatus<Vec<Composer>>,
    committed_composer: Option<ComposerId>,
    works: Option<WorkList>,
    options: Vec<ChoiceOption>,
    selection: Selection,
    placeholder: Placeholder,
    requests: Vec<Request>,
    recorded_events: i64,
    uncommitted_events: Vec<RoundEvent>,
}

impl fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("id", &self.id)
            .field("committed_composer", &self.committed_composer)
            .field("selection", &self.selection)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl SelectionEngine {
    /// Starts a round. The composer list is requested immediately.
    #[must_use]
    pub fn new(answer: Arc<dyn AnswerOracle>, prefixes: CatalogPrefixes) -> Self {
        Self {
            id: Uuid::new_v4(),
            answer,
            prefixes,
            composers: RequestStatus::Pending,
            committed_composer: None,
            works: None,
            options: Vec::new(),
            selection: Selection::empty(),
            placeholder: Placeholder::ComposerPrompt,
            requests: vec![Request::LoadComposers],
            recorded_events: 0,
            uncommitted_events: Vec::new(),
        }
    }

    /// Round identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Options currently offered.
    #[must_use]
    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current prompt.
    #[must_use]
    pub fn placeholder(&self) -> Placeholder {
        self.placeholder
    }

    /// The composer whose works are the active stage, if any.
    #[must_use]
    pub fn committed_composer(&self) -> Option<ComposerId> {
        self.committed_composer
    }

    /// Drains the queued data requests.
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.requests)
    }

    /// Events recorded since the last [`Self::clear_uncommitted_events`].
    #[must_use]
    pub fn uncommitted_events(&self) -> &[RoundEvent] {
        &self.uncommitted_events
    }

    /// Clears recorded events after they have been handed on.
    pub fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }

    /// Stores the composer-list response. Options are regenerated when the
    /// composer stage is active.
    pub fn composers_loaded(&mut self, result: Result<Vec<Composer>, DomainError>) {
        if let Err(err) = &result {
            warn!(round_id = %self.id, error = %err, "composer list request failed");
        }
        self.composers = result.into();
        if self.committed_composer.is_none() {
            self.regenerate_options();
        }
    }

    /// Stores a work-list response for `composer_id`.
    ///
    /// Returns `false` when the response is stale, that is when it does not
    /// answer the latest work-list request; it is then discarded.
    pub fn works_loaded(
        &mut self,
        composer_id: ComposerId,
        result: Result<Vec<Work>, DomainError>,
    ) -> bool {
        let Some(list) = self
            .works
            .as_mut()
            .filter(|list| list.composer_id == composer_id)
        else {
            debug!(round_id = %self.id, %composer_id, "discarding stale work list");
            return false;
        };

        if let Err(err) = &result {
            warn!(round_id = %self.id, %composer_id, error = %err, "work list request failed");
        }
        list.status = result.into();

        if self.committed_composer == Some(composer_id) {
            self.regenerate_options();
        }
        true
    }

    /// Applies a user edit. Returns `false` if the edit was rejected.
    pub fn apply_change(&mut self, change: SelectionChange) -> bool {
        match apply_selection_change(&self.selection, change) {
            Transition::Rejected => return false,
            Transition::Emptied => self.reset_to_initial(),
            Transition::ComposerChosen(selection) => {
                let composer_id = selection.composer().map(|entry| ComposerId(entry.value));
                self.selection = selection;
                self.placeholder = Placeholder::WorkPrompt;
                if let Some(composer_id) = composer_id {
                    self.commit_composer(composer_id);
                }
            }
            Transition::PairChosen(selection) => {
                self.selection = selection;
                self.placeholder = Placeholder::Empty;
            }
        }
        true
    }

    /// Submits the staged pair.
    ///
    /// The guess goes to `sink` whatever its verdict. A solved round resets
    /// with an empty prompt, a correct composer is locked in, anything else
    /// resets to the composer prompt.
    pub fn submit(&mut self, sink: &dyn GuessSink, clock: &dyn Clock) -> SubmitOutcome {
        if !self.selection.is_complete() {
            return SubmitOutcome::NotReady;
        }

        let guess = match self.resolve_guess() {
            Ok(guess) => guess,
            Err(err) => {
                error!(round_id = %self.id, error = %err, "could not resolve selection");
                return SubmitOutcome::Unresolved(err);
            }
        };

        sink.on_guess_submitted(&guess);

        let answer = self.answer.current_answer();
        let verdict = GuessVerdict::judge(answer.ready(), &guess);
        info!(
            round_id = %self.id,
            composer_id = %guess.composer.id,
            work_id = %guess.work.id,
            ?verdict,
            "guess judged"
        );

        self.record(
            RoundEventKind::GuessSubmitted(GuessSubmitted {
                guess: guess.clone(),
                verdict,
            }),
            clock,
        );

        match verdict {
            GuessVerdict::Solved => {
                self.reset_to_initial();
                self.placeholder = Placeholder::Empty;
                self.record(
                    RoundEventKind::RoundSolved(RoundSolved {
                        guess: guess.clone(),
                    }),
                    clock,
                );
            }
            GuessVerdict::ComposerCorrect => {
                let composer_id = guess.composer.id;
                if let Some(locked) = self.selection.lock_composer() {
                    self.selection = locked;
                }
                self.commit_composer(composer_id);
                self.record(
                    RoundEventKind::ComposerLocked(ComposerLocked { composer_id }),
                    clock,
                );
            }
            GuessVerdict::Missed => {
                self.reset_to_initial();
                self.record(RoundEventKind::RoundReset, clock);
            }
        }

        SubmitOutcome::Judged { guess, verdict }
    }

    fn resolve_guess(&self) -> Result<Guess, DomainError> {
        let (Some(composer_entry), Some(work_entry)) =
            (self.selection.composer(), self.selection.work())
        else {
            return Err(DomainError::Validation(
                "selection must hold a composer and a work".to_owned(),
            ));
        };
        let composer_id = ComposerId(composer_entry.value);
        let work_id = WorkId(work_entry.value);

        let composer = self
            .composers
            .ready()
            .and_then(|composers| composers.iter().find(|c| c.id == composer_id))
            .ok_or(DomainError::UnresolvedComposer(composer_id))?;

        let work = self
            .works
            .as_ref()
            .filter(|list| list.composer_id == composer_id)
            .and_then(|list| list.status.ready())
            .and_then(|works| works.iter().find(|w| w.id == work_id))
            .ok_or(DomainError::UnresolvedWork {
                composer_id,
                work_id,
            })?;

        Ok(Guess {
            composer: composer.clone(),
            work: work.clone(),
        })
    }

    /// Makes `composer_id` the active stage. A cached work list for the same
    /// composer is reused unless its request failed.
    fn commit_composer(&mut self, composer_id: ComposerId) {
        self.committed_composer = Some(composer_id);

        let reusable = self
            .works
            .as_ref()
            .is_some_and(|list| list.composer_id == composer_id && !list.status.is_failed());
        if !reusable {
            self.works = Some(WorkList {
                composer_id,
                status: RequestStatus::Pending,
            });
            self.requests.push(Request::LoadWorks(composer_id));
        }

        let works_ready = self
            .works
            .as_ref()
            .is_some_and(|list| list.status.ready().is_some());
        if works_ready {
            self.regenerate_options();
        }
    }

    fn reset_to_initial(&mut self) {
        if self.composers.ready().is_none() {
            warn!(round_id = %self.id, "composer list unavailable; options left empty");
        }
        self.committed_composer = None;
        self.selection = Selection::empty();
        self.placeholder = Placeholder::ComposerPrompt;
        self.regenerate_options();
    }

    fn regenerate_options(&mut self) {
        let stage = match self.committed_composer {
            None => OptionStage::Composer {
                composers: &self.composers,
            },
            Some(composer_id) => OptionStage::Work {
                composer_id,
                works: self
                    .works
                    .as_ref()
                    .filter(|list| list.composer_id == composer_id)
                    .map(|list| &list.status),
            },
        };
        self.options = derive_options(stage, &self.prefixes);
    }

    fn record(&mut self, kind: RoundEventKind, clock: &dyn Clock) {
        self.recorded_events += 1;
        let metadata = EventMetadata::new(kind.event_type(), self.id, self.recorded_events, clock);
        self.uncommitted_events.push(RoundEvent { metadata, kind });
    }
}
