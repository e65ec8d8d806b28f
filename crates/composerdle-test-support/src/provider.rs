//! Test providers: mock `CandidateProvider` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use composerdle_core::catalog::{Composer, ComposerId, Work};
use composerdle_core::error::DomainError;
use composerdle_core::provider::CandidateProvider;

use crate::fixtures;

/// A provider that serves a fixed catalog and records every work-list
/// request it receives.
#[derive(Debug)]
pub struct StaticCandidateProvider {
    composers: Vec<Composer>,
    works: Vec<Work>,
    work_requests: Mutex<Vec<ComposerId>>,
}

impl StaticCandidateProvider {
    /// Create a provider serving `composers` and `works`. Works are
    /// returned for a composer in the order given here.
    #[must_use]
    pub fn new(composers: Vec<Composer>, works: Vec<Work>) -> Self {
        Self {
            composers,
            works,
            work_requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider serving the Bach/Mozart fixture catalog.
    #[must_use]
    pub fn fixture() -> Self {
        let works = fixtures::composers()
            .iter()
            .flat_map(|composer| fixtures::works(composer.id))
            .collect();
        Self::new(fixtures::composers(), works)
    }

    /// Returns the composer ids of every `list_works_by_composer` call, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn work_requests(&self) -> Vec<ComposerId> {
        self.work_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CandidateProvider for StaticCandidateProvider {
    async fn list_composers(&self) -> Result<Vec<Composer>, DomainError> {
        Ok(self.composers.clone())
    }

    async fn list_works_by_composer(
        &self,
        composer_id: ComposerId,
    ) -> Result<Vec<Work>, DomainError> {
        self.work_requests.lock().unwrap().push(composer_id);
        Ok(self
            .works
            .iter()
            .filter(|work| work.composer_id == composer_id)
            .cloned()
            .collect())
    }
}

/// A provider whose every request fails. Useful for testing empty option
/// lists after provider errors.
#[derive(Debug)]
pub struct FailingCandidateProvider;

#[async_trait]
impl CandidateProvider for FailingCandidateProvider {
    async fn list_composers(&self) -> Result<Vec<Composer>, DomainError> {
        Err(DomainError::Provider("connection refused".into()))
    }

    async fn list_works_by_composer(
        &self,
        _composer_id: ComposerId,
    ) -> Result<Vec<Work>, DomainError> {
        Err(DomainError::Provider("connection refused".into()))
    }
}
