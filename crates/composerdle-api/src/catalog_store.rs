//! JSON catalog file: the candidate provider and answer oracle the server
//! plays against.
//!
//! ```json
//! {
//!   "composers": [{ "id": 1, "full_name": "Bach" }],
//!   "works": [{ "id": 10, "composer_id": 1, "opus": "1007", "opus_number": 1, "title": "Cello Suite" }],
//!   "catalog_prefixes": { "1": "BWV " },
//!   "answer": { "composer_id": 1, "work_id": 10 }
//! }
//! ```

use async_trait::async_trait;
use composerdle_core::catalog::{
    CatalogPrefixes, Composer, ComposerId, PuzzleAnswer, Work, WorkId,
};
use composerdle_core::error::DomainError;
use composerdle_core::provider::{AnswerOracle, CandidateProvider, RequestStatus};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file is not valid catalog JSON.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The answer names a work that is not in the catalog.
    #[error("answer work {work_id} of composer {composer_id} is not in the catalog")]
    UnknownAnswer {
        /// Composer named by the answer.
        composer_id: ComposerId,
        /// Work named by the answer.
        work_id: WorkId,
    },
}

#[derive(Debug, Deserialize)]
struct AnswerRef {
    composer_id: ComposerId,
    work_id: WorkId,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    composers: Vec<Composer>,
    works: Vec<Work>,
    #[serde(default)]
    catalog_prefixes: CatalogPrefixes,
    #[serde(default)]
    answer: Option<AnswerRef>,
}

/// An in-memory catalog loaded from JSON.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    composers: Vec<Composer>,
    works: Vec<Work>,
    prefixes: CatalogPrefixes,
    answer: Option<PuzzleAnswer>,
}

impl JsonCatalog {
    /// Parses a catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and
    /// `CatalogError::UnknownAnswer` if the answer is not a catalog work.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let answer = file
            .answer
            .map(|answer| {
                file.works
                    .iter()
                    .find(|w| w.composer_id == answer.composer_id && w.id == answer.work_id)
                    .map(|work| PuzzleAnswer {
                        composer_id: answer.composer_id,
                        work: work.clone(),
                    })
                    .ok_or(CatalogError::UnknownAnswer {
                        composer_id: answer.composer_id,
                        work_id: answer.work_id,
                    })
            })
            .transpose()?;

        Ok(Self {
            composers: file.composers,
            works: file.works,
            prefixes: file.catalog_prefixes,
            answer,
        })
    }

    /// The composer-specific catalog prefixes.
    #[must_use]
    pub fn prefixes(&self) -> &CatalogPrefixes {
        &self.prefixes
    }
}

#[async_trait]
impl CandidateProvider for JsonCatalog {
    async fn list_composers(&self) -> Result<Vec<Composer>, DomainError> {
        Ok(self.composers.clone())
    }

    async fn list_works_by_composer(
        &self,
        composer_id: ComposerId,
    ) -> Result<Vec<Work>, DomainError> {
        Ok(self
            .works
            .iter()
            .filter(|work| work.composer_id == composer_id)
            .cloned()
            .collect())
    }
}

impl AnswerOracle for JsonCatalog {
    /// A catalog without an answer has not published today's puzzle yet.
    fn current_answer(&self) -> RequestStatus<PuzzleAnswer> {
        self.answer
            .clone()
            .map_or(RequestStatus::Pending, RequestStatus::Ready)
    }
}
