//! Domain error types.

use thiserror::Error;

use crate::catalog::{ComposerId, WorkId};

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A selected composer identifier is absent from the cached composer list.
    #[error("composer {0} not found in the loaded composer list")]
    UnresolvedComposer(ComposerId),

    /// A selected work identifier is absent from the cached works of its composer.
    #[error("work {work_id} not found among the loaded works of composer {composer_id}")]
    UnresolvedWork {
        /// The committed composer whose works were searched.
        composer_id: ComposerId,
        /// The work identifier that could not be resolved.
        work_id: WorkId,
    },

    /// A candidate provider request failed.
    #[error("provider error: {0}")]
    Provider(String),

    /// Malformed input from outside the engine.
    #[error("validation error: {0}")]
    Validation(String),
}
