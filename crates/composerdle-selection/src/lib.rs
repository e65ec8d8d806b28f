//! Composerdle: Selection bounded context.
//!
//! Responsible for the two-stage guess input: deriving the selectable
//! composers or works, applying selection changes, resolving a completed
//! selection into a guess and judging it against the daily answer.

pub mod application;
pub mod domain;
