//! Composerdle Core: shared domain types and collaborator contracts.
//!
//! This crate defines the catalog records, the puzzle answer and the traits
//! the selection engine consumes (candidate provider, answer oracle, guess
//! sink). It contains no infrastructure code.

pub mod catalog;
pub mod error;
pub mod event;
pub mod provider;
