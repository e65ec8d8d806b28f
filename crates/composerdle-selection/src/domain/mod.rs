//! Domain layer: option derivation, selection transitions and the engine.

pub mod engine;
pub mod events;
pub mod options;
pub mod selection;
