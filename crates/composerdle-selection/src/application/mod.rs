//! Application layer: the async round driver and read-only views.

pub mod driver;
pub mod query_handlers;
