//! Application services for the duty roster.

pub mod loader;
pub mod query_handlers;
