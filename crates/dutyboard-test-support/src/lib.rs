//! Shared test fixtures and utilities for the Dutyboard duty roster.

mod fixtures;
mod logging;

pub use fixtures::{catalog_document, cutscene_value, duty_value, fight_value};
pub use logging::init_tracing;
