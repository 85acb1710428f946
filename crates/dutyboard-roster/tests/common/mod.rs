//! Shared test helpers for roster integration tests.
#![allow(dead_code)]

use dutyboard_roster::application::loader::CatalogSource;
use dutyboard_roster::domain::catalog::DutyCatalog;
use dutyboard_test_support::{catalog_document, init_tracing};

/// Loads a catalog from in-memory duty entries through the same source path
/// an application would configure.
pub fn load_inline(duties: Vec<serde_json::Value>) -> DutyCatalog {
    init_tracing();
    CatalogSource::Inline {
        json: catalog_document(duties),
    }
    .load()
    .unwrap()
}
