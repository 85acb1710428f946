//! Roster error types.

use thiserror::Error;

/// Top-level error type for catalog loading and lookup.
///
/// Individual stage records never produce an error; they are dropped during
/// deserialization. Only document-level failures surface here.
#[derive(Debug, Error)]
pub enum DutyError {
    /// No duty is registered under the given slug.
    #[error("duty not found: {0}")]
    DutyNotFound(String),

    /// The catalog document is not a valid array of duty records.
    #[error("parse error: {0}")]
    Parse(String),

    /// The catalog source could not be read.
    #[error("io error: {0}")]
    Io(String),
}
