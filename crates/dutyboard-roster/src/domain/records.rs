//! Raw records of the duty catalog document.
//!
//! These mirror the JSON shape one-to-one and carry no validation. Stage
//! entries stay untyped on `DutyRecord` so that a single malformed stage can
//! be dropped without failing the duty that contains it.

use serde::{Deserialize, Serialize};

/// One duty entry of the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyRecord {
    /// Lookup key of the duty in the catalog.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Stage entries in display order, not yet interpreted.
    #[serde(default)]
    pub stages: Vec<serde_json::Value>,
}

/// One stage entry of a duty record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Variant tag: `"cutscene"` or `"fight"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Stage name.
    #[serde(default)]
    pub name: Option<String>,
    /// Raw color string.
    #[serde(default)]
    pub color: Option<String>,
    /// Cutscene length in seconds.
    #[serde(default)]
    pub duration: Option<f64>,
    /// Free-text note shown under a fight.
    #[serde(default)]
    pub subtitle: Option<String>,
}
