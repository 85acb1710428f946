//! Duties — named, ordered collections of stages.

use super::records::DutyRecord;
use super::stage::Stage;

/// A multi-stage encounter.
///
/// Stage order is display order. A duty is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Duty {
    name: String,
    stages: Vec<Stage>,
}

impl Duty {
    /// Creates a duty from already-built stages.
    #[must_use]
    pub fn new(name: impl Into<String>, stages: Vec<Stage>) -> Self {
        Self {
            name: name.into(),
            stages,
        }
    }

    /// Builds a duty from a catalog record.
    ///
    /// Stage entries that are not recognized stages are skipped; the rest
    /// keep their relative order. A duty with no surviving stages is valid.
    #[must_use]
    pub fn from_record(record: DutyRecord) -> Self {
        let stages = record.stages.iter().filter_map(Stage::from_value).collect();
        Self {
            name: record.name,
            stages,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stages in display order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }
}
