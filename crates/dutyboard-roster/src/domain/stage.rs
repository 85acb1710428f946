//! Stages — the phases a duty is made of.

use dutyboard_core::display::StageDisplay;
use dutyboard_core::time::format_duration;
use serde::{Deserialize, Serialize};

use super::records::StageRecord;

/// Tag value of a cutscene stage record.
pub const CUTSCENE_TYPE: &str = "cutscene";
/// Tag value of a fight stage record.
pub const FIGHT_TYPE: &str = "fight";

/// Discriminant of a `Stage`, as it appears in the catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// A timed, non-interactive scene.
    Cutscene,
    /// A combat phase.
    Fight,
}

impl StageKind {
    /// Parses a record tag. Only the exact lowercase tags are recognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            CUTSCENE_TYPE => Some(Self::Cutscene),
            FIGHT_TYPE => Some(Self::Fight),
            _ => None,
        }
    }

    fn default_name(self) -> &'static str {
        match self {
            Self::Cutscene => "Cutscene",
            Self::Fight => "Fight",
        }
    }
}

fn name_or_default(name: Option<String>, kind: StageKind) -> String {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => kind.default_name().to_owned(),
    }
}

/// A timed, non-interactive stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutscene {
    name: String,
    duration: f64,
    color: Option<String>,
}

impl Cutscene {
    /// Creates a cutscene. An empty name falls back to `"Cutscene"`.
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f64, color: Option<String>) -> Self {
        Self {
            name: name_or_default(Some(name.into()), StageKind::Cutscene),
            duration,
            color,
        }
    }

    /// Length in seconds. NaN when the record carried no duration.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl StageDisplay for Cutscene {
    fn name(&self) -> &str {
        &self.name
    }

    fn raw_color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn subtitle(&self) -> Option<String> {
        Some(format_duration(self.duration))
    }
}

/// A combat stage with an optional tactical note.
#[derive(Debug, Clone, PartialEq)]
pub struct Fight {
    name: String,
    subtitle: Option<String>,
    color: Option<String>,
}

impl Fight {
    /// Creates a fight. An empty name falls back to `"Fight"`.
    #[must_use]
    pub fn new(name: impl Into<String>, subtitle: Option<String>, color: Option<String>) -> Self {
        Self {
            name: name_or_default(Some(name.into()), StageKind::Fight),
            subtitle,
            color,
        }
    }
}

impl StageDisplay for Fight {
    fn name(&self) -> &str {
        &self.name
    }

    fn raw_color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    fn subtitle(&self) -> Option<String> {
        self.subtitle.clone()
    }
}

/// One phase of a duty.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// A cutscene stage.
    Cutscene(Cutscene),
    /// A fight stage.
    Fight(Fight),
}

impl Stage {
    /// Builds a stage from a typed record.
    ///
    /// Returns `None` when the record's type tag is absent or is not one of
    /// the known tags.
    #[must_use]
    pub fn from_record(record: StageRecord) -> Option<Self> {
        let kind = StageKind::from_tag(record.kind.as_deref()?)?;
        let name = name_or_default(record.name, kind);

        let stage = match kind {
            StageKind::Cutscene => Self::Cutscene(Cutscene {
                name,
                duration: record.duration.unwrap_or(f64::NAN),
                color: record.color,
            }),
            StageKind::Fight => Self::Fight(Fight {
                name,
                subtitle: record.subtitle,
                color: record.color,
            }),
        };
        Some(stage)
    }

    /// Builds a stage from an untyped catalog value.
    ///
    /// A value that does not have the stage record shape is handled the
    /// same way as an unknown type tag: it yields `None`.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let record = StageRecord::deserialize(value).ok()?;
        Self::from_record(record)
    }

    /// Returns the variant discriminant.
    #[must_use]
    pub fn kind(&self) -> StageKind {
        match self {
            Self::Cutscene(_) => StageKind::Cutscene,
            Self::Fight(_) => StageKind::Fight,
        }
    }
}

impl StageDisplay for Stage {
    fn name(&self) -> &str {
        match self {
            Self::Cutscene(cutscene) => cutscene.name(),
            Self::Fight(fight) => fight.name(),
        }
    }

    fn raw_color(&self) -> Option<&str> {
        match self {
            Self::Cutscene(cutscene) => cutscene.raw_color(),
            Self::Fight(fight) => fight.raw_color(),
        }
    }

    fn subtitle(&self) -> Option<String> {
        match self {
            Self::Cutscene(cutscene) => cutscene.subtitle(),
            Self::Fight(fight) => fight.subtitle(),
        }
    }
}

impl From<Cutscene> for Stage {
    fn from(cutscene: Cutscene) -> Self {
        Self::Cutscene(cutscene)
    }
}

impl From<Fight> for Stage {
    fn from(fight: Fight) -> Self {
        Self::Fight(fight)
    }
}
