//! Query handlers for the duty roster.
//!
//! This module contains query handlers that read duties out of a loaded
//! catalog and return read-only view DTOs for renderers.

use dutyboard_core::display::StageDisplay;
use dutyboard_core::error::DutyError;
use serde::Serialize;

use crate::domain::catalog::DutyCatalog;
use crate::domain::duty::Duty;
use crate::domain::stage::{Stage, StageKind};

/// Read-only view of a stage, as displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageView {
    /// The stage variant.
    pub kind: StageKind,
    /// Display title.
    pub title: String,
    /// Display subtitle, if any.
    pub subtitle: Option<String>,
    /// Resolved display color, if any.
    pub color: Option<String>,
}

impl From<&Stage> for StageView {
    fn from(stage: &Stage) -> Self {
        Self {
            kind: stage.kind(),
            title: stage.title().to_owned(),
            subtitle: stage.subtitle(),
            color: stage.color(),
        }
    }
}

/// Read-only view of a duty and its stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyView {
    /// The duty slug.
    pub slug: String,
    /// The duty display name.
    pub name: String,
    /// Stage views in display order.
    pub stages: Vec<StageView>,
}

fn to_view(slug: &str, duty: &Duty) -> DutyView {
    DutyView {
        slug: slug.to_owned(),
        name: duty.name().to_owned(),
        stages: duty.stages().iter().map(StageView::from).collect(),
    }
}

/// Retrieves a duty by its slug.
///
/// # Errors
///
/// Returns `DutyError::DutyNotFound` if no duty is registered under `slug`.
pub fn get_duty_by_slug(slug: &str, catalog: &DutyCatalog) -> Result<DutyView, DutyError> {
    let duty = catalog
        .get(slug)
        .ok_or_else(|| DutyError::DutyNotFound(slug.to_owned()))?;
    Ok(to_view(slug, duty))
}

/// Lists every duty in catalog order.
#[must_use]
pub fn list_duties(catalog: &DutyCatalog) -> Vec<DutyView> {
    catalog
        .iter()
        .map(|(slug, duty)| to_view(slug, duty))
        .collect()
}
