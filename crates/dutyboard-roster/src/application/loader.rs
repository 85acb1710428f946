//! Catalog loading.
//!
//! This module turns duty records, catalog documents, or a configured
//! catalog source into a `DutyCatalog`. Loading happens once at startup;
//! the resulting catalog is read-only.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use dutyboard_core::error::DutyError;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::domain::catalog::DutyCatalog;
use crate::domain::duty::Duty;
use crate::domain::records::DutyRecord;

/// Placeholder catalog shipped with the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/duties.json");

/// Builds a catalog from duty records.
///
/// Every record produces one duty, keyed by its slug in encounter order.
/// A repeated slug replaces the earlier duty.
#[must_use]
pub fn load_duties<I>(records: I) -> DutyCatalog
where
    I: IntoIterator<Item = DutyRecord>,
{
    let mut record_count = 0usize;
    let catalog: DutyCatalog = records
        .into_iter()
        .inspect(|_| record_count += 1)
        .map(|record| (record.slug.clone(), Duty::from_record(record)))
        .collect();

    debug!(
        records = record_count,
        duties = catalog.len(),
        "built duty catalog"
    );
    catalog
}

/// Parses a catalog document.
///
/// # Errors
///
/// Returns `DutyError::Parse` if the text is not a JSON array of duty
/// records. Malformed stage entries inside a valid duty record are dropped
/// and never cause an error.
pub fn parse_catalog(json: &str) -> Result<DutyCatalog, DutyError> {
    let records: Vec<DutyRecord> = serde_json::from_str(json)
        .map_err(|e| DutyError::Parse(format!("invalid duty catalog: {e}")))?;
    Ok(load_duties(records))
}

/// Reads and parses a catalog document.
///
/// # Errors
///
/// Returns `DutyError::Io` if reading fails and `DutyError::Parse` if the
/// document is not a JSON array of duty records.
pub fn read_catalog<R: Read>(reader: R) -> Result<DutyCatalog, DutyError> {
    let records: Vec<DutyRecord> = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            DutyError::Io(format!("failed to read duty catalog: {e}"))
        } else {
            DutyError::Parse(format!("invalid duty catalog: {e}"))
        }
    })?;
    Ok(load_duties(records))
}

/// Where the duty catalog is loaded from.
///
/// Deserializable so the embedding application can carry it in its own
/// configuration, e.g. `{ "kind": "file", "path": "duties.json" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogSource {
    /// The placeholder catalog compiled into the crate.
    #[default]
    Bundled,
    /// A catalog document on disk.
    File {
        /// Path to the JSON document.
        path: PathBuf,
    },
    /// A catalog document held in memory.
    Inline {
        /// The JSON document text.
        json: String,
    },
}

impl CatalogSource {
    fn label(&self) -> &'static str {
        match self {
            Self::Bundled => "bundled",
            Self::File { .. } => "file",
            Self::Inline { .. } => "inline",
        }
    }

    /// Loads the catalog from this source.
    ///
    /// # Errors
    ///
    /// Returns `DutyError::Io` if a file source cannot be opened or read.
    /// Returns `DutyError::Parse` if the document is not a JSON array of
    /// duty records.
    #[instrument(skip(self), fields(source = self.label()))]
    pub fn load(&self) -> Result<DutyCatalog, DutyError> {
        let catalog = match self {
            Self::Bundled => parse_catalog(BUNDLED_CATALOG)?,
            Self::File { path } => {
                let file = File::open(path).map_err(|e| {
                    DutyError::Io(format!("failed to open {}: {e}", path.display()))
                })?;
                read_catalog(BufReader::new(file))?
            }
            Self::Inline { json } => parse_catalog(json)?,
        };

        info!(duties = catalog.len(), "duty catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use dutyboard_core::display::StageDisplay;
    use dutyboard_core::error::DutyError;
    use serde_json::json;

    use super::{CatalogSource, load_duties, parse_catalog, read_catalog};
    use crate::domain::records::DutyRecord;

    fn record(slug: &str, name: &str) -> DutyRecord {
        DutyRecord {
            slug: slug.to_owned(),
            name: name.to_owned(),
            stages: Vec::new(),
        }
    }

    #[test]
    fn test_load_duties_keys_by_slug_in_encounter_order() {
        // Arrange
        let records = vec![
            record("castrum", "Castrum Meridianum"),
            record("praetorium", "The Praetorium"),
        ];

        // Act
        let catalog = load_duties(records);

        // Assert
        assert_eq!(catalog.slugs().collect::<Vec<_>>(), ["castrum", "praetorium"]);
        assert_eq!(catalog.get("praetorium").unwrap().name(), "The Praetorium");
    }

    #[test]
    fn test_load_duties_last_duplicate_slug_wins() {
        // Arrange
        let records = vec![
            record("castrum", "Old Castrum"),
            record("praetorium", "The Praetorium"),
            record("castrum", "New Castrum"),
        ];

        // Act
        let catalog = load_duties(records);

        // Assert
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("castrum").unwrap().name(), "New Castrum");
    }

    #[test]
    fn test_load_duties_of_nothing_is_empty() {
        let catalog = load_duties(Vec::new());

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_catalog_rejects_non_array_document() {
        let result = parse_catalog(r#"{ "slug": "castrum" }"#);

        match result {
            Err(DutyError::Parse(msg)) => assert!(msg.contains("invalid duty catalog")),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_catalog_drops_bad_stages_only() {
        // Arrange
        let document = json!([{
            "slug": "castrum",
            "name": "Castrum Meridianum",
            "stages": [
                { "type": "cutscene", "name": "Intro", "duration": "soon" },
                { "type": "fight", "name": "Gate" },
                42
            ]
        }])
        .to_string();

        // Act
        let catalog = parse_catalog(&document).unwrap();

        // Assert
        let duty = catalog.get("castrum").unwrap();
        assert_eq!(duty.stages().len(), 1);
        assert_eq!(duty.stages()[0].title(), "Gate");
    }

    #[test]
    fn test_read_catalog_from_reader() {
        let document = br#"[{ "slug": "praetorium", "name": "The Praetorium", "stages": [] }]"#;

        let catalog = read_catalog(&document[..]).unwrap();

        assert!(catalog.contains("praetorium"));
    }

    #[test]
    fn test_bundled_source_loads_placeholder_duties() {
        // Act
        let catalog = CatalogSource::Bundled.load().unwrap();

        // Assert
        assert_eq!(catalog.slugs().collect::<Vec<_>>(), ["castrum", "praetorium"]);
        let castrum = catalog.get("castrum").unwrap();
        assert_eq!(castrum.name(), "Castrum Meridianum");
        assert_eq!(castrum.stages().len(), 3);
        assert!(catalog.get("praetorium").unwrap().stages().is_empty());
    }

    #[test]
    fn test_missing_file_source_is_io_error() {
        let source = CatalogSource::File {
            path: "/nonexistent/dutyboard/duties.json".into(),
        };

        match source.load() {
            Err(DutyError::Io(msg)) => assert!(msg.contains("failed to open")),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_source_deserializes_from_config() {
        let bundled: CatalogSource = serde_json::from_value(json!({ "kind": "bundled" })).unwrap();
        let file: CatalogSource =
            serde_json::from_value(json!({ "kind": "file", "path": "duties.json" })).unwrap();

        assert_eq!(bundled, CatalogSource::default());
        assert_eq!(
            file,
            CatalogSource::File {
                path: "duties.json".into()
            }
        );
    }
}
