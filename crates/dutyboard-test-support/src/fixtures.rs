//! Catalog fixtures — untyped JSON builders mirroring the catalog document.

use serde_json::{Value, json};

/// A cutscene stage entry. `color` is omitted when `None`.
#[must_use]
pub fn cutscene_value(name: &str, duration: f64, color: Option<&str>) -> Value {
    let mut value = json!({ "type": "cutscene", "name": name, "duration": duration });
    if let Some(color) = color {
        value["color"] = json!(color);
    }
    value
}

/// A fight stage entry. `subtitle` and `color` are omitted when `None`.
#[must_use]
pub fn fight_value(name: &str, subtitle: Option<&str>, color: Option<&str>) -> Value {
    let mut value = json!({ "type": "fight", "name": name });
    if let Some(subtitle) = subtitle {
        value["subtitle"] = json!(subtitle);
    }
    if let Some(color) = color {
        value["color"] = json!(color);
    }
    value
}

/// A duty entry holding the given stage entries in order.
#[must_use]
pub fn duty_value(slug: &str, name: &str, stages: Vec<Value>) -> Value {
    json!({ "slug": slug, "name": name, "stages": stages })
}

/// Serializes duty entries into a catalog document.
#[must_use]
pub fn catalog_document(duties: Vec<Value>) -> String {
    Value::Array(duties).to_string()
}
