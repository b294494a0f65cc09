//! Loader for calculator schema documents.
//!
//! ## Document Format
//!
//! The schema is a JSON object holding a `calculators` array. Only the first
//! calculator is used.
//!
//! | Key | Required | Type | Notes |
//! |-----------------------|----------|---------------|------------------------------------------|
//! | `name` | no | string | Calculator display name |
//! | `fields` | yes | array | Field objects, in display order |
//! | `fields[].id` | yes | integer | Unique within the calculator |
//! | `fields[].type` | yes | string | `dropdown`, `toggle`, `checkbox`, `divider` |
//! | `fields[].label` | no | string | Section title in the form and the quote |
//! | `fields[].description`| no | string | Secondary text under the control |
//! | `fields[].alias` | no | string | Selection key; defaults to `<prefix>_<id>` |
//! | `fields[].options` | no | array | `optionText`, `optionValue`, `optionHint` |
//!
//! `optionValue` may be written as a string or a number.
//!
//! ### Minimal example
//!
//! ```json
//! { "calculators": [ { "name": "Trip", "fields": [
//!   { "id": 1, "type": "dropdown", "label": "Travel", "alias": "travel",
//!     "options": [ { "optionText": "Business", "optionValue": "500" } ] }
//! ] } ] }
//! ```
//!
//! Only presence is checked at the document level. Individual fields that
//! cannot be understood are skipped with a warning instead of failing the
//! whole load.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{CalculatorSchema, Field, FieldVariant, PriceOption};

/// Reasons a calculator could not be found in a schema document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema file error: {0}")]
    Io(String),

    #[error("schema is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("schema defines no calculators")]
    NoCalculators,

    #[error("first calculator has no fields list")]
    MissingFields,
}

// ---------------------------------------------------------------------------
// Serde-compatible shapes mirroring the document layout
// ---------------------------------------------------------------------------

/// Only `id` and `type` must have the right shape; every other key is read
/// leniently by [`convert_field`].
#[derive(Debug, Deserialize)]
struct RawField {
    id: i64,
    #[serde(rename = "type", alias = "variant")]
    variant: String,
    #[serde(default)]
    label: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default)]
    alias: Option<Value>,
    #[serde(default)]
    options: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOption {
    #[serde(default)]
    option_text: Option<Value>,
    #[serde(default)]
    option_value: Option<Value>,
    #[serde(default)]
    option_hint: Option<Value>,
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse schema text and return the first calculator it defines.
///
/// # Errors
///
/// * [`SchemaError::InvalidJson`] – the text is not JSON.
/// * [`SchemaError::NoCalculators`] – no non-empty `calculators` array.
/// * [`SchemaError::MissingFields`] – the first calculator has no `fields` array.
pub fn load_from_str(input: &str) -> Result<CalculatorSchema, SchemaError> {
    let root: Value =
        serde_json::from_str(input).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;

    let calculator = root
        .get("calculators")
        .and_then(Value::as_array)
        .and_then(|calculators| calculators.first())
        .ok_or(SchemaError::NoCalculators)?;

    let raw_fields = calculator
        .get("fields")
        .and_then(Value::as_array)
        .ok_or(SchemaError::MissingFields)?;

    let name = calculator
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let fields: Vec<Field> = raw_fields
        .iter()
        .enumerate()
        .filter_map(|(index, value)| convert_field(index, value))
        .collect();

    info!(calculator = %name, fields = fields.len(), "calculator schema loaded");
    Ok(CalculatorSchema { name, fields })
}

/// Read a schema file from disk and parse it with [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<CalculatorSchema, SchemaError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SchemaError::Io(format!("cannot read '{}': {e}", path.display())))?;
    load_from_str(&contents)
}

/// Convert one entry of the `fields` array; `None` means skip it.
fn convert_field(
    index: usize,
    value: &Value,
) -> Option<Field> {
    let raw: RawField = match RawField::deserialize(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(index, "skipping malformed field: {}", e);
            return None;
        }
    };

    let Some(variant) = FieldVariant::parse(&raw.variant) else {
        warn!(index, id = raw.id, kind = %raw.variant, "skipping field of unknown type");
        return None;
    };

    let alias = text_of(index, "alias", raw.alias)
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| Field::synthetic_alias(variant, raw.id));

    let options = match (variant, raw.options) {
        (FieldVariant::Divider, _) | (_, None | Some(Value::Null)) => Vec::new(),
        (_, Some(Value::Array(options))) => options
            .iter()
            .filter_map(|v| convert_option(raw.id, v))
            .collect(),
        (_, Some(other)) => {
            warn!(index, id = raw.id, found = %other, "options is not a list, treating as empty");
            Vec::new()
        }
    };

    Some(Field {
        id: raw.id,
        variant,
        label: text_of(index, "label", raw.label).unwrap_or_default(),
        description: text_of(index, "description", raw.description)
            .filter(|d| !d.trim().is_empty()),
        alias,
        options,
    })
}

/// A string-valued field key; anything else counts as absent.
fn text_of(
    index: usize,
    key: &'static str,
    value: Option<Value>,
) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            warn!(index, key, found = %other, "ignoring non-text field value");
            None
        }
    }
}

fn convert_option(
    field_id: i64,
    value: &Value,
) -> Option<PriceOption> {
    match RawOption::deserialize(value) {
        Ok(raw) => Some(PriceOption {
            option_text: raw_value_text(raw.option_text),
            option_value: raw_value_text(raw.option_value),
            option_hint: match raw.option_hint {
                Some(Value::String(hint)) if !hint.trim().is_empty() => Some(hint),
                _ => None,
            },
        }),
        Err(e) => {
            warn!(field_id, "skipping malformed option: {}", e);
            None
        }
    }
}

/// Keep a configured scalar as text; numbers keep their JSON spelling.
fn raw_value_text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}
