//! JSON path.
//!
//! The payload is read loosely into a [`RawDocument`] whose fields are all
//! optional, then turned into a [`GradientDocument`] by one pure defaulting
//! step. "Falsy" follows the usual scripting meaning: `null`, `false`, `0`
//! and `""` all count as absent.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{json_kind, NormalizeError},
    types::{sort_by_time, DEFAULT_COLOR, DEFAULT_PROP_NAME},
    GradientDocument, Keypoint, PropColor,
};

/// The top-level object as it arrives, before any defaulting.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default)]
    pub color_sequence: Option<Value>,
    #[serde(default)]
    pub props_colors: Option<Value>,
    #[serde(default)]
    pub first_color: Option<Value>,
    #[serde(default)]
    pub last_color: Option<Value>,
}

impl RawDocument {
    /// Apply the defaulting rules and sort the keypoints.
    ///
    /// Entries are never dropped: a keypoint or prop that is not an object
    /// becomes a default-valued entry, so counts always match the source.
    pub fn into_document(self) -> GradientDocument {
        let mut color_sequence: Vec<Keypoint> = entries(self.color_sequence, "colorSequence")
            .iter()
            .map(keypoint_from)
            .collect();
        sort_by_time(&mut color_sequence);

        let props_colors = entries(self.props_colors, "propsColors")
            .iter()
            .map(prop_from)
            .collect();

        GradientDocument {
            color_sequence,
            props_colors,
            first_color: self.first_color.filter(is_truthy).map(token_text),
            last_color: self.last_color.filter(is_truthy).map(token_text),
        }
    }
}

/// Parse a JSON payload into a [`GradientDocument`].
pub fn parse(raw: &str) -> Result<GradientDocument, NormalizeError> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(NormalizeError::NotAnObject { found: json_kind(&value) });
    }
    let raw_doc: RawDocument = serde_json::from_value(value)?;
    Ok(raw_doc.into_document())
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings verbatim, any other value as its JSON text.
fn token_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn token_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(v) => token_text(v.clone()),
    }
}

/// Array entries of a sequence field; falsy means empty.
fn entries(value: Option<Value>, field: &str) -> Vec<Value> {
    match value {
        Some(Value::Array(items)) => items,
        Some(v) if is_truthy(&v) => {
            tracing::warn!(field, found = json_kind(&v), "sequence field is not an array; treating as empty");
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Numeric coercion for `time`: numbers as-is, `true` is 1, numeric strings
/// are parsed, everything else (including non-finite results) is 0.
fn coerce_time(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        // Whole-string numeric only; "0.5px" is not a number here.
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

fn keypoint_from(entry: &Value) -> Keypoint {
    match entry {
        Value::Object(map) => Keypoint {
            time: coerce_time(map.get("time")),
            color: token_or(map.get("color"), DEFAULT_COLOR),
        },
        other => {
            tracing::warn!(found = json_kind(other), "keypoint entry is not an object");
            Keypoint::new(0.0, DEFAULT_COLOR)
        }
    }
}

fn prop_from(entry: &Value) -> PropColor {
    match entry {
        Value::Object(map) => PropColor {
            name: token_or(map.get("name"), DEFAULT_PROP_NAME),
            color: token_or(map.get("color"), DEFAULT_COLOR),
        },
        other => {
            tracing::warn!(found = json_kind(other), "prop entry is not an object");
            PropColor::new(DEFAULT_PROP_NAME, DEFAULT_COLOR)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
