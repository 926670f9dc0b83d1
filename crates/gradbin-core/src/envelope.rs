//! JSONBin response envelope.
//!
//! A bin read returns `{ "record": { ... }, "metadata": { ... } }`; the
//! gradient payload is the string stored under `record.gradientData`. A
//! missing record or payload is reported separately from a parse failure of
//! the payload itself.

use serde_json::Value;

use crate::error::{json_kind, PayloadError};

/// Extract the raw gradient payload from a JSONBin response body.
pub fn extract_gradient_data(body: &str) -> Result<String, PayloadError> {
    let envelope: Value = serde_json::from_str(body).map_err(PayloadError::Envelope)?;

    let record = match envelope.get("record") {
        Some(Value::Object(map)) => map,
        Some(v) if !is_falsy(v) => {
            tracing::warn!(found = json_kind(v), "record is not an object");
            return Err(PayloadError::MissingGradientData);
        }
        _ => return Err(PayloadError::MissingRecord),
    };

    match record.get("gradientData") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(v) if !is_falsy(v) => Err(PayloadError::NotText { found: json_kind(v) }),
        _ => Err(PayloadError::MissingGradientData),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
