//! Error types for gradbin-core.
//!
//! Every failure the core can report is a value the caller branches on; no
//! path through the core panics on bad input. An empty gradient is not an
//! error at all, see [`Rendering::Empty`](crate::render::Rendering::Empty).

use std::path::PathBuf;

/// A payload could not be turned into a [`GradientDocument`](crate::GradientDocument).
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The XML parser rejected the markup.
    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    /// The JSON parser rejected the syntax.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Valid JSON, but the top-level value is not an object.
    #[error("JSON payload is a {found}, expected an object")]
    NotAnObject { found: &'static str },
}

/// The gradient payload could not be located inside a JSONBin response.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("response body is not valid JSON: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("No 'record' field found.")]
    MissingRecord,
    #[error("No 'gradientData' in the record.")]
    MissingGradientData,
    #[error("'gradientData' is a {found}, expected a string")]
    NotText { found: &'static str },
}

/// Writing an export file failed.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Nothing has been loaded successfully yet.
    #[error("No structured data available.")]
    NoDocument,
    #[error("failed to serialize gradient: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Short JSON type name for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
