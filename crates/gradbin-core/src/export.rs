//! Serialize a [`GradientDocument`] to pretty-printed JSON.
//!
//! The output uses 2-space indentation and the schema's field order, so the
//! same document always produces the same bytes and feeding the text back
//! through the JSON normalizer yields the same document.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::{error::ExportError, GradientDocument};

/// Pretty JSON text for `doc`.
pub fn to_pretty_json(doc: &GradientDocument) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// `gradient_<unix millis>.json`
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("gradient_{}.json", at.timestamp_millis())
}

/// Write `doc` into `dir` under a name derived from the current time and
/// return the full path of the new file.
pub fn write_export(doc: &GradientDocument, dir: &Path) -> Result<PathBuf, ExportError> {
    write_export_at(doc, dir, Utc::now())
}

/// Export the most recently loaded document, if there is one.
pub fn export_latest(
    doc: Option<&GradientDocument>,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    write_export(doc.ok_or(ExportError::NoDocument)?, dir)
}

/// [`write_export`] with an explicit timestamp.
pub fn write_export_at(
    doc: &GradientDocument,
    dir: &Path,
    at: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    let text = to_pretty_json(doc)?;
    let path = dir.join(export_file_name(at));
    std::fs::write(&path, text).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "gradient exported");
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
