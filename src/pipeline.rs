//! Pipeline: source → envelope → detect → normalize → render.
//!
//! Every step returns a value; nothing is stashed in shared state. A
//! successful run yields a [`Loaded`] that the caller threads into the
//! preview and the exporter, and every failure is a [`LoadError`] whose
//! `Display` is the message shown to the user.

use gradbin_core::{
    detect_format, envelope, normalize, render, GradientDocument, NormalizeError, PayloadError,
    Rendering, SourceFormat,
};
use gradbin_feeds::{FetchError, RecordSource};

/// What a source hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadKind {
    /// A JSONBin response body with the payload under `record.gradientData`.
    #[default]
    Envelope,
    /// The gradient payload itself.
    Raw,
}

/// Result of a successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub format: SourceFormat,
    pub document: GradientDocument,
    pub rendering: Rendering,
}

impl Loaded {
    /// Status lines in the order the user should see them.
    pub fn messages(&self) -> Vec<String> {
        vec![
            self.format.status_message().to_string(),
            self.rendering.to_string(),
        ]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("Unable to parse/convert into a structured document.")]
    Normalize {
        format: SourceFormat,
        #[source]
        source: NormalizeError,
    },
}

impl LoadError {
    /// The detected format, when the failure happened after detection.
    pub fn format(&self) -> Option<SourceFormat> {
        match self {
            LoadError::Normalize { format, .. } => Some(*format),
            _ => None,
        }
    }

    /// The bin was retrieved; only its contents were unusable.
    pub fn is_after_fetch(&self) -> bool {
        !matches!(self, LoadError::Fetch(_))
    }
}

/// Detect, normalize and render a bare payload.
pub fn load_payload(raw: &str) -> Result<Loaded, LoadError> {
    let format = detect_format(raw);
    tracing::debug!(%format, bytes = raw.len(), "payload format detected");

    let document =
        normalize(format, raw).map_err(|source| LoadError::Normalize { format, source })?;
    let rendering = render(&document);

    Ok(Loaded { format, document, rendering })
}

/// Pull `record.gradientData` out of a JSONBin response body and load it.
pub fn load_envelope(body: &str) -> Result<Loaded, LoadError> {
    let payload = envelope::extract_gradient_data(body)?;
    load_payload(&payload)
}

/// Fetch `bin_id` from `source` and load it.
pub async fn fetch_and_load<S: RecordSource>(
    source: &S,
    bin_id: &str,
    kind: PayloadKind,
) -> Result<Loaded, LoadError> {
    tracing::debug!(source = %source.describe(), bin_id, ?kind, "loading bin");
    let text = source.fetch(bin_id).await?;
    match kind {
        PayloadKind::Envelope => load_envelope(&text),
        PayloadKind::Raw => load_payload(&text),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
