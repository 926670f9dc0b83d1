//! Payload format detection.
//!
//! The check is a cheap syntactic prefix test, not a validation: anything
//! whose trimmed text starts with `<root>` goes down the XML path (and may
//! fail there), everything else is treated as JSON.

/// Literal prefix that routes a payload to the XML normalizer.
pub const XML_ROOT_PREFIX: &str = "<root>";

/// Which normalizer a payload is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Xml,
    Json,
}

impl SourceFormat {
    /// Status line shown once the format is known.
    pub fn status_message(self) -> &'static str {
        match self {
            SourceFormat::Xml => "Format detected: XML → converted to structured JSON.",
            SourceFormat::Json => "Format detected: JSON → parsed directly.",
        }
    }

    /// Caption drawn over the gradient preview.
    pub fn gradient_label(self) -> &'static str {
        match self {
            SourceFormat::Xml => "Gradient (XML→JSON)",
            SourceFormat::Json => "Gradient (JSON)",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Xml => write!(f, "xml"),
            SourceFormat::Json => write!(f, "json"),
        }
    }
}

/// Classify a raw payload.
pub fn detect_format(raw: &str) -> SourceFormat {
    if raw.trim().starts_with(XML_ROOT_PREFIX) {
        SourceFormat::Xml
    } else {
        SourceFormat::Json
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
