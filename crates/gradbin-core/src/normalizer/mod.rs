//! Turns a raw XML or JSON payload into a [`GradientDocument`].
//!
//! Both paths converge on the same structure and the same post-processing:
//! absent tokens are replaced by [`DEFAULT_COLOR`](crate::DEFAULT_COLOR) /
//! [`DEFAULT_PROP_NAME`](crate::DEFAULT_PROP_NAME), present tokens are kept
//! verbatim, and the keypoints are stable-sorted by time.

pub mod json;
pub mod xml;

use crate::{detect::SourceFormat, error::NormalizeError, GradientDocument};

/// Run the normalizer matching `format` over `raw`.
pub fn normalize(format: SourceFormat, raw: &str) -> Result<GradientDocument, NormalizeError> {
    let result = match format {
        SourceFormat::Xml => xml::parse(raw),
        SourceFormat::Json => json::parse(raw),
    };
    match &result {
        Ok(doc) => tracing::debug!(
            %format,
            keypoints = doc.color_sequence.len(),
            props = doc.props_colors.len(),
            "payload normalized"
        ),
        Err(err) => tracing::warn!(%format, error = %err, "payload rejected"),
    }
    result
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// `value` if present and non-empty, otherwise `default`.
pub(crate) fn token_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Trimmed text, or `None` when nothing is left after trimming.
pub(crate) fn non_empty_trimmed(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Lenient float parse in the manner of `parseFloat`: leading whitespace is
/// skipped and the longest numeric prefix is used, so `"0.5abc"` is `0.5`.
///
/// Returns `None` when no numeric prefix exists or the value is not finite,
/// which callers map to a time of `0`.
pub(crate) fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
