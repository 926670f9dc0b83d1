//! Gradient descriptor builder.
//!
//! Produces the CSS-style `linear-gradient(to right, <color> <pct>%, ...)`
//! string for a document. Applying it to anything visual is the caller's
//! business; see the `gradbin-tui` gradient bar for the terminal rendering.

use crate::{GradientDocument, Keypoint};

/// Direction prefix of every descriptor. Only left-to-right is supported.
const PREFIX: &str = "linear-gradient(to right, ";

/// Outcome of rendering a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    /// The document has no keypoints; there is nothing to draw.
    Empty,
    /// A complete gradient descriptor.
    Gradient(String),
}

impl Rendering {
    pub fn descriptor(&self) -> Option<&str> {
        match self {
            Rendering::Empty => None,
            Rendering::Gradient(s) => Some(s),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Rendering::Empty)
    }
}

impl std::fmt::Display for Rendering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rendering::Empty => f.write_str("No colorSequence to display."),
            Rendering::Gradient(s) => f.write_str(s),
        }
    }
}

/// Build the descriptor for `doc`. Keypoints are used in stored order, which
/// the normalizers guarantee is ascending by time.
pub fn render(doc: &GradientDocument) -> Rendering {
    if doc.color_sequence.is_empty() {
        return Rendering::Empty;
    }
    let stops: Vec<String> = doc.color_sequence.iter().map(stop_token).collect();
    Rendering::Gradient(format!("{PREFIX}{})", stops.join(", ")))
}

/// `"<color> <pct>%"` for one keypoint.
pub fn stop_token(kp: &Keypoint) -> String {
    format!("{} {}%", kp.color, percent(kp.time))
}

/// `time * 100` rounded half-up to the nearest integer (`0.125` → 13,
/// `-0.125` → -12). Out-of-range times are not clamped; integral floats
/// display without a fraction, so the result formats as a plain integer.
pub fn percent(time: f64) -> f64 {
    (time * 100.0 + 0.5).floor()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
