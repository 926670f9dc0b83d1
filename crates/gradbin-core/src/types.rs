//! Core types for gradbin-core.
//!
//! This module defines the canonical structure both normalizers converge on:
//! the [`GradientDocument`], its [`Keypoint`] stops and its [`PropColor`]
//! entries. Field names serialize in camelCase so exported files keep the
//! `colorSequence` / `propsColors` / `firstColor` / `lastColor` schema.

use serde::{Deserialize, Serialize};

/// Token substituted for an absent color.
pub const DEFAULT_COLOR: &str = "#FFF";

/// Token substituted for an absent prop name.
pub const DEFAULT_PROP_NAME: &str = "??";

/// One stop along the gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Fractional position, expected in `[0, 1]` but not enforced. Always
    /// finite once produced by a normalizer.
    #[serde(with = "time_repr")]
    pub time: f64,
    /// Opaque color token (usually a hex string). Never validated.
    pub color: String,
}

impl Keypoint {
    pub fn new(time: f64, color: impl Into<String>) -> Self {
        Self { time, color: color.into() }
    }
}

/// A named color attached to the gradient (border, fill, …).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropColor {
    pub name: String,
    pub color: String,
}

impl PropColor {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into() }
    }
}

/// The canonical gradient structure, identical regardless of source format.
///
/// All four fields are always present after normalization; the sequences
/// default to empty and the edge colors to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientDocument {
    /// Stops, sorted ascending by `time` (stable for ties).
    pub color_sequence: Vec<Keypoint>,
    /// Prop colors in source order.
    pub props_colors: Vec<PropColor>,
    pub first_color: Option<String>,
    pub last_color: Option<String>,
}

impl GradientDocument {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.color_sequence.is_empty()
    }
}

/// Stable ascending sort by `time`. Equal times keep their source order.
pub(crate) fn sort_by_time(keypoints: &mut [Keypoint]) {
    keypoints.sort_by(|a, b| {
        a.time
            .partial_cmp(&b.time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Integral times are written as integers (`1`, not `1.0`) so exports read
/// the same as a hand-written document.
mod time_repr {
    use serde::{Deserialize, Deserializer, Serializer};

    // Largest magnitude at which every integer is still exact in an f64.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(time: &f64, s: S) -> Result<S::Ok, S::Error> {
        if time.fract() == 0.0 && time.abs() < MAX_EXACT {
            s.serialize_i64(*time as i64)
        } else {
            s.serialize_f64(*time)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        f64::deserialize(d)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
