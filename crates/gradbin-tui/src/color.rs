//! Terminal approximation of a gradient.
//!
//! Color tokens in a [`GradientDocument`] are opaque; this module makes a
//! best effort to turn them into RGB for painting, and samples the stops with
//! the same rules a browser uses for `linear-gradient`: the first color fills
//! everything before the first stop, the last color everything after the last
//! stop, and neighbouring stops are interpolated linearly in sRGB. Two stops
//! at the same position give a hard edge.
//!
//! Accepted tokens: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (alpha is
//! ignored) and a handful of CSS named colors. Anything else is `None` and
//! the caller paints its fallback color.

use gradbin_core::GradientDocument;
use ratatui::style::Color;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend; `f = 0` is `self`, `f = 1` is `other`.
    pub fn lerp(self, other: Rgb, f: f64) -> Rgb {
        let f = f.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.0, c.1, c.2)
    }
}

/// Best-effort parse of a color token.
pub fn parse_token(token: &str) -> Option<Rgb> {
    let token = token.trim();
    match token.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => named(&token.to_ascii_lowercase()),
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 | 4 => Some(Rgb(
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        )),
        6 | 8 => {
            let byte = |i: usize| -> Option<u8> { Some(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?) };
            Some(Rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

fn named(name: &str) -> Option<Rgb> {
    let rgb = match name {
        "black" => Rgb(0, 0, 0),
        "white" => Rgb(255, 255, 255),
        "red" => Rgb(255, 0, 0),
        "lime" => Rgb(0, 255, 0),
        "green" => Rgb(0, 128, 0),
        "blue" => Rgb(0, 0, 255),
        "yellow" => Rgb(255, 255, 0),
        "cyan" | "aqua" => Rgb(0, 255, 255),
        "magenta" | "fuchsia" => Rgb(255, 0, 255),
        "gray" | "grey" => Rgb(128, 128, 128),
        "silver" => Rgb(192, 192, 192),
        "maroon" => Rgb(128, 0, 0),
        "navy" => Rgb(0, 0, 128),
        "olive" => Rgb(128, 128, 0),
        "purple" => Rgb(128, 0, 128),
        "teal" => Rgb(0, 128, 128),
        "orange" => Rgb(255, 165, 0),
        "pink" => Rgb(255, 192, 203),
        _ => return None,
    };
    Some(rgb)
}

/// Parsed stops ready for sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct Ramp {
    stops: Vec<(f64, Rgb)>,
}

impl Ramp {
    /// Build from a document's keypoints; unparseable tokens take `fallback`.
    pub fn from_document(doc: &GradientDocument, fallback: Rgb) -> Self {
        let stops = doc
            .color_sequence
            .iter()
            .map(|kp| (kp.time, parse_token(&kp.color).unwrap_or(fallback)))
            .collect();
        Self { stops }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color at position `t`, or `None` for an empty ramp.
    pub fn sample(&self, t: f64) -> Option<Rgb> {
        let (first, last) = (self.stops.first()?, self.stops.last()?);
        if t <= first.0 {
            return Some(first.1);
        }
        if t >= last.0 {
            return Some(last.1);
        }
        self.stops
            .windows(2)
            .find(|w| t >= w[0].0 && t < w[1].0)
            .map(|w| {
                let (a, b) = (w[0], w[1]);
                a.1.lerp(b.1, (t - a.0) / (b.0 - a.0))
            })
            .or(Some(last.1))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
