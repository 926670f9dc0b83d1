//! Gradient bar: paints the colour ramp across the full pane width.
//!
//! Each terminal column is sampled at its centre, so a bar `w` cells wide
//! shows positions `(x + 0.5) / w`. With labels enabled the bottom row of
//! the pane holds each stop's percentage at its position.

use gradbin_core::{render::percent, GradientDocument};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph, Widget},
};

use crate::color::{Ramp, Rgb};
use crate::theme::Theme;

pub const EMPTY_PLACEHOLDER: &str = "nothing to render";

pub struct GradientBar<'a> {
    document: Option<&'a GradientDocument>,
    title: &'a str,
    show_labels: bool,
    theme: &'a Theme,
}

impl<'a> GradientBar<'a> {
    pub fn new(document: Option<&'a GradientDocument>, theme: &'a Theme) -> Self {
        Self {
            document,
            title: "Gradient",
            show_labels: false,
            theme,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }
}

impl Widget for GradientBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .title_style(self.theme.title)
            .border_style(self.theme.border_focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let (r, g, b) = self.theme.fallback;
        let ramp = self
            .document
            .map(|doc| Ramp::from_document(doc, Rgb(r, g, b)))
            .filter(|ramp| !ramp.is_empty());

        let (Some(ramp), Some(doc)) = (ramp, self.document) else {
            if inner.height > 0 {
                let mid = Rect {
                    y: inner.y + inner.height / 2,
                    height: 1,
                    ..inner
                };
                Paragraph::new(EMPTY_PLACEHOLDER)
                    .style(self.theme.empty)
                    .alignment(Alignment::Center)
                    .render(mid, buf);
            }
            return;
        };

        let label_rows = u16::from(self.show_labels && inner.height > 1);
        let bar_rows = inner.height - label_rows;
        let width = inner.width as f64;

        for dx in 0..inner.width {
            let t = (dx as f64 + 0.5) / width;
            let Some(rgb) = ramp.sample(t) else { continue };
            for dy in 0..bar_rows {
                buf[(inner.x + dx, inner.y + dy)]
                    .set_symbol(" ")
                    .set_style(Style::default().bg(rgb.into()));
            }
        }

        if label_rows == 1 {
            render_labels(doc, inner, buf, self.theme.label);
        }
    }
}

/// Percent labels on the last row of `inner`; a label that would overlap
/// the previous one is skipped.
fn render_labels(doc: &GradientDocument, inner: Rect, buf: &mut Buffer, style: Style) {
    let y = inner.bottom() - 1;
    let span = inner.width.saturating_sub(1) as f64;
    let mut next_free = inner.x;

    for kp in &doc.color_sequence {
        let text = format!("{}%", percent(kp.time));
        let len = text.chars().count() as u16;
        let anchor = inner.x + (kp.time.clamp(0.0, 1.0) * span).round() as u16;
        let x = anchor
            .saturating_sub(len / 2)
            .clamp(inner.x, inner.right().saturating_sub(len).max(inner.x));
        if x < next_free {
            continue;
        }
        buf.set_stringn(x, y, &text, (inner.right() - x) as usize, style);
        next_free = x + len + 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
