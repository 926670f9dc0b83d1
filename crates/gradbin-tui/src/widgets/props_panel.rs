//! Props panel: named prop colours plus the first/last colours, one row
//! each, with a swatch painted from the colour token.

use gradbin_core::GradientDocument;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::color::parse_token;
use crate::theme::Theme;

const SWATCH: &str = "    ";
const NAME_WIDTH: usize = 14;

pub struct PropsPanel<'a> {
    document: Option<&'a GradientDocument>,
    theme: &'a Theme,
}

impl<'a> PropsPanel<'a> {
    pub fn new(document: Option<&'a GradientDocument>, theme: &'a Theme) -> Self {
        Self { document, theme }
    }

    /// Rows the panel wants, borders included.
    pub fn height(document: Option<&GradientDocument>) -> u16 {
        let rows = document.map_or(0, |d| d.props_colors.len()) + 2;
        rows as u16 + 2
    }

    fn row(&self, name: &str, color: Option<&str>) -> Line<'static> {
        let name = Span::styled(format!("{name:<NAME_WIDTH$}"), self.theme.label);
        let Some(token) = color else {
            return Line::from(vec![
                name,
                Span::raw(SWATCH),
                Span::styled(" (none)", self.theme.hint),
            ]);
        };
        let (r, g, b) = self.theme.fallback;
        let rgb = parse_token(token).unwrap_or(crate::color::Rgb(r, g, b));
        Line::from(vec![
            name,
            Span::styled(SWATCH, Style::default().bg(rgb.into())),
            Span::styled(format!(" {token}"), self.theme.value),
        ])
    }
}

impl Widget for PropsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Colors ")
            .title_style(self.theme.title)
            .border_style(self.theme.border_unfocused);

        let lines: Vec<Line> = match self.document {
            None => vec![Line::styled("no document loaded", self.theme.empty)],
            Some(doc) => {
                let mut lines = vec![
                    self.row("firstColor", doc.first_color.as_deref()),
                    self.row("lastColor", doc.last_color.as_deref()),
                ];
                lines.extend(
                    doc.props_colors
                        .iter()
                        .map(|p| self.row(&p.name, Some(&p.color))),
                );
                lines
            }
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
