//! Header: one row with the app name, the bin being shown, and key hints.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const HINT: &str = " q:quit  e:export  ?:help ";

pub struct Header<'a> {
    bin_id: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(bin_id: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { bin_id, theme }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" gradbin ", self.theme.title)];
        if let Some(id) = self.bin_id.filter(|id| !id.is_empty()) {
            spans.push(Span::styled(format!("· {id}"), self.theme.label));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        // Keybinding hints at the right edge
        let hint_x = area.right().saturating_sub(HINT.len() as u16);
        buf.set_string(hint_x, area.y, HINT, self.theme.hint);
    }
}
