//! Status pane: what was loaded, how, and the result of the last action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::app::Notice;
use crate::theme::Theme;
use crate::Session;

pub struct StatusBar<'a> {
    session: &'a Session,
    notice: Option<&'a Notice>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(session: &'a Session, notice: Option<&'a Notice>, theme: &'a Theme) -> Self {
        Self { session, notice, theme }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let (session, t) = (self.session, self.theme);
        let mut lines: Vec<Line<'a>> = Vec::new();

        if let Some(format) = session.format {
            lines.push(Line::styled(format.status_message(), t.status_info));
        }
        if let Some(err) = &session.error {
            lines.push(Line::styled(err.as_str(), t.status_error));
        }
        if let Some(rendering) = &session.rendering {
            let style = if rendering.is_empty() { t.empty } else { t.value };
            lines.push(Line::styled(rendering.to_string(), style));
        }
        match self.notice {
            Some(Notice::Info(msg)) => lines.push(Line::styled(msg.as_str(), t.status_ok)),
            Some(Notice::Error(msg)) => lines.push(Line::styled(msg.as_str(), t.status_error)),
            None => {}
        }
        lines
    }

    /// Rows the pane wants, borders included.
    pub fn height(&self) -> u16 {
        self.lines().len().max(1) as u16 + 2
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.session.source))
            .title_style(self.theme.title)
            .border_style(self.theme.border_unfocused);

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
