use crate::ui::strings::APP_NAME;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SCREEN_BG};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: back hint and the app title.
pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(" ← ", Style::default().fg(HEADER_TEXT)),
            Span::styled("Esc", Style::default().fg(MUTED_TEXT)),
            Span::styled("   ", Style::default()),
            Span::styled(
                APP_NAME,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line).style(Style::default().bg(SCREEN_BG)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
