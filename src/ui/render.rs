use crate::ui::app::{App, Viewport};
use crate::ui::details::{render_details, RenderContext};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::SCREEN_BG;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

/// Draw one frame and report its geometry back to the caller.
pub fn draw(frame: &mut Frame<'_>, app: &App) -> Viewport {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Block::default().style(Style::default().bg(SCREEN_BG)), area);
    frame.render_widget(Header::new().widget(), header);

    let ctx = RenderContext {
        images: app.images(),
        width: body.width,
    };
    let rendered = render_details(&app.details(), &ctx);
    let content_rows = u16::try_from(rendered.lines.len()).unwrap_or(u16::MAX);
    let scroll = app.scroll().min(content_rows.saturating_sub(body.height));

    frame.render_widget(
        Paragraph::new(rendered.lines)
            .style(Style::default().bg(SCREEN_BG))
            .scroll((scroll, 0)),
        body,
    );
    frame.render_widget(Footer::new().widget(footer), footer);

    Viewport {
        body,
        content_rows,
        cover_rows: rendered.cover_rows,
    }
}
