//! Renders the details state into styled lines.
//!
//! The output is a plain `Vec<Line>` so the caller can scroll it, print it,
//! or diff it in tests. Nothing here touches the terminal or the network;
//! images are only read from the [`ImageStore`].

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::images::{halfblock_lines, ImageSlot, ImageStore, Shape};
use crate::ui::strings::{ERROR_PREFIX, IMAGE_UNAVAILABLE, LOADING};
use crate::ui::theme::{DIVIDER, HEADER_TEXT, MUTED_TEXT, PLACEHOLDER_BG, STATUS_ERROR};

use super::sheet::{Field, InfoRow, PhotoSheet};
use super::state::DetailsState;

/// Tallest the cover may get; taller photos are cropped to fill.
pub const MAX_COVER_ROWS: u16 = 24;

/// Aspect ratio used when the photo has no dimensions.
const DEFAULT_ASPECT: (u32, u32) = (3, 2);

const AVATAR_COLS: u16 = 4;
const AVATAR_ROWS: u16 = 2;
const MARGIN: usize = 2;

/// Inputs the renderer needs besides the state.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// `None` disables the cover and avatar entirely.
    pub images: Option<&'a ImageStore>,
    /// Available width in cells.
    pub width: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDetails {
    pub lines: Vec<Line<'static>>,
    /// Number of leading lines occupied by the cover (the action target).
    pub cover_rows: u16,
}

pub fn render_details(state: &DetailsState, ctx: &RenderContext<'_>) -> RenderedDetails {
    match state {
        DetailsState::Loading => RenderedDetails {
            lines: vec![Line::styled(LOADING, Style::default().fg(HEADER_TEXT))],
            cover_rows: 0,
        },
        DetailsState::Error { message } => RenderedDetails {
            lines: wrap(&format!("{}{}", ERROR_PREFIX, message), usize::from(ctx.width))
                .into_iter()
                .map(|text| Line::styled(text, Style::default().fg(STATUS_ERROR)))
                .collect(),
            cover_rows: 0,
        },
        DetailsState::Loaded { record } => render_sheet(&PhotoSheet::from_record(record), ctx),
    }
}

fn render_sheet(sheet: &PhotoSheet, ctx: &RenderContext<'_>) -> RenderedDetails {
    let width = usize::from(ctx.width);
    let mut lines = Vec::new();

    let cover_rows = match ctx.images {
        Some(images) => {
            let rows = cover_rows(sheet.cover_size, ctx.width);
            lines.extend(cover_lines(sheet, images, ctx.width, rows));
            lines.push(Line::default());
            rows
        }
        None => 0,
    };

    lines.extend(author_lines(sheet, ctx.images));

    let inner = width.saturating_sub(MARGIN * 2);
    if let Some(description) = &sheet.description {
        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::ITALIC);
        lines.extend(indented(description, inner, style));
    }
    if let Some(location) = &sheet.location {
        lines.extend(indented(location, inner, Style::default().fg(MUTED_TEXT)));
    }

    for row in &sheet.info_rows {
        lines.push(Line::default());
        lines.extend(info_row_lines(row, width));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw(indent()),
        Span::styled("─".repeat(inner), Style::default().fg(DIVIDER)),
    ]));
    lines.push(Line::default());
    lines.extend(summary_lines(&sheet.summary, width));

    RenderedDetails { lines, cover_rows }
}

/// Cover height in cells for a full-width image of the given size.
/// Each cell holds two pixels vertically.
pub fn cover_rows(size: Option<(u32, u32)>, width: u16) -> u16 {
    let (w, h) = size
        .filter(|(w, h)| *w > 0 && *h > 0)
        .unwrap_or(DEFAULT_ASPECT);
    let rows = u64::from(width) * u64::from(h) / u64::from(w) / 2;
    rows.clamp(1, u64::from(MAX_COVER_ROWS)) as u16
}

fn cover_lines(
    sheet: &PhotoSheet,
    images: &ImageStore,
    width: u16,
    rows: u16,
) -> Vec<Line<'static>> {
    let slot = sheet.cover_url.as_deref().map(|url| images.get(url));
    match slot {
        Some(Some(ImageSlot::Ready(image))) => halfblock_lines(&image, width, rows, Shape::Rect),
        Some(Some(ImageSlot::Failed)) | None => placeholder_box(width, rows, IMAGE_UNAVAILABLE),
        Some(Some(ImageSlot::Pending)) | Some(None) => {
            placeholder_box(width, rows, &sheet.cover_caption)
        }
    }
}

fn placeholder_box(width: u16, rows: u16, caption: &str) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let fill = Style::default().bg(PLACEHOLDER_BG);
    let middle = rows / 2;
    (0..rows)
        .map(|row| {
            let text = if row == middle {
                center(caption, width)
            } else {
                " ".repeat(width)
            };
            Line::from(Span::styled(text, fill.fg(MUTED_TEXT)))
        })
        .collect()
}

fn author_lines(sheet: &PhotoSheet, images: Option<&ImageStore>) -> Vec<Line<'static>> {
    let name = Span::styled(
        sheet.author.clone(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    );

    let Some(images) = images else {
        return vec![Line::from(vec![Span::raw(indent()), name])];
    };

    let avatar = match sheet.avatar_url.as_deref().and_then(|url| images.get(url)) {
        Some(ImageSlot::Ready(image)) => {
            halfblock_lines(&image, AVATAR_COLS, AVATAR_ROWS, Shape::Circle)
        }
        _ => avatar_placeholder(),
    };

    avatar
        .into_iter()
        .enumerate()
        .map(|(row, avatar_line)| {
            let mut spans = vec![Span::raw(indent())];
            spans.extend(avatar_line.spans);
            if row == 0 {
                spans.push(Span::raw("  "));
                spans.push(name.clone());
            }
            Line::from(spans)
        })
        .collect()
}

fn avatar_placeholder() -> Vec<Line<'static>> {
    let style = Style::default().fg(PLACEHOLDER_BG);
    vec![
        Line::from(Span::styled("▄██▄", style)),
        Line::from(Span::styled("▀██▀", style)),
    ]
}

/// Two columns when every label and value fits its half, otherwise the
/// two fields stacked at full width.
fn info_row_lines(row: &InfoRow, width: usize) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(MARGIN * 2);
    let column = inner / 2;
    let fits = |text: &str| text.chars().count() < column;
    let fields = [&row.left, &row.right];

    if !fields.iter().all(|f| fits(f.label) && fits(&f.value)) {
        return fields
            .iter()
            .flat_map(|field| {
                let mut lines = indented(field.label, inner, label_style());
                lines.extend(indented(&field.value, inner, value_style()));
                lines
            })
            .collect();
    }

    vec![
        Line::from(vec![
            Span::raw(indent()),
            Span::styled(pad(row.left.label, column), label_style()),
            Span::styled(pad(row.right.label, column), label_style()),
        ]),
        Line::from(vec![
            Span::raw(indent()),
            Span::styled(pad(&row.left.value, column), value_style()),
            Span::styled(pad(&row.right.value, column), value_style()),
        ]),
    ]
}

fn summary_lines(summary: &[Field; 3], width: usize) -> Vec<Line<'static>> {
    let third = width / 3;
    let widths = [third, third, width.saturating_sub(third * 2)];
    let fits = summary.iter().zip(widths).all(|(field, column)| {
        field.label.chars().count() < column && field.value.chars().count() < column
    });

    if !fits {
        let style = Style::default().fg(HEADER_TEXT);
        return summary
            .iter()
            .flat_map(|field| {
                wrap(field.label, width)
                    .into_iter()
                    .chain(wrap(&field.value, width))
            })
            .map(|text| Line::from(Span::styled(center(&text, width), style)))
            .collect();
    }

    vec![
        summary_row(summary, widths, |f| f.label),
        summary_row(summary, widths, |f| f.value.as_str()),
    ]
}

fn summary_row(
    summary: &[Field; 3],
    widths: [usize; 3],
    text: impl Fn(&Field) -> &str,
) -> Line<'static> {
    let style = Style::default().fg(HEADER_TEXT);
    let spans: Vec<Span<'static>> = summary
        .iter()
        .zip(widths)
        .map(|(field, column)| Span::styled(center(text(field), column), style))
        .collect();
    Line::from(spans)
}

fn label_style() -> Style {
    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)
}

fn value_style() -> Style {
    Style::default().fg(HEADER_TEXT)
}

fn indent() -> String {
    " ".repeat(MARGIN)
}

/// `text` wrapped to `width` and shifted right by the margin.
fn indented(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|chunk| Line::from(vec![Span::raw(indent()), Span::styled(chunk, style)]))
        .collect()
}

/// Split `text` into lines of at most `width` chars, breaking at spaces
/// and hard-breaking words longer than a line. Nothing is dropped.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(chars.drain(..width).collect());
        }
        if chars.is_empty() {
            continue;
        }

        if current_len > 0 && current_len + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left-align `text` in `width` cells.
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(padding))
}

/// Center `text` in `width` cells, truncating if needed.
fn center(text: &str, width: usize) -> String {
    let shown: String = text.chars().take(width).collect();
    let len = shown.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), shown, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_rows_follow_aspect() {
        // 3024 x 4032 at 40 cells: 40 * 4/3 = 53 px tall -> 26 rows, capped.
        assert_eq!(cover_rows(Some((3024, 4032)), 40), MAX_COVER_ROWS);
        // Landscape 3:2 at 60 cells: 40 px -> 20 rows.
        assert_eq!(cover_rows(Some((3000, 2000)), 60), 20);
        assert_eq!(cover_rows(None, 60), 20);
        assert_eq!(cover_rows(Some((0, 10)), 60), 20);
        assert_eq!(cover_rows(Some((10_000, 10)), 80), 1);
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("ISO", 8), "ISO     ");
        assert_eq!(pad("Canon EOS R", 4), "Canon EOS R");
    }

    #[test]
    fn wrap_breaks_at_spaces() {
        assert_eq!(wrap("Canon EOS R5 Mark II", 10), vec!["Canon EOS", "R5 Mark II"]);
        assert_eq!(wrap("short", 10), vec!["short"]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn wrap_hard_breaks_long_words() {
        assert_eq!(
            wrap("url (https://a.test/photos/xyz)", 12),
            vec!["url", "(https://a.t", "est/photos/x", "yz)"]
        );
        assert_eq!(wrap("abc", 0), vec!["abc"]);
    }

    #[test]
    fn center_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("abcdef", 3), "abc");
    }

    #[test]
    fn placeholder_box_has_caption_in_the_middle() {
        let lines = placeholder_box(10, 3, "Photo");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].spans[0].content, "  Photo   ");
        assert_eq!(lines[0].spans[0].content, "          ");
    }
}
