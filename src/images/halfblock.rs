//! Draws an image into terminal cells with the upper half block.
//!
//! Each cell covers two vertically stacked pixels: the glyph `▀` takes the
//! top pixel as foreground and the bottom pixel as background.

use image::imageops::FilterType;
use image::Rgb;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::DecodedImage;

const UPPER_HALF: &str = "▀";
const LOWER_HALF: &str = "▄";

/// Outline applied to the drawn image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect,
    /// Pixels outside the inscribed circle are left blank.
    Circle,
}

/// Scale `image` to fill `cols` x `rows` cells, cropping the overflow.
pub fn halfblock_lines(
    image: &DecodedImage,
    cols: u16,
    rows: u16,
    shape: Shape,
) -> Vec<Line<'static>> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let px_width = u32::from(cols);
    let px_height = u32::from(rows) * 2;
    let filled = image
        .image()
        .resize_to_fill(px_width, px_height, FilterType::Triangle)
        .to_rgb8();

    let pixel = |x: u32, y: u32| -> Option<Rgb<u8>> {
        if shape == Shape::Circle && !inside_circle(x, y, px_width, px_height) {
            return None;
        }
        Some(filled.get_pixel_checked(x, y).copied().unwrap_or(Rgb([0, 0, 0])))
    };

    (0..u32::from(rows))
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..px_width)
                .map(|x| cell(pixel(x, row * 2), pixel(x, row * 2 + 1)))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn cell(top: Option<Rgb<u8>>, bottom: Option<Rgb<u8>>) -> Span<'static> {
    match (top, bottom) {
        (Some(top), Some(bottom)) => Span::styled(
            UPPER_HALF,
            Style::default().fg(to_color(top)).bg(to_color(bottom)),
        ),
        (Some(top), None) => Span::styled(UPPER_HALF, Style::default().fg(to_color(top))),
        (None, Some(bottom)) => Span::styled(LOWER_HALF, Style::default().fg(to_color(bottom))),
        (None, None) => Span::raw(" "),
    }
}

fn to_color(Rgb([r, g, b]): Rgb<u8>) -> Color {
    Color::Rgb(r, g, b)
}

/// Whether the center of pixel (x, y) lies in the ellipse inscribed in a
/// `width` x `height` grid.
fn inside_circle(x: u32, y: u32, width: u32, height: u32) -> bool {
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;
    let dx = (x as f32 + 0.5 - rx) / rx;
    let dy = (y as f32 + 0.5 - ry) / ry;
    dx * dx + dy * dy <= 1.0
}
