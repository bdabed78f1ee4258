use ratatui::style::Color;

pub const SCREEN_BG: Color = Color::Black;
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DIVIDER: Color = Color::Gray;
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const PLACEHOLDER_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
