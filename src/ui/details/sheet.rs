//! Field formatting for a loaded photo.
//!
//! Every optional field falls back to [`PLACEHOLDER`] on its own; a
//! missing field never hides its neighbours.

use crate::model::{ExifInfo, PhotoRecord};
use crate::ui::strings::{
    INFO_APERTURE, INFO_CAMERA, INFO_DIMENSIONS, INFO_DOWNLOADS, INFO_FOCAL_LENGTH, INFO_ISO,
    INFO_LIKES, INFO_SHUTTER_SPEED, INFO_VIEWS, PHOTO_FALLBACK,
};

/// Shown for any absent field.
pub const PLACEHOLDER: &str = "-";

/// A label with its formatted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

/// Two fields side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub left: Field,
    pub right: Field,
}

/// Everything the loaded branch draws, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSheet {
    pub cover_url: Option<String>,
    /// Shown in the cover area until the image is drawn.
    pub cover_caption: String,
    /// Photo width and height, used for the cover aspect ratio.
    pub cover_size: Option<(u32, u32)>,
    pub avatar_url: Option<String>,
    pub author: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Camera/aperture, focal length/shutter speed, ISO/dimensions.
    pub info_rows: [InfoRow; 3],
    /// Views, downloads, likes.
    pub summary: [Field; 3],
}

impl PhotoSheet {
    pub fn from_record(record: &PhotoRecord) -> Self {
        let exif = record.exif.as_ref();

        let description = record
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Self {
            cover_url: record.cover_url().map(str::to_string),
            cover_caption: description
                .clone()
                .unwrap_or_else(|| PHOTO_FALLBACK.to_string()),
            cover_size: record.dimensions(),
            avatar_url: record.avatar_url().map(str::to_string),
            author: or_placeholder(record.author_name()),
            description,
            location: record.location.as_ref().and_then(|l| l.label()),
            info_rows: [
                InfoRow {
                    left: field(INFO_CAMERA, exif_text(exif, |e| e.model.as_deref())),
                    right: field(INFO_APERTURE, exif_text(exif, |e| e.aperture.as_deref())),
                },
                InfoRow {
                    left: field(
                        INFO_FOCAL_LENGTH,
                        exif_text(exif, |e| e.focal_length.as_deref()),
                    ),
                    right: field(
                        INFO_SHUTTER_SPEED,
                        exif_text(exif, |e| e.exposure_time.as_deref()),
                    ),
                },
                InfoRow {
                    left: field(INFO_ISO, or_placeholder(exif.and_then(|e| e.iso))),
                    right: field(
                        INFO_DIMENSIONS,
                        format_dimensions(record.width, record.height),
                    ),
                },
            ],
            summary: [
                field(INFO_VIEWS, or_placeholder(record.views)),
                field(INFO_DOWNLOADS, or_placeholder(record.downloads)),
                field(INFO_LIKES, or_placeholder(record.likes)),
            ],
        }
    }
}

fn exif_text(exif: Option<&ExifInfo>, pick: impl Fn(&ExifInfo) -> Option<&str>) -> String {
    or_placeholder(exif.and_then(pick))
}

fn field(label: &'static str, value: String) -> Field {
    Field { label, value }
}

/// `value.to_string()`, or the placeholder when absent.
pub fn or_placeholder<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `"<width> x <height>"` when both are known.
pub fn format_dimensions(width: Option<u32>, height: Option<u32>) -> String {
    match (width, height) {
        (Some(width), Some(height)) => format!("{} x {}", width, height),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;

    #[test]
    fn empty_record_is_all_placeholders() {
        let sheet = PhotoSheet::from_record(&PhotoRecord::default());
        assert_eq!(sheet.author, PLACEHOLDER);
        assert_eq!(sheet.cover_caption, PHOTO_FALLBACK);
        assert!(sheet.cover_url.is_none());
        assert!(sheet.avatar_url.is_none());
        for row in &sheet.info_rows {
            assert_eq!(row.left.value, PLACEHOLDER);
            assert_eq!(row.right.value, PLACEHOLDER);
        }
        for cell in &sheet.summary {
            assert_eq!(cell.value, PLACEHOLDER);
        }
    }

    #[test]
    fn dimensions_format() {
        assert_eq!(format_dimensions(Some(3024), Some(4032)), "3024 x 4032");
        assert_eq!(format_dimensions(Some(3024), None), PLACEHOLDER);
        assert_eq!(format_dimensions(None, Some(4032)), PLACEHOLDER);
    }

    #[test]
    fn partial_exif_keeps_siblings() {
        let record = PhotoRecord {
            exif: Some(ExifInfo {
                aperture: Some("f/1.8".into()),
                iso: Some(400),
                ..ExifInfo::default()
            }),
            user: Some(Author {
                name: Some("Ann".into()),
                ..Author::default()
            }),
            likes: Some(0),
            ..PhotoRecord::default()
        };
        let sheet = PhotoSheet::from_record(&record);

        assert_eq!(sheet.author, "Ann");
        assert_eq!(sheet.info_rows[0].left.value, PLACEHOLDER);
        assert_eq!(sheet.info_rows[0].right.value, "f/1.8");
        assert_eq!(sheet.info_rows[2].left.value, "400");
        assert_eq!(sheet.summary[2].value, "0");
        assert_eq!(sheet.summary[0].value, PLACEHOLDER);
    }

    #[test]
    fn blank_description_uses_fallback_caption() {
        let record = PhotoRecord {
            description: Some("   ".into()),
            ..PhotoRecord::default()
        };
        let sheet = PhotoSheet::from_record(&record);
        assert_eq!(sheet.description, None);
        assert_eq!(sheet.cover_caption, PHOTO_FALLBACK);
    }
}
