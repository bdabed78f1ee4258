//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_unsplash;

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ratatui::text::Line;
use tempfile::TempDir;
use unsplash_details::model::{Author, ExifInfo, ImageUrls, PhotoRecord, ProfileImage};
use unsplash_details::provider::{PhotoProvider, ProviderError};

/// The La Sagrada Familia record used across render tests.
pub fn sagrada_familia() -> PhotoRecord {
    PhotoRecord {
        id: Some("1".to_string()),
        description: Some("La Sagrada Familia".to_string()),
        width: Some(3024),
        height: Some(4032),
        views: Some(123_456),
        downloads: Some(7890),
        likes: Some(1234),
        exif: Some(ExifInfo {
            model: Some("Canon EOS R".to_string()),
            aperture: Some("f/2.8".to_string()),
            focal_length: Some("24mm".to_string()),
            exposure_time: Some("1/200".to_string()),
            iso: Some(100),
            ..ExifInfo::default()
        }),
        ..PhotoRecord::default()
    }
}

/// Same record with an author and image URLs filled in.
pub fn sagrada_familia_with_images() -> PhotoRecord {
    PhotoRecord {
        user: Some(Author {
            name: Some("Ana Lopez".to_string()),
            username: Some("analopez".to_string()),
            profile_image: Some(ProfileImage {
                medium: Some("https://images.test/avatar.png".to_string()),
                ..ProfileImage::default()
            }),
        }),
        urls: Some(ImageUrls {
            regular: Some("https://images.test/cover.png".to_string()),
            ..ImageUrls::default()
        }),
        ..sagrada_familia()
    }
}

/// JSON body as the API sends it for [`sagrada_familia_with_images`].
pub fn sagrada_familia_json() -> String {
    serde_json::json!({
        "id": "1",
        "description": "La Sagrada Familia",
        "width": 3024,
        "height": 4032,
        "views": 123456,
        "downloads": 7890,
        "likes": 1234,
        "sponsorship": null,
        "user": {
            "name": "Ana Lopez",
            "username": "analopez",
            "profile_image": { "medium": "https://images.test/avatar.png" }
        },
        "urls": { "regular": "https://images.test/cover.png" },
        "exif": {
            "model": "Canon EOS R",
            "aperture": "f/2.8",
            "focal_length": "24mm",
            "exposure_time": "1/200",
            "iso": 100
        }
    })
    .to_string()
}

/// What a provider stub answers.
pub enum StubOutcome {
    Records(Vec<PhotoRecord>),
    Fail(u16, String),
}

/// Provider that counts calls and answers with a fixed outcome.
pub struct StubProvider {
    outcome: StubOutcome,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn records(records: Vec<PhotoRecord>) -> Self {
        Self::new(StubOutcome::Records(records))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(StubOutcome::Fail(status, message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PhotoProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn fetch_photo_details(&self, _id: &str) -> Result<Vec<PhotoRecord>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Records(records) => Ok(records.clone()),
            StubOutcome::Fail(status, message) => Err(ProviderError::Status {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// Concatenated span text of one line.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// All lines as trimmed text.
pub fn lines_text(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line_text(line).trim_end().to_string())
        .collect()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
