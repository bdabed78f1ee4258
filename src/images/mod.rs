//! Network images for the details screen.
//!
//! Images are downloaded and decoded off the UI thread by an
//! [`ImageLoader`]. Results land in a shared [`ImageStore`] keyed by URL,
//! which the renderer reads synchronously on every frame.

mod halfblock;
mod loader;
mod store;

use async_trait::async_trait;
use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;

pub use halfblock::{halfblock_lines, Shape};
pub use loader::HttpImageLoader;
pub use store::{ImageFetcher, ImageSlot, ImageStore};

/// Longest edge kept after decoding. Terminal cells never need more.
const MAX_DECODED_EDGE: u32 = 512;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Image request returned HTTP {status}")]
    Status { status: u16 },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image decoding task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A decoded image, downscaled to at most [`MAX_DECODED_EDGE`] pixels.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
}

impl DecodedImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        let image = if image.width() > MAX_DECODED_EDGE || image.height() > MAX_DECODED_EDGE {
            image.resize(MAX_DECODED_EDGE, MAX_DECODED_EDGE, FilterType::Triangle)
        } else {
            image
        };
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub(crate) fn image(&self) -> &DynamicImage {
        &self.image
    }
}

/// Asynchronous image source.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<DecodedImage, ImageError>;
}
