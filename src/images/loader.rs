use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;

use super::{DecodedImage, ImageError, ImageLoader};

/// Downloads images over HTTP and decodes them on the blocking pool.
pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    pub fn new(api: &ApiConfig) -> Result<Self, ImageError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(api.timeout_seconds.into()))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<DecodedImage, ImageError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(url, bytes = bytes.len(), "Image downloaded");

        tokio::task::spawn_blocking(move || DecodedImage::from_bytes(&bytes)).await?
    }
}
