//! Photo data providers.
//!
//! The details screen only needs one operation: fetch a photo by id.
//! [`PhotoProvider`] is the seam; [`UnsplashClient`] is the HTTP
//! implementation and tests substitute their own.

mod error;
mod unsplash;

use async_trait::async_trait;

use crate::model::PhotoRecord;

pub use error::ProviderError;
pub use unsplash::UnsplashClient;

/// Source of photo details.
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch the details of the photo with the given id.
    ///
    /// Resolves exactly once. A successful result may hold zero, one or
    /// more records; callers decide what an empty result means.
    async fn fetch_photo_details(&self, id: &str) -> Result<Vec<PhotoRecord>, ProviderError>;
}
