//! Photo data returned by the Unsplash API.

mod photo;

pub use photo::{Author, ExifInfo, ImageUrls, LocationInfo, PhotoLinks, PhotoRecord, ProfileImage};
