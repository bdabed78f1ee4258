//! User-facing text.

pub const APP_NAME: &str = "Unsplash";
pub const LOADING: &str = "Loading...";
pub const ERROR_PREFIX: &str = "Error: ";
pub const IMAGE_UNAVAILABLE: &str = "[image unavailable]";
/// Caption of the cover while it loads when the photo has no description.
pub const PHOTO_FALLBACK: &str = "Photo";

pub const INFO_CAMERA: &str = "Camera";
pub const INFO_APERTURE: &str = "Aperture";
pub const INFO_FOCAL_LENGTH: &str = "Focal length";
pub const INFO_SHUTTER_SPEED: &str = "Shutter speed";
pub const INFO_ISO: &str = "ISO";
pub const INFO_DIMENSIONS: &str = "Dimensions";

pub const INFO_VIEWS: &str = "Views";
pub const INFO_DOWNLOADS: &str = "Downloads";
pub const INFO_LIKES: &str = "Likes";
