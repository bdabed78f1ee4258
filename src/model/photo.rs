use serde::{Deserialize, Serialize};

/// A single photo as returned by `GET /photos/{id}`.
///
/// Every field is optional: the API omits or nulls fields freely
/// (EXIF in particular), and the screen renders a placeholder for
/// anything that is missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: Option<String>,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    /// Dominant color as a hex string (e.g. "#60544D").
    pub color: Option<String>,
    pub blur_hash: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub views: Option<u64>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
    pub liked_by_user: Option<bool>,
    pub user: Option<Author>,
    pub exif: Option<ExifInfo>,
    pub location: Option<LocationInfo>,
    pub urls: Option<ImageUrls>,
    pub links: Option<PhotoLinks>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Author {
    pub name: Option<String>,
    pub username: Option<String>,
    pub profile_image: Option<ProfileImage>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileImage {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
}

/// Camera metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExifInfo {
    pub make: Option<String>,
    pub model: Option<String>,
    pub name: Option<String>,
    pub exposure_time: Option<String>,
    pub aperture: Option<String>,
    pub focal_length: Option<String>,
    pub iso: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationInfo {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageUrls {
    pub raw: Option<String>,
    pub full: Option<String>,
    pub regular: Option<String>,
    pub small: Option<String>,
    pub thumb: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhotoLinks {
    pub html: Option<String>,
    pub download: Option<String>,
}

impl PhotoRecord {
    /// URL of the cover image: the `regular` rendition, else `small`.
    pub fn cover_url(&self) -> Option<&str> {
        let urls = self.urls.as_ref()?;
        urls.regular.as_deref().or(urls.small.as_deref())
    }

    pub fn author_name(&self) -> Option<&str> {
        self.user.as_ref()?.name.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.user.as_ref()?.profile_image.as_ref()?.medium.as_deref()
    }

    /// Width and height, only when both are known.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        Some((self.width?, self.height?))
    }
}

impl LocationInfo {
    /// Human-readable location: the full name, else "city, country".
    pub fn label(&self) -> Option<String> {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return Some(name.to_string());
        }
        let parts: Vec<&str> = [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}
