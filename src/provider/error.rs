use thiserror::Error;

/// Errors reported by a [`PhotoProvider`](super::PhotoProvider).
///
/// The details screen shows `to_string()` of these verbatim.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No access key in the config or the environment.
    #[error("Unsplash access key is not configured (set api.access_key or UNSPLASH_ACCESS_KEY)")]
    MissingAccessKey,

    /// The request URL could not be built from the base URL and id.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Transport failure (DNS, connect, timeout, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not a photo payload.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ProviderError::MissingAccessKey => "missing_access_key",
            ProviderError::InvalidUrl(_) => "invalid_url",
            ProviderError::Request(_) => "request_error",
            ProviderError::Status { .. } => "status_error",
            ProviderError::Decode(_) => "decode_error",
        }
    }
}
