use thiserror::Error;

/// Why the details screen shows an error.
///
/// The `Display` text is exactly what follows the error prefix on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailsError {
    /// The screen was opened without a photo id.
    #[error("No photo id")]
    MissingInput,

    /// The provider failed; its message is passed through untouched.
    #[error("{0}")]
    FetchFailed(String),

    /// The provider succeeded but returned no records.
    #[error("No photo found")]
    NotFound,
}
