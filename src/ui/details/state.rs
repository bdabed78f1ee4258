//! View state of the photo details screen.

use crate::model::PhotoRecord;
use crate::ui::mvi::UiState;

/// What the details screen currently shows.
///
/// Starts in `Loading` and moves at most once, to `Error` or `Loaded`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailsState {
    /// The fetch has not resolved yet.
    #[default]
    Loading,

    /// The fetch failed or there was nothing to fetch.
    Error {
        /// Message shown after the error prefix.
        message: String,
    },

    /// The photo arrived.
    Loaded {
        record: Box<PhotoRecord>,
    },
}

impl UiState for DetailsState {}

impl DetailsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `Error` and `Loaded` accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&PhotoRecord> {
        match self {
            Self::Loaded { record } => Some(record),
            _ => None,
        }
    }
}
