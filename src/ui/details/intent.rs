//! Intents for the details screen.

use crate::details::DetailsError;
use crate::model::PhotoRecord;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailsIntent {
    /// The provider answered. Only the first record is shown.
    Fetched { records: Vec<PhotoRecord> },

    /// Nothing to show: no id, or the provider failed.
    Failed { error: DetailsError },
}

impl Intent for DetailsIntent {}
