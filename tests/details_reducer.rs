mod common;

use common::sagrada_familia;
use unsplash_details::details::DetailsError;
use unsplash_details::model::PhotoRecord;
use unsplash_details::ui::details::{DetailsIntent, DetailsReducer, DetailsState};
use unsplash_details::ui::mvi::Reducer;

fn reduce(intent: DetailsIntent) -> DetailsState {
    DetailsReducer::reduce(DetailsState::default(), intent)
}

#[test]
fn initial_state_is_loading() {
    assert!(DetailsState::default().is_loading());
    assert!(!DetailsState::default().is_terminal());
}

#[test]
fn non_empty_success_loads_first_record() {
    let second = PhotoRecord {
        id: Some("2".to_string()),
        ..PhotoRecord::default()
    };
    let state = reduce(DetailsIntent::Fetched {
        records: vec![sagrada_familia(), second],
    });
    assert_eq!(state.record(), Some(&sagrada_familia()));
}

#[test]
fn empty_success_is_not_found() {
    let state = reduce(DetailsIntent::Fetched { records: vec![] });
    assert_eq!(state.error_message(), Some("No photo found"));
}

#[test]
fn missing_input_message() {
    let state = reduce(DetailsIntent::Failed {
        error: DetailsError::MissingInput,
    });
    assert_eq!(state.error_message(), Some("No photo id"));
}

#[test]
fn failure_message_is_kept_verbatim() {
    let state = reduce(DetailsIntent::Failed {
        error: DetailsError::FetchFailed("Rate Limit Exceeded".to_string()),
    });
    assert_eq!(state.error_message(), Some("Rate Limit Exceeded"));
}

#[test]
fn loaded_ignores_later_failure() {
    let loaded = reduce(DetailsIntent::Fetched {
        records: vec![sagrada_familia()],
    });
    let after = DetailsReducer::reduce(
        loaded.clone(),
        DetailsIntent::Failed {
            error: DetailsError::NotFound,
        },
    );
    assert_eq!(after, loaded);
}

#[test]
fn error_ignores_later_success() {
    let failed = reduce(DetailsIntent::Failed {
        error: DetailsError::MissingInput,
    });
    let after = DetailsReducer::reduce(
        failed.clone(),
        DetailsIntent::Fetched {
            records: vec![sagrada_familia()],
        },
    );
    assert_eq!(after, failed);
}
