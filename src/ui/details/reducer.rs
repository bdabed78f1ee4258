//! Reducer for the details screen.

use crate::details::DetailsError;
use crate::ui::mvi::Reducer;

use super::intent::DetailsIntent;
use super::state::DetailsState;

pub struct DetailsReducer;

impl Reducer for DetailsReducer {
    type State = DetailsState;
    type Intent = DetailsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.is_terminal() {
            return state;
        }

        match intent {
            DetailsIntent::Fetched { records } => match records.into_iter().next() {
                Some(record) => DetailsState::Loaded {
                    record: Box::new(record),
                },
                None => DetailsState::Error {
                    message: DetailsError::NotFound.to_string(),
                },
            },

            DetailsIntent::Failed { error } => DetailsState::Error {
                message: error.to_string(),
            },
        }
    }
}
