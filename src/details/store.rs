use std::sync::Arc;

use tokio::sync::watch;

use crate::ui::details::{DetailsIntent, DetailsReducer, DetailsState};
use crate::ui::mvi::Reducer;

/// Observable holder of the details state.
///
/// Writers call [`dispatch`](Self::dispatch) from any thread; readers hold
/// a `watch::Receiver` and see the latest state on their next frame.
#[derive(Clone)]
pub struct DetailsStore {
    tx: Arc<watch::Sender<DetailsState>>,
}

impl Default for DetailsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailsStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DetailsState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> DetailsState {
        self.tx.borrow().clone()
    }

    /// Run the reducer on the current state and publish the result.
    pub fn dispatch(&self, intent: DetailsIntent) {
        self.tx.send_modify(|state| {
            *state = DetailsReducer::reduce(std::mem::take(state), intent);
        });
    }
}
