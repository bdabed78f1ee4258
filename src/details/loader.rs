use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::provider::PhotoProvider;
use crate::ui::details::DetailsIntent;

use super::error::DetailsError;
use super::store::DetailsStore;

/// Resolve the details for `photo_id` into a single intent.
///
/// Without an id the provider is never called. With one, it is called
/// exactly once and its error message is kept verbatim.
pub async fn load_details(provider: &dyn PhotoProvider, photo_id: Option<&str>) -> DetailsIntent {
    let Some(id) = photo_id else {
        tracing::warn!("Details screen opened without a photo id");
        return DetailsIntent::Failed {
            error: DetailsError::MissingInput,
        };
    };

    tracing::info!(photo_id = id, provider = provider.name(), "Fetching photo details");

    match provider.fetch_photo_details(id).await {
        Ok(records) => {
            tracing::info!(photo_id = id, records = records.len(), "Photo details fetched");
            DetailsIntent::Fetched { records }
        }
        Err(err) => {
            tracing::warn!(
                photo_id = id,
                error_type = err.error_type(),
                error = %err,
                "Photo details fetch failed"
            );
            DetailsIntent::Failed {
                error: DetailsError::FetchFailed(err.to_string()),
            }
        }
    }
}

/// Run [`load_details`] on `handle`, dispatch the result into `store`,
/// then call `notify`.
pub fn spawn_details_fetch<F>(
    handle: &Handle,
    provider: Arc<dyn PhotoProvider>,
    photo_id: Option<String>,
    store: DetailsStore,
    notify: F,
) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    handle.spawn(async move {
        let intent = load_details(provider.as_ref(), photo_id.as_deref()).await;
        store.dispatch(intent);
        notify();
    })
}
