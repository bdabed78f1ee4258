use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;

use super::{DecodedImage, ImageError, ImageLoader};

/// Load state of one image URL.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Pending,
    Ready(Arc<DecodedImage>),
    /// The renderer shows a broken-image placeholder.
    Failed,
}

/// Shared URL -> image map written by loader tasks and read by the renderer.
#[derive(Clone, Default)]
pub struct ImageStore {
    slots: Arc<Mutex<HashMap<String, ImageSlot>>>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<ImageSlot> {
        self.slots.lock().get(url).cloned()
    }

    /// Mark `url` as pending. Returns false if it was already known.
    pub fn begin(&self, url: &str) -> bool {
        let mut slots = self.slots.lock();
        if slots.contains_key(url) {
            return false;
        }
        slots.insert(url.to_string(), ImageSlot::Pending);
        true
    }

    pub fn finish(&self, url: &str, result: Result<DecodedImage, ImageError>) {
        let slot = match result {
            Ok(image) => ImageSlot::Ready(Arc::new(image)),
            Err(_) => ImageSlot::Failed,
        };
        self.slots.lock().insert(url.to_string(), slot);
    }
}

/// Spawns one load per distinct URL and reports completion through
/// `notify`.
#[derive(Clone)]
pub struct ImageFetcher {
    handle: Handle,
    loader: Arc<dyn ImageLoader>,
    store: ImageStore,
    notify: Arc<dyn Fn() + Send + Sync>,
}

impl ImageFetcher {
    pub fn new<F>(
        handle: Handle,
        loader: Arc<dyn ImageLoader>,
        store: ImageStore,
        notify: F,
    ) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            handle,
            loader,
            store,
            notify: Arc::new(notify),
        }
    }

    pub fn request(&self, url: &str) {
        if !self.store.begin(url) {
            return;
        }

        let url = url.to_string();
        let loader = Arc::clone(&self.loader);
        let store = self.store.clone();
        let notify = Arc::clone(&self.notify);
        tracing::debug!(url = %url, "Loading image");

        self.handle.spawn(async move {
            let result = loader.load(&url).await;
            if let Err(err) = &result {
                tracing::warn!(url = %url, error = %err, "Image load failed");
            }
            store.finish(&url, result);
            notify();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use image::{DynamicImage, RgbImage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLoader {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageLoader for CountingLoader {
        async fn load(&self, url: &str) -> Result<DecodedImage, ImageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if url.ends_with("broken.jpg") {
                return Err(ImageError::Status { status: 404 });
            }
            Ok(DecodedImage::from_image(DynamicImage::ImageRgb8(
                RgbImage::new(4, 4),
            )))
        }
    }

    #[test]
    fn begin_only_once_per_url() {
        let store = ImageStore::new();
        assert!(store.begin("a"));
        assert!(!store.begin("a"));
        assert!(matches!(store.get("a"), Some(ImageSlot::Pending)));
        assert!(store.get("b").is_none());
    }

    #[tokio::test]
    async fn fetcher_loads_each_url_once_and_notifies() {
        let loader = Arc::new(CountingLoader {
            calls: AtomicUsize::new(0),
        });
        let store = ImageStore::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let fetcher = ImageFetcher::new(Handle::current(), loader.clone(), store.clone(), move || {
            let _ = tx.send(());
        });

        fetcher.request("https://img/ok.jpg");
        fetcher.request("https://img/ok.jpg");
        fetcher.request("https://img/broken.jpg");

        rx.recv().await.unwrap();
        rx.recv().await.unwrap();

        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
        assert!(matches!(
            store.get("https://img/ok.jpg"),
            Some(ImageSlot::Ready(_))
        ));
        assert!(matches!(
            store.get("https://img/broken.jpg"),
            Some(ImageSlot::Failed)
        ));
    }
}
