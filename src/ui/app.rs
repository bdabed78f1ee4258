use ratatui::layout::Rect;
use tokio::sync::watch;

use crate::images::{ImageFetcher, ImageStore};
use crate::ui::details::DetailsState;

/// Callback fired when the cover is activated.
pub type ActionHook = Box<dyn Fn() + Send>;

/// Geometry of the last drawn frame, fed back after every draw.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Viewport {
    /// Area the details are drawn into.
    pub body: Rect,
    /// Total number of rendered lines.
    pub content_rows: u16,
    /// Leading lines that belong to the cover image.
    pub cover_rows: u16,
}

pub struct App {
    should_quit: bool,
    details: watch::Receiver<DetailsState>,
    images: Option<ImageStore>,
    fetcher: Option<ImageFetcher>,
    scroll: u16,
    viewport: Viewport,
    on_action: ActionHook,
}

impl App {
    pub fn new(details: watch::Receiver<DetailsState>) -> Self {
        Self {
            should_quit: false,
            details,
            images: None,
            fetcher: None,
            scroll: 0,
            viewport: Viewport::default(),
            on_action: Box::new(|| {}),
        }
    }

    /// Enable the cover and avatar. Without a fetcher the store is only
    /// read, which is what tests use.
    pub fn with_images(mut self, store: ImageStore, fetcher: Option<ImageFetcher>) -> Self {
        self.images = Some(store);
        self.fetcher = fetcher;
        self
    }

    pub fn set_action_hook<F>(&mut self, hook: F)
    where
        F: Fn() + Send + 'static,
    {
        self.on_action = Box::new(hook);
    }

    pub fn details(&self) -> watch::Ref<'_, DetailsState> {
        self.details.borrow()
    }

    pub fn images(&self) -> Option<&ImageStore> {
        self.images.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn page_size(&self) -> u16 {
        self.viewport.body.height.max(1)
    }

    fn max_scroll(&self) -> u16 {
        self.viewport
            .content_rows
            .saturating_sub(self.viewport.body.height)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Record the geometry of the frame that was just drawn.
    pub fn on_draw(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// React to a newly published details state: start the image loads
    /// for a loaded photo.
    pub fn on_details_changed(&mut self) {
        let state = self.details.borrow_and_update();
        let urls: Vec<String> = state
            .record()
            .map(|record| {
                [record.cover_url(), record.avatar_url()]
                    .into_iter()
                    .flatten()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        drop(state);

        if let Some(fetcher) = &self.fetcher {
            for url in &urls {
                fetcher.request(url);
            }
        }
    }

    /// Fire the action hook. Only a loaded photo has a cover to act on.
    pub fn trigger_action(&self) {
        if self.details.borrow().record().is_some() {
            tracing::debug!("Cover action triggered");
            (self.on_action)();
        }
    }

    /// Whether the terminal cell at (`column`, `row`) shows the cover.
    pub fn is_cover_hit(&self, column: u16, row: u16) -> bool {
        let body = self.viewport.body;
        let inside = column >= body.x
            && column < body.x.saturating_add(body.width)
            && row >= body.y
            && row < body.y.saturating_add(body.height);
        if !inside {
            return false;
        }
        let content_row = (row - body.y).saturating_add(self.scroll);
        content_row < self.viewport.cover_rows
    }
}
