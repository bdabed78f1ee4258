use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::config::Config;
use crate::details::{spawn_details_fetch, DetailsStore};
use crate::images::{HttpImageLoader, ImageFetcher, ImageStore};
use crate::provider::{PhotoProvider, UnsplashClient};
use crate::ui::app::{App, Viewport};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Inputs for one run of the details screen.
pub struct RunOptions {
    pub config: Config,
    pub photo_id: Option<String>,
    pub show_images: bool,
}

/// Open the details screen for `options.photo_id` and block until the
/// user quits.
pub fn run(options: RunOptions) -> anyhow::Result<()> {
    let RunOptions {
        config,
        photo_id,
        show_images,
    } = options;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("unsplash-worker")
        .build()
        .context("Failed to start async runtime")?;

    let provider: Arc<dyn PhotoProvider> =
        Arc::new(UnsplashClient::new(&config.api).context("Failed to build Unsplash client")?);
    let store = DetailsStore::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(store.subscribe());
    if show_images {
        let images = ImageStore::new();
        let loader =
            Arc::new(HttpImageLoader::new(&config.api).context("Failed to build image client")?);
        let image_tx = events.sender();
        let fetcher = ImageFetcher::new(runtime.handle().clone(), loader, images.clone(), move || {
            let _ = image_tx.send(AppEvent::ImageLoaded);
        });
        app = app.with_images(images, Some(fetcher));
    }
    app.set_action_hook(|| tracing::info!("Cover opened"));

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;

    let details_tx = events.sender();
    spawn_details_fetch(runtime.handle(), provider, photo_id, store, move || {
        let _ = details_tx.send(AppEvent::DetailsChanged);
    });

    loop {
        let mut viewport = Viewport::default();
        terminal.draw(|frame| viewport = draw(frame, &app))?;
        app.on_draw(viewport);
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::DetailsChanged) => app.on_details_changed(),
            Ok(AppEvent::Resize(..) | AppEvent::Tick | AppEvent::ImageLoaded) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    tracing::info!("Details screen closed");
    Ok(())
}
