//! Non-interactive rendering for `--plain`.

use anyhow::Context;

use crate::config::Config;
use crate::details::load_details;
use crate::provider::UnsplashClient;
use crate::ui::details::{render_details, DetailsReducer, DetailsState, RenderContext};
use crate::ui::mvi::Reducer;

/// Width used for printed output.
pub const PLAIN_WIDTH: u16 = 72;

/// Fetch the photo once and return the settled state.
pub fn fetch_state(config: &Config, photo_id: Option<&str>) -> anyhow::Result<DetailsState> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let client = UnsplashClient::new(&config.api).context("Failed to build Unsplash client")?;

    let intent = runtime.block_on(load_details(&client, photo_id));
    Ok(DetailsReducer::reduce(DetailsState::default(), intent))
}

/// Render `state` as text, without images or styling.
pub fn render_plain(state: &DetailsState, width: u16) -> String {
    let ctx = RenderContext {
        images: None,
        width,
    };
    render_details(state, &ctx)
        .lines
        .iter()
        .map(|line| {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            text.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
