//! The photo details screen.
//!
//! Uses MVI:
//! - `state.rs` - `Loading` / `Error` / `Loaded`
//! - `intent.rs` - fetch outcomes
//! - `reducer.rs` - state transitions
//! - `sheet.rs` - field formatting
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod sheet;
mod state;
mod view;

pub use intent::DetailsIntent;
pub use reducer::DetailsReducer;
pub use sheet::{format_dimensions, or_placeholder, Field, InfoRow, PhotoSheet, PLACEHOLDER};
pub use state::DetailsState;
pub use view::{cover_rows, render_details, RenderContext, RenderedDetails, MAX_COVER_ROWS};
