//! Fetch orchestration for the details screen.
//!
//! [`load_details`] turns an optional photo id into exactly one
//! [`DetailsIntent`]; [`DetailsStore`] folds it into the published
//! [`DetailsState`](crate::ui::details::DetailsState).

mod error;
mod loader;
mod store;

pub use error::DetailsError;
pub use loader::{load_details, spawn_details_fetch};
pub use store::DetailsStore;
