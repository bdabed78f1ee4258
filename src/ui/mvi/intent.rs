//! Marker trait for intents.

/// Something that happened and may change a screen's state.
///
/// Intents are produced off the UI thread (network tasks), so they must
/// be `Send`.
pub trait Intent: Send + 'static {}
