//! Marker trait for screen state.

/// Screen state published to the renderer.
///
/// `Default` is the initial state, `PartialEq` lets observers skip
/// redundant redraws, and `Send` lets the state cross from the network
/// task to the UI thread.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
