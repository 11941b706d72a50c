//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::DatasetStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate dataset.
    pub store: Arc<DatasetStore>,
}

impl AppState {
    /// Create a new application state over the given dataset store.
    pub fn new(store: Arc<DatasetStore>) -> Self {
        Self { store }
    }
}
