//! Shared application state for the API server.
//!
//! [`AppState`] owns the handle to the [`LocationStore`] and the base path
//! the routes are mounted beneath. It is wrapped in [`Arc`] and injected
//! via Axum's `State` extractor; nothing else holds the store.

use std::sync::Arc;

use consultant_core::LocationStore;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single current location collection.
    pub store: Arc<LocationStore>,
    /// Normalized mount prefix (`None` means routes sit at the root).
    pub base_path: Option<String>,
}

impl AppState {
    /// Create state around `store`, mounted at the root.
    pub const fn new(store: Arc<LocationStore>) -> Self {
        Self {
            store,
            base_path: None,
        }
    }

    /// Create state around `store`, mounted beneath `base_path`.
    ///
    /// `base_path` should already be normalized, see
    /// [`ServerSection::normalized_base_path`](consultant_core::ServerSection::normalized_base_path).
    pub const fn with_base_path(store: Arc<LocationStore>, base_path: Option<String>) -> Self {
        Self { store, base_path }
    }

    /// Prefix a route path with the configured base path.
    pub fn full_path(&self, path: &str) -> String {
        match &self.base_path {
            Some(base) => format!("{base}{path}"),
            None => path.to_owned(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(LocationStore::new()))
    }
}
