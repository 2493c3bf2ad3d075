//! Shared application state.

use std::sync::Arc;

use crate::cache::CachedMotisClient;
use crate::network::NetworkCatalog;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached MOTIS client for planning and geocoding.
    pub motis: Arc<CachedMotisClient>,

    /// The static network model.
    pub catalog: Arc<NetworkCatalog>,
}

impl AppState {
    /// Create the application state.
    pub fn new(motis: CachedMotisClient, catalog: NetworkCatalog) -> Self {
        Self {
            motis: Arc::new(motis),
            catalog: Arc::new(catalog),
        }
    }
}
