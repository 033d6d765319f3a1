//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search executor
    pub search: Arc<Search>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let search = Arc::new(Search::new(client, &settings));

        Self {
            settings: Arc::new(settings),
            search,
        }
    }
}
