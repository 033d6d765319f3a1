//! Guides Searcher: HTTP middleware in front of the Guides search API
//!
//! Accepts search requests on `/search`, forwards them to the upstream
//! Guides provider and reshapes the response into a simplified contract.

pub mod config;
pub mod network;
pub mod results;
pub mod search;
pub mod upstream;
pub mod web;

pub use config::Settings;
pub use results::SearchResponse;
pub use search::{Search, SearchError, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of results returned when `per_page` is not given
pub const DEFAULT_PER_PAGE: usize = 3;

/// Upper bound on `per_page`; larger values are clamped
pub const MAX_PER_PAGE: usize = 50;

/// Default timeout for upstream requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;
