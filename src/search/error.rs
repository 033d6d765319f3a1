//! Search error taxonomy

use thiserror::Error;

/// Errors surfaced by the search path
///
/// The `Display` text of each variant is exactly the `msg` callers see in
/// the response body.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The caller did not supply a query
    #[error("q parameter is required")]
    MissingQuery,

    /// The caller supplied an unusable result limit
    #[error("per_page must be a positive integer")]
    InvalidPerPage,

    /// The upstream call failed at the transport level
    #[error("Search error")]
    Transport(anyhow::Error),

    /// The upstream body could not be decoded
    #[error("Search error")]
    Decode(#[source] serde_json::Error),

    /// The upstream answered with an unexpected status
    #[error("Received {status} for q={query}")]
    UpstreamStatus { status: u16, query: String },
}

impl SearchError {
    /// Whether the error is the caller's fault (400) rather than an
    /// upstream failure (500)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingQuery | Self::InvalidPerPage)
    }
}
