//! Search query model

use super::error::SearchError;
use crate::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// The search query string, forwarded verbatim
    pub query: String,
    /// Result limit applied after the upstream call
    pub per_page: usize,
}

impl SearchQuery {
    /// Create a query with the default result limit
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the result limit
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.min(MAX_PER_PAGE);
        self
    }

    /// Build a query from raw parameter values as they arrive on the wire
    ///
    /// `q` must be present and non-empty. `per_page` that is absent or an
    /// empty string falls back to the default; otherwise it must parse as
    /// an integer >= 1 and is clamped to [`MAX_PER_PAGE`].
    pub fn from_params(q: Option<&str>, per_page: Option<&str>) -> Result<Self, SearchError> {
        let query = match q {
            Some(q) if !q.is_empty() => q,
            _ => return Err(SearchError::MissingQuery),
        };

        let per_page = match per_page {
            None | Some("") => DEFAULT_PER_PAGE,
            Some(raw) => {
                let parsed: i64 = raw.trim().parse().map_err(|_| SearchError::InvalidPerPage)?;
                if parsed < 1 {
                    return Err(SearchError::InvalidPerPage);
                }
                (parsed as usize).min(MAX_PER_PAGE)
            }
        };

        Ok(Self {
            query: query.to_string(),
            per_page,
        })
    }
}
