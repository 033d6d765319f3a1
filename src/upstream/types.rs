//! Upstream request/response carriers and record types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP request to be made against the upstream API
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    /// URL to request
    pub url: String,
    /// Query parameters
    pub params: HashMap<String, String>,
}

impl UpstreamRequest {
    /// Create a GET request description
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: HashMap::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// HTTP response from an upstream request
#[derive(Debug)]
pub struct UpstreamResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl UpstreamResponse {
    /// Parse the response body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.text)
    }
}

/// A single record as returned by the Guides search API
///
/// Missing string fields decode as empty; `friendly_url` stays optional so
/// the link resolution rule can tell absent from empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidesRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub friendly_url: Option<String>,
}

impl GuidesRecord {
    /// Pick the link to expose: `friendly_url` when present and non-empty,
    /// `url` otherwise
    pub fn resolve_link(&self) -> &str {
        match self.friendly_url.as_deref() {
            Some(friendly) if !friendly.is_empty() => friendly,
            _ => &self.url,
        }
    }
}
