//! Guides search API adapter

use super::types::{GuidesRecord, UpstreamRequest, UpstreamResponse};
use crate::config::UpstreamSettings;
use crate::search::SearchError;

/// Adapter for the upstream Guides search endpoint
pub struct GuidesUpstream {
    base_url: String,
    site_id: String,
    api_key: String,
}

impl GuidesUpstream {
    pub fn new(settings: &UpstreamSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            site_id: settings.site_id.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Build the search request for a query
    pub fn request(&self, query: &str) -> UpstreamRequest {
        UpstreamRequest::get(&self.base_url)
            .param("site_id", &self.site_id)
            .param("search_terms", query)
            .param("key", &self.api_key)
            .param("sort_by", "relevance")
    }

    /// Decode a search response into records
    ///
    /// The provider answers a well-formed search with 200 or 206; any other
    /// status is an upstream failure.
    pub fn parse(
        &self,
        response: &UpstreamResponse,
        query: &str,
    ) -> Result<Vec<GuidesRecord>, SearchError> {
        if !matches!(response.status, 200 | 206) {
            return Err(SearchError::UpstreamStatus {
                status: response.status,
                query: query.to_string(),
            });
        }

        response.json().map_err(SearchError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream() -> GuidesUpstream {
        GuidesUpstream::new(&UpstreamSettings {
            base_url: "https://lgapi-us.libapps.com/1.1/guides".to_string(),
            site_id: "42".to_string(),
            api_key: "secret".to_string(),
            no_results_url: String::new(),
            module_url: String::new(),
        })
    }

    fn response(status: u16, text: &str) -> UpstreamResponse {
        UpstreamResponse {
            status,
            text: text.to_string(),
            url: "https://lgapi-us.libapps.com/1.1/guides".to_string(),
        }
    }

    #[test]
    fn test_request_carries_search_parameters() {
        let request = upstream().request("organic chemistry");

        assert_eq!(request.url, "https://lgapi-us.libapps.com/1.1/guides");
        assert_eq!(request.params.get("site_id").unwrap(), "42");
        assert_eq!(request.params.get("search_terms").unwrap(), "organic chemistry");
        assert_eq!(request.params.get("key").unwrap(), "secret");
        assert_eq!(request.params.get("sort_by").unwrap(), "relevance");
    }

    #[test]
    fn test_parse_accepts_200_and_206() {
        let body = r#"[{"name": "A", "url": "https://a"}]"#;

        let records = upstream().parse(&response(200, body), "q").unwrap();
        assert_eq!(records.len(), 1);

        let records = upstream().parse(&response(206, body), "q").unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_rejects_other_statuses() {
        let err = upstream()
            .parse(&response(503, ""), "rust")
            .unwrap_err();
        assert_eq!(err.to_string(), "Received 503 for q=rust");
    }

    #[test]
    fn test_parse_rejects_malformed_body() {
        let err = upstream()
            .parse(&response(200, "<html>oops</html>"), "rust")
            .unwrap_err();
        assert_eq!(err.to_string(), "Search error");
    }
}
