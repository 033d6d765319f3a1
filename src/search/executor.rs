//! Search execution

use super::error::SearchError;
use super::models::SearchQuery;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::results::{render_results, SearchResponse};
use crate::upstream::GuidesUpstream;
use tracing::{debug, error};

/// Executes searches against the upstream Guides API
pub struct Search {
    client: HttpClient,
    upstream: GuidesUpstream,
    no_results_url: String,
    module_url: String,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, settings: &Settings) -> Self {
        Self {
            client,
            upstream: GuidesUpstream::new(&settings.upstream),
            no_results_url: settings.upstream.no_results_url.clone(),
            module_url: settings.upstream.module_url.clone(),
        }
    }

    /// Run a validated query end to end
    pub async fn execute(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let request = self.upstream.request(&query.query);

        let response = match self.client.execute(&request).await {
            Ok(response) => response,
            Err(err) => {
                error!(
                    "Search error at url={}, params={:?}: {:#}",
                    request.url, request.params, err
                );
                return Err(SearchError::Transport(err));
            }
        };

        debug!("Submitted url={}, params={:?}", request.url, request.params);
        debug!("Received response {}", response.status);

        let records = match self.upstream.parse(&response, &query.query) {
            Ok(records) => records,
            Err(err) => {
                if let SearchError::UpstreamStatus { status, query } = &err {
                    error!("Received {} with q={}", status, query);
                } else {
                    error!(
                        "Failed to decode upstream response from {}: {:?}",
                        response.url, err
                    );
                }
                return Err(err);
            }
        };

        let total = records.len();
        // The module link keeps the query verbatim, unencoded
        let module_link = format!("{}{}", self.module_url, query.query);
        let results = render_results(&records, query.per_page);

        Ok(SearchResponse::success(
            &query.query,
            query.per_page,
            total,
            module_link,
            results,
            &self.no_results_url,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(base_url: &str) -> Settings {
        let mut settings = Settings::default();
        settings.upstream.base_url = base_url.to_string();
        settings.upstream.site_id = "42".to_string();
        settings.upstream.api_key = "secret".to_string();
        settings.upstream.no_results_url = "https://library.example.edu/guides".to_string();
        settings.upstream.module_url = "https://library.example.edu/search?q=".to_string();
        settings
    }

    fn search_for(base_url: &str) -> Search {
        let settings = settings_for(base_url);
        let client = HttpClient::with_settings(&settings.outgoing).unwrap();
        Search::new(client, &settings)
    }

    #[tokio::test]
    async fn test_execute_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("site_id", "42"))
            .and(query_param("search_terms", "rust"))
            .and(query_param("key", "secret"))
            .and(query_param("sort_by", "relevance"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "A", "description": "a", "url": "https://a"},
                {"name": "B", "description": "b", "url": "https://b"},
            ])))
            .mount(&server)
            .await;

        let search = search_for(&server.uri());
        let response = search.execute(&SearchQuery::new("rust")).await.unwrap();

        assert_eq!(response.total, Some(2));
        assert_eq!(
            response.module_link.as_deref(),
            Some("https://library.example.edu/search?q=rust")
        );
        let results = response.results.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "A");
    }

    #[tokio::test]
    async fn test_execute_maps_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let search = search_for(&server.uri());
        let err = search.execute(&SearchQuery::new("rust")).await.unwrap_err();

        assert!(matches!(err, SearchError::UpstreamStatus { status: 503, .. }));
        assert_eq!(err.to_string(), "Received 503 for q=rust");
    }

    #[tokio::test]
    async fn test_execute_maps_transport_failure() {
        // Nothing listens here; the connection is refused immediately
        let search = search_for("http://127.0.0.1:1");
        let err = search.execute(&SearchQuery::new("rust")).await.unwrap_err();

        assert!(matches!(err, SearchError::Transport(_)));
        assert_eq!(err.to_string(), "Search error");
    }
}
