//! Response type definitions

use crate::upstream::GuidesRecord;
use serde::{Deserialize, Serialize};

/// Endpoint tag carried by every search response
pub const ENDPOINT: &str = "guides";

/// Item format tag attached to every rendered result
pub const ITEM_FORMAT_WEB_PAGE: &str = "web_page";

/// A single rendered search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponseItem {
    pub title: String,
    pub link: String,
    pub description: String,
    pub item_format: String,
}

impl SearchResponseItem {
    /// Render an upstream record, applying the link resolution rule
    pub fn from_record(record: &GuidesRecord) -> Self {
        Self {
            title: record.name.clone(),
            link: record.resolve_link().to_string(),
            description: record.description.clone(),
            item_format: ITEM_FORMAT_WEB_PAGE.to_string(),
        }
    }
}

/// Render upstream records in order, stopping after `limit` items
pub fn render_results(records: &[GuidesRecord], limit: usize) -> Vec<SearchResponseItem> {
    records
        .iter()
        .take(limit)
        .map(SearchResponseItem::from_record)
        .collect()
}

/// Error payload carried inside a response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_results_url: Option<String>,
}

impl ErrorPayload {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            no_results_url: None,
        }
    }

    /// The soft signal attached to a search that matched nothing
    pub fn no_results(no_results_url: impl Into<String>) -> Self {
        Self {
            msg: "No Results".to_string(),
            no_results_url: Some(no_results_url.into()),
        }
    }
}

/// Response body for `/search`
///
/// Three shapes share this struct: success carries every field except
/// (usually) `error`, upstream failure carries `endpoint`/`results`/`error`,
/// and validation failure carries `error` alone. Absent fields are omitted
/// from the serialized JSON rather than emitted as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SearchResponseItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

impl SearchResponse {
    /// Success-path response; attaches the no-results hint when the
    /// upstream matched nothing
    pub fn success(
        query: &str,
        per_page: usize,
        total: usize,
        module_link: String,
        results: Vec<SearchResponseItem>,
        no_results_url: &str,
    ) -> Self {
        let error = if total == 0 {
            Some(ErrorPayload::no_results(no_results_url))
        } else {
            None
        };

        Self {
            endpoint: Some(ENDPOINT.to_string()),
            query: Some(query.to_string()),
            per_page: Some(per_page),
            page: Some(1),
            total: Some(total),
            module_link: Some(module_link),
            results: Some(results),
            error,
        }
    }

    /// Upstream-failure response
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            endpoint: Some(ENDPOINT.to_string()),
            query: None,
            per_page: None,
            page: None,
            total: None,
            module_link: None,
            results: Some(Vec::new()),
            error: Some(ErrorPayload::new(msg)),
        }
    }

    /// Validation-failure response
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self {
            endpoint: None,
            query: None,
            per_page: None,
            page: None,
            total: None,
            module_link: None,
            results: None,
            error: Some(ErrorPayload::new(msg)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, url: &str, friendly_url: Option<&str>) -> GuidesRecord {
        GuidesRecord {
            name: name.to_string(),
            description: format!("About {}", name),
            url: url.to_string(),
            friendly_url: friendly_url.map(str::to_string),
        }
    }

    #[test]
    fn test_render_results_truncates_in_order() {
        let records = vec![
            record("A", "https://a", None),
            record("B", "https://b", None),
            record("C", "https://c", None),
        ];

        let items = render_results(&records, 2);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A");
        assert_eq!(items[1].title, "B");
        assert_eq!(items[0].item_format, "web_page");
    }

    #[test]
    fn test_render_results_uses_friendly_url_when_present() {
        let records = vec![
            record("A", "https://a", Some("https://friendly-a")),
            record("B", "https://b", Some("")),
        ];

        let items = render_results(&records, 10);
        assert_eq!(items[0].link, "https://friendly-a");
        assert_eq!(items[1].link, "https://b");
    }

    #[test]
    fn test_success_shape() {
        let response = SearchResponse::success(
            "rust",
            3,
            1,
            "https://example.edu/search?q=rust".to_string(),
            vec![SearchResponseItem::from_record(&record("A", "https://a", None))],
            "https://example.edu/guides",
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["endpoint"], "guides");
        assert_eq!(value["query"], "rust");
        assert_eq!(value["per_page"], 3);
        assert_eq!(value["page"], 1);
        assert_eq!(value["total"], 1);
        assert_eq!(value["module_link"], "https://example.edu/search?q=rust");
        assert_eq!(value["results"].as_array().unwrap().len(), 1);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_success_shape_with_no_results() {
        let response = SearchResponse::success(
            "rust",
            3,
            0,
            "https://example.edu/search?q=rust".to_string(),
            Vec::new(),
            "https://example.edu/guides",
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["results"].as_array().unwrap().len(), 0);
        assert_eq!(value["error"]["msg"], "No Results");
        assert_eq!(value["error"]["no_results_url"], "https://example.edu/guides");
    }

    #[test]
    fn test_failure_shape() {
        let response = SearchResponse::failure("Search error");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "endpoint": "guides",
                "results": [],
                "error": { "msg": "Search error" },
            })
        );
    }

    #[test]
    fn test_invalid_shape() {
        let response = SearchResponse::invalid("q parameter is required");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "error": { "msg": "q parameter is required" },
            })
        );
    }
}
