//! HTTP request handlers

use super::state::AppState;
use crate::results::SearchResponse;
use crate::search::{SearchError, SearchQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Result limit; kept raw so `per_page=` falls back to the default
    pub per_page: Option<String>,
}

/// Health check handler for `/`
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Health check handler for `/ping`
pub async fn ping() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Search handler
///
/// Validation failures never reach the upstream; everything else is a
/// single upstream round trip.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match SearchQuery::from_params(params.q.as_deref(), params.per_page.as_deref()) {
        Ok(query) => query,
        Err(err) => return error_response(err),
    };

    match state.search.execute(&query).await {
        Ok(response) => Json(response).into_response(),
        Err(err) => error_response(err),
    }
}

/// Map a search error onto its HTTP status and body shape
fn error_response(err: SearchError) -> Response {
    if err.is_validation() {
        (
            StatusCode::BAD_REQUEST,
            Json(SearchResponse::invalid(err.to_string())),
        )
            .into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SearchResponse::failure(err.to_string())),
        )
            .into_response()
    }
}
