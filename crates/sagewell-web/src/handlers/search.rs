//! Smart search endpoints.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::info;

use sagewell_common::ApiError;
use sagewell_ranker::catalog::Catalog;
use sagewell_ranker::query::validate_query;
use sagewell_ranker::{ScoredResult, SearchFilters};

use super::{reject_input, InputMessages};
use crate::auth::Authenticated;
use crate::extract::ApiJson;
use crate::state::SharedState;

const SEARCH_INPUT: InputMessages = InputMessages {
    empty: "搜索关键词不能为空",
    too_long: query_too_long,
};

fn query_too_long(max: usize) -> String {
    format!("搜索关键词长度不能超过{max}个字符")
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: SearchFilters,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<ScoredResult>,
    pub total: usize,
    pub query: String,
    pub filters: SearchFilters,
}

/// POST /api/smart-search — rank the corpus for a query
pub async fn smart_search(
    State(state): State<SharedState>,
    auth: Authenticated,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<ApiJson<SearchResponse>, ApiError> {
    let query = validate_query(&req.query, state.config.search.max_query_chars)
        .map_err(|e| reject_input(e, &SEARCH_INPUT))?;

    let outcome = state.ranker().search(&query, &req.filters);
    info!(
        query = %query,
        total = outcome.total,
        key = auth.key_prefix.as_deref().unwrap_or("anonymous"),
        "smart search"
    );

    Ok(ApiJson(SearchResponse {
        success: true,
        results: outcome.results,
        total: outcome.total,
        query,
        filters: req.filters,
    }))
}

/// GET /api/smart-search — suggestions plus category/source facets
pub async fn search_catalog(State(state): State<SharedState>) -> ApiJson<Catalog> {
    ApiJson(state.catalog.as_ref().clone())
}
