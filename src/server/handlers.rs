use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::sync::atomic::Ordering;

use super::AppState;
use super::protocol::{ENCODING_FAILURE, MISSING_QUERY, StatusResponse, encode_text, search_query};
use crate::error::QueryError;

/// `GET /search?q=...`
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let Some(query) = search_query(&params) else {
        return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response();
    };

    let result = match state.searcher.search(query) {
        Ok(result) => result,
        Err(QueryError::EmptyQuery) => {
            return (StatusCode::BAD_REQUEST, MISSING_QUERY).into_response();
        }
    };

    state.stats.queries_served.fetch_add(1, Ordering::Relaxed);
    if !result.is_found() {
        state.stats.not_found.fetch_add(1, Ordering::Relaxed);
    }

    match encode_text(&result.text) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, query = %query, "failed to encode search result");
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE).into_response()
        }
    }
}

/// `GET /status`
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let catalog = state.searcher.catalog();
    Json(StatusResponse {
        uptime_secs: state.stats.start_time.elapsed().as_secs(),
        queries_served: state.stats.queries_served.load(Ordering::Relaxed),
        not_found: state.stats.not_found.load(Ordering::Relaxed),
        corpus_bytes: state.searcher.corpus().len(),
        titles: catalog.len(),
        exceptions: catalog.exceptions().len(),
    })
}

/// `GET /titles`
pub async fn titles(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.searcher.catalog().titles().to_vec())
}
