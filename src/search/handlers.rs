use super::tokenizer::{parse_flag, parse_selected_titles, split_query};
use super::types::{SearchParams, Snippet};
use crate::corpus::Corpus;
use crate::error::SearchError;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Routes for the search API, with the static front-end served as fallback.
pub fn router(corpus: Arc<Corpus>, static_dir: &Path) -> Router {
    Router::new()
        .route("/search", get(handle_search).post(handle_search))
        .route("/titles", get(handle_titles))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(corpus)
}

/// `q` holds the raw query and `exactMatch` disables word splitting. The body
/// may carry a JSON array of titles; an empty selection searches every work.
pub async fn handle_search(
    State(corpus): State<Arc<Corpus>>,
    Query(params): Query<SearchParams>,
    body: Bytes,
) -> Result<Json<Vec<Snippet>>, (StatusCode, String)> {
    if params.q.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "missing search query".to_string()));
    }

    let exact_match = parse_flag(params.exact_match.as_deref());
    let queries = split_query(&params.q, exact_match);
    tracing::info!("/search query: {:?}", queries);

    let mut selected: HashSet<String> = parse_selected_titles(&body).into_iter().collect();
    if selected.is_empty() {
        selected = corpus
            .work_titles()
            .into_iter()
            .map(str::to_string)
            .collect();
    }
    if selected.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let result = tokio::task::spawn_blocking(move || corpus.search(&queries, &selected))
        .await
        .map_err(|e| {
            tracing::error!("Search task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    match result {
        Ok(snippets) => {
            tracing::debug!("Returning {} snippets", snippets.len());
            Ok(Json(snippets))
        }
        Err(e @ SearchError::InvalidQuery(_)) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Titles of all loaded works, in corpus order.
pub async fn handle_titles(State(corpus): State<Arc<Corpus>>) -> Json<Vec<String>> {
    Json(
        corpus
            .work_titles()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
