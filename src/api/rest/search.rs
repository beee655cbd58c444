//! Search endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::ApiError;
use crate::api::state::AppState;
use crate::types::{SearchRequest, SearchResponse};

/// POST /api/search - Ranked keyword search within one document
///
/// Only the stored per-page text is searched. A document without pages
/// yields an empty result list.
pub async fn search_document(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> impl IntoResponse {
    if request.query.trim().is_empty() || request.document_id.trim().is_empty() {
        return ApiError::bad_request("Both 'query' and 'documentId' are required")
            .into_response();
    }

    // Copy the pages out so the scan runs without holding the store lock
    let pages = {
        let store = state.store.read().await;
        if store.get_document(&request.document_id).is_none() {
            return ApiError::not_found(format!("Document '{}' not found", request.document_id))
                .into_response();
        }
        store.page_snapshot(&request.document_id)
    };

    let results = if pages.is_empty() {
        Vec::new()
    } else {
        let engine = Arc::clone(&state.engine);
        let query = request.query.clone();
        let include_synonyms = request.include_synonyms;

        match tokio::task::spawn_blocking(move || engine.search(&pages, &query, include_synonyms))
            .await
        {
            Ok(results) => results,
            Err(e) => {
                tracing::error!("Search task for {} failed: {}", request.document_id, e);
                return ApiError::internal("Search failed").into_response();
            }
        }
    };

    tracing::info!(
        "Search {:?} in {} (synonyms: {}): {} matches",
        request.query,
        request.document_id,
        request.include_synonyms,
        results.len()
    );

    let response = SearchResponse::new(results, request.query, request.document_id);
    (StatusCode::OK, Json(response)).into_response()
}
