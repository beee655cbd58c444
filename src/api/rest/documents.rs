//! Document catalogue endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::ApiError;
use crate::api::state::AppState;
use crate::types::PageSummary;

/// GET /api/documents - All documents, most recently uploaded first
pub async fn list_documents(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    (StatusCode::OK, Json(store.documents())).into_response()
}

/// GET /api/documents/:id - Get a single document
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.read().await;

    match store.get_document(&id) {
        Some(document) => (StatusCode::OK, Json(document)).into_response(),
        None => ApiError::not_found(format!("Document '{}' not found", id)).into_response(),
    }
}

/// GET /api/documents/:id/pages - Page numbers and component names of a document
pub async fn list_pages(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let store = state.store.read().await;

    if store.get_document(&id).is_none() {
        return ApiError::not_found(format!("Document '{}' not found", id)).into_response();
    }

    let pages: Vec<PageSummary> = store
        .document_pages(&id)
        .into_iter()
        .map(PageSummary::from)
        .collect();
    (StatusCode::OK, Json(pages)).into_response()
}

/// GET /api/documents/:id/pages/:page - Stored text of one page
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path((id, page_number)): Path<(String, u32)>,
) -> impl IntoResponse {
    let store = state.store.read().await;

    match store.document_page(&id, page_number) {
        Some(page) => (StatusCode::OK, Json(page)).into_response(),
        None => ApiError::not_found(format!(
            "Page {} of document '{}' not found",
            page_number, id
        ))
        .into_response(),
    }
}
