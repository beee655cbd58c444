//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{documents, search};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // The viewer UI is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/documents", get(documents::list_documents))
        .route("/api/documents/:id", get(documents::get_document))
        .route("/api/documents/:id/pages", get(documents::list_pages))
        .route("/api/documents/:id/pages/:page", get(documents::get_page))
        .route("/api/search", post(search::search_document))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C
pub async fn serve(addr: &str, state: Arc<AppState>) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Manual search server listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
