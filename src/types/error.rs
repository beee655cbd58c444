//! Error types for the document store

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading, mutating or persisting the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document already exists: {0}")]
    DocumentExists(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),
}
