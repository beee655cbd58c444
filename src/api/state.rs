//! Shared application state

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::search::SearchEngine;
use crate::store::DocumentStore;

/// State shared by all request handlers
pub struct AppState {
    /// Documents, pages and synonyms
    pub store: Arc<RwLock<DocumentStore>>,

    /// Search engine built from the store's synonym table at startup
    pub engine: Arc<SearchEngine>,
}

impl AppState {
    /// Build the search engine from the store's synonyms and wrap both for sharing
    pub fn new(store: DocumentStore) -> Self {
        let engine = SearchEngine::new(store.synonyms());
        tracing::info!(
            "Search engine ready with {} synonym keys",
            engine.synonyms().len()
        );

        Self {
            store: Arc::new(RwLock::new(store)),
            engine: Arc::new(engine),
        }
    }
}
