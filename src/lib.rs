//! Manual Search Server
//!
//! Keyword search and relevance ranking over the per-page OCR text of
//! scanned automotive wiring manuals.
//!
//! # Features
//!
//! - **Tagged pages**: each page stores `[TITLE]`, `[DESCRIPTION]` and `[TEXT]` segments
//! - **Synonym expansion**: Chinese and English component names resolve to one group
//! - **Ranking**: titles outrank descriptions, tables and circuit-diagram text
//! - **Highlighting**: every result carries a context snippet with `<mark>` tags
//!
//! # Modules
//!
//! - `types`: Core data structures (Document, DocumentPage, SearchResult)
//! - `search`: Query expansion, segment parsing, scanning and scoring
//! - `store`: JSONL-backed document store
//! - `api`: HTTP endpoints
//! - `config`: Environment configuration
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```
//! use manual_search::{DocumentPage, SearchEngine, SynonymEntry};
//!
//! let engine = SearchEngine::new(&[SynonymEntry::new("继电器", vec!["Relay".to_string()])]);
//! let pages = vec![DocumentPage::new(
//!     "doc-002".to_string(),
//!     12,
//!     "[TITLE]继电器[/TITLE]\n[TEXT]K1 Relay[/TEXT]".to_string(),
//! )];
//!
//! let results = engine.search(&pages, "继电器", true);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].page_number, 12);
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod search;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use api::AppState;
pub use config::ServerConfig;
pub use search::{SearchEngine, SynonymIndex};
pub use store::DocumentStore;
pub use types::{
    Document, DocumentPage, MatchType, Position, SearchRequest, SearchResponse, SearchResult,
    StoreError, StoreResult, SynonymEntry,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
