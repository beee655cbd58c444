//! Data types for the manual search server
//!
//! This module contains the core data structures shared by the engine,
//! the document store and the HTTP API.

mod document;
mod error;
mod result;
mod synonym;

pub use document::{Document, DocumentPage, PageSummary};
pub use error::{StoreError, StoreResult};
pub use result::{MatchType, Position, SearchRequest, SearchResponse, SearchResult};
pub use synonym::SynonymEntry;
