//! Search result types

use serde::{Deserialize, Serialize};

/// Where a match was found, ordered by authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Title,
    Description,
    Table,
    Text,
}

impl MatchType {
    /// Base relevance weight for this kind of match
    pub fn base_weight(self) -> u32 {
        match self {
            MatchType::Title => 1000,
            MatchType::Description => 100,
            MatchType::Table => 10,
            MatchType::Text => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::Title => "title",
            MatchType::Description => "description",
            MatchType::Table => "table",
            MatchType::Text => "text",
        }
    }
}

/// Approximate on-page box of a match.
///
/// Synthesized from the line index, not from glyph coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A single located, scored match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "pageNumber")]
    pub page_number: u32,
    pub text: String,
    pub context: String,
    #[serde(rename = "relevanceScore")]
    pub relevance_score: u32,
    pub position: Position,
    #[serde(rename = "type")]
    pub match_type: MatchType,
}

/// Search request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(rename = "documentId", default)]
    pub document_id: String,
    #[serde(rename = "includeSynonyms", default)]
    pub include_synonyms: bool,
}

/// Ranked results for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub query: String,
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

impl SearchResponse {
    /// Wrap ranked results, counting them
    pub fn new(results: Vec<SearchResult>, query: String, document_id: String) -> Self {
        let total_matches = results.len();
        Self {
            results,
            query,
            document_id,
            total_matches,
        }
    }
}
