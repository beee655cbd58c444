//! Keyword search and relevance ranking over tagged page text
//!
//! A search runs in five steps:
//! - expand the query into literal terms, optionally through synonym groups
//! - split each page into its title, description and circuit segments
//! - scan every segment for case-insensitive literal occurrences
//! - score each occurrence by segment type, exactness and context
//! - merge all pages and sort by score

mod engine;
mod pages;
mod query;
mod scanner;
mod scorer;
mod segments;
mod synonyms;

pub use engine::SearchEngine;
pub use pages::split_into_pages;
pub use query::{expand_query, tokenize_query, ExpandedTerms};
pub use scanner::{compile_terms, scan_extracted_page, scan_segment, RawMatch, TermMatcher};
pub use scorer::{classify_text, relevance_score};
pub use segments::{extract_segment, PageSegments, SegmentExtraction, SegmentKind};
pub use synonyms::{default_synonym_entries, SynonymIndex, DEFAULT_SYNONYMS};
