//! Synonym table entries

use serde::{Deserialize, Serialize};

/// A canonical term and the alternate spellings or translations that mean the same thing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub term: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl SynonymEntry {
    /// Create a new synonym entry
    pub fn new(term: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            term: term.into(),
            synonyms,
        }
    }

    /// The whole group: the term followed by its synonyms
    pub fn group(&self) -> Vec<String> {
        std::iter::once(self.term.clone())
            .chain(self.synonyms.iter().cloned())
            .collect()
    }
}
