//! Query expansion into the literal terms to scan for

use super::synonyms::SynonymIndex;

/// Lowercased literal terms derived from one query, in first-seen order without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedTerms {
    terms: Vec<String>,
}

impl ExpandedTerms {
    fn push(&mut self, term: String) {
        if !self.terms.contains(&term) {
            self.terms.push(term);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Split a query on whitespace into lowercased tokens
pub fn tokenize_query(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Expand a query into its search terms.
///
/// Every query token is kept. With `include_synonyms`, each token that
/// belongs to a synonym group also brings in the whole group, lowercased.
pub fn expand_query(query: &str, synonyms: &SynonymIndex, include_synonyms: bool) -> ExpandedTerms {
    let mut expanded = ExpandedTerms::default();

    for token in tokenize_query(query) {
        let group = if include_synonyms {
            synonyms.lookup(&token)
        } else {
            None
        };

        expanded.push(token);
        for member in group.into_iter().flatten() {
            expanded.push(member.to_lowercase());
        }
    }

    expanded
}
