//! Relevance scoring
//!
//! Score = base weight of the match type + exactness bonus + context bonus.
//! Scores only rank results within one search call.

use crate::types::MatchType;

/// Literal equals the whole query
const EXACT_MATCH_BONUS: u32 = 50;
/// Literal contains the whole query
const CONTAINS_QUERY_BONUS: u32 = 30;
/// Per query word found inside the literal
const QUERY_WORD_BONUS: u32 = 10;
/// Query appears in the surrounding context
const CONTEXT_BONUS: u32 = 5;

/// Classify description-like text as `Table` when it carries column separators
pub fn classify_text(text: &str) -> MatchType {
    // A digit-pipe-digit cell always contains a pipe, so the pipe check covers it.
    if text.contains('|') || text.contains('\t') {
        MatchType::Table
    } else {
        MatchType::Description
    }
}

/// Score one match against the original, unexpanded query
pub fn relevance_score(literal: &str, query: &str, match_type: MatchType, context: &str) -> u32 {
    let query_lower = query.to_lowercase();
    let literal_lower = literal.to_lowercase();

    let mut score = match_type.base_weight();

    if literal_lower == query_lower {
        score += EXACT_MATCH_BONUS;
    } else if literal_lower.contains(&query_lower) {
        score += CONTAINS_QUERY_BONUS;
    } else {
        let matched_words = query_lower
            .split_whitespace()
            .filter(|word| literal_lower.contains(word))
            .count() as u32;
        score += matched_words * QUERY_WORD_BONUS;
    }

    if context.to_lowercase().contains(&query_lower) {
        score += CONTEXT_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_title_match() {
        assert_eq!(
            relevance_score("继电器", "继电器", MatchType::Title, "继电器"),
            1000 + 50 + 5
        );
    }

    #[test]
    fn test_exact_match_ignores_case() {
        assert_eq!(
            relevance_score("Relay", "RELAY", MatchType::Description, "no mention"),
            150
        );
    }

    #[test]
    fn test_literal_containing_query() {
        // A synonym literal can contain the query
        assert_eq!(
            relevance_score("大灯继电器", "继电器", MatchType::Text, ""),
            1 + 30
        );
    }

    #[test]
    fn test_word_bonus_per_query_word() {
        // Synonym literal matched for a two-word query
        let score = relevance_score(
            "Trailer Control Module",
            "control module",
            MatchType::Description,
            "挂车控制模块",
        );
        assert_eq!(score, 100 + 30);

        let score = relevance_score("Relay", "fuse relay", MatchType::Description, "");
        assert_eq!(score, 100 + 10);
    }

    #[test]
    fn test_synonym_literal_without_overlap() {
        let score = relevance_score("空调", "A/C", MatchType::Description, "空调系统正常");
        assert_eq!(score, 100);
    }

    #[test]
    fn test_context_bonus() {
        let with = relevance_score("Fuse", "fuse", MatchType::Table, "F1 | Fuse | 10A");
        let without = relevance_score("保险丝", "fuse", MatchType::Table, "F1 | 保险丝 | 10A");
        assert_eq!(with, 10 + 50 + 5);
        assert_eq!(without, 10);
    }

    #[test]
    fn test_title_outranks_best_description() {
        let worst_title = relevance_score("x", "query", MatchType::Title, "");
        let best_description =
            relevance_score("query", "query", MatchType::Description, "query");
        assert!(worst_title > best_description);
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(classify_text("1 | 2"), MatchType::Table);
        assert_eq!(classify_text("针脚\t信号"), MatchType::Table);
        assert_eq!(classify_text("空调系统正常"), MatchType::Description);
    }
}
