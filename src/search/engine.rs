//! Search engine: expands the query, scans every page and ranks the matches

use crate::types::{DocumentPage, SearchResult, SynonymEntry};

use super::pages::split_into_pages;
use super::query::{expand_query, ExpandedTerms};
use super::scanner::{compile_terms, scan_extracted_page, scan_segment, RawMatch, TermMatcher};
use super::scorer::relevance_score;
use super::segments::PageSegments;
use super::synonyms::SynonymIndex;

/// Keyword search over the tagged OCR text of a document.
///
/// Holds only the synonym index, which is read-only after construction, so
/// one engine can be shared across threads and requests.
#[derive(Debug, Default, Clone)]
pub struct SearchEngine {
    synonyms: SynonymIndex,
}

impl SearchEngine {
    /// Create an engine from synonym entries
    pub fn new(entries: &[SynonymEntry]) -> Self {
        Self::with_index(SynonymIndex::from_entries(entries))
    }

    /// Create an engine from a prebuilt synonym index
    pub fn with_index(synonyms: SynonymIndex) -> Self {
        Self { synonyms }
    }

    pub fn synonyms(&self) -> &SynonymIndex {
        &self.synonyms
    }

    /// Terms a query expands to
    pub fn expand(&self, query: &str, include_synonyms: bool) -> ExpandedTerms {
        expand_query(query, &self.synonyms, include_synonyms)
    }

    /// Search all pages of a document.
    ///
    /// Results are sorted by relevance, highest first. Equal scores keep
    /// page, segment and term order.
    pub fn search<'a, I>(&self, pages: I, query: &str, include_synonyms: bool) -> Vec<SearchResult>
    where
        I: IntoIterator<Item = &'a DocumentPage>,
    {
        let terms = self.expand(query, include_synonyms);
        if terms.is_empty() {
            return Vec::new();
        }
        let matchers = compile_terms(&terms);

        let mut results = Vec::new();
        let mut page_count = 0usize;
        for page in pages {
            page_count += 1;
            results.extend(search_page(&page.page_text, page.page_number, query, &matchers));
        }

        rank(&mut results);
        tracing::debug!(
            "Searched {} pages for {:?} ({} terms): {} matches",
            page_count,
            query,
            terms.len(),
            results.len()
        );
        results
    }

    /// Search the stored text of a single page
    pub fn search_page_text(
        &self,
        page_text: &str,
        page_number: u32,
        query: &str,
        include_synonyms: bool,
    ) -> Vec<SearchResult> {
        let matchers = compile_terms(&self.expand(query, include_synonyms));
        let mut results = search_page(page_text, page_number, query, &matchers);
        rank(&mut results);
        results
    }

    /// Search a document's flat extracted text, split heuristically into pages
    pub fn search_extracted_text(
        &self,
        text: &str,
        query: &str,
        include_synonyms: bool,
    ) -> Vec<SearchResult> {
        let matchers = compile_terms(&self.expand(query, include_synonyms));
        if matchers.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for (index, page_text) in split_into_pages(text).into_iter().enumerate() {
            let page_number = index as u32 + 1;
            results.extend(
                scan_extracted_page(page_text, page_number, &matchers)
                    .into_iter()
                    .map(|raw| score_match(raw, query)),
            );
        }

        rank(&mut results);
        results
    }
}

fn search_page(
    page_text: &str,
    page_number: u32,
    query: &str,
    matchers: &[TermMatcher],
) -> Vec<SearchResult> {
    let segments = PageSegments::parse(page_text);

    segments
        .non_empty()
        .flat_map(|(kind, text)| scan_segment(kind, text, page_number, matchers))
        .map(|raw| score_match(raw, query))
        .collect()
}

fn score_match(raw: RawMatch, query: &str) -> SearchResult {
    let relevance_score = relevance_score(&raw.literal, query, raw.match_type, &raw.plain_context);

    SearchResult {
        page_number: raw.page_number,
        text: raw.literal,
        context: raw.context,
        relevance_score,
        position: raw.position,
        match_type: raw.match_type,
    }
}

/// Stable sort, highest score first
fn rank(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchType;

    fn page(number: u32, text: &str) -> DocumentPage {
        DocumentPage::new("doc-002".to_string(), number, text.to_string())
    }

    fn engine() -> SearchEngine {
        SearchEngine::new(&[SynonymEntry::new(
            "继电器",
            vec!["Relay".to_string(), "电磁继电器".to_string()],
        )])
    }

    #[test]
    fn test_title_ranks_above_description() {
        let pages = vec![page(
            7,
            "[TITLE]继电器[/TITLE]\n[DESCRIPTION]大灯继电器位于驾驶室[/DESCRIPTION]",
        )];
        let results = engine().search(&pages, "继电器", false);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].match_type, MatchType::Title);
        assert_eq!(results[0].relevance_score, 1055);
        assert_eq!(results[1].match_type, MatchType::Description);
        assert_eq!(results[1].relevance_score, 155);
        assert!(results.iter().all(|r| r.page_number == 7));
    }

    #[test]
    fn test_synonyms_expand_matches() {
        let pages = vec![page(1, "[TEXT]K3 Relay\nK4 relay coil[/TEXT]")];

        assert!(engine().search(&pages, "继电器", false).is_empty());

        let results = engine().search(&pages, "继电器", true);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.match_type == MatchType::Text));
        assert_eq!(results[0].text, "Relay");
        assert_eq!(results[1].text, "relay");
    }

    #[test]
    fn test_results_sorted_across_pages() {
        let pages = vec![
            page(1, "[TEXT]继电器[/TEXT]"),
            page(2, "[DESCRIPTION]继电器[/DESCRIPTION]"),
            page(3, "[TITLE]继电器盒[/TITLE]"),
        ];
        let results = engine().search(&pages, "继电器", false);

        let order: Vec<u32> = results.iter().map(|r| r.page_number).collect();
        assert_eq!(order, vec![3, 2, 1]);
        assert!(results
            .windows(2)
            .all(|pair| pair[0].relevance_score >= pair[1].relevance_score));
    }

    #[test]
    fn test_equal_scores_keep_page_order() {
        let pages = vec![
            page(5, "[TEXT]ECU[/TEXT]"),
            page(2, "[TEXT]ECU[/TEXT]"),
        ];
        let results = engine().search(&pages, "ecu", false);
        let order: Vec<u32> = results.iter().map(|r| r.page_number).collect();
        assert_eq!(order, vec![5, 2]);
    }

    #[test]
    fn test_empty_inputs() {
        let pages = vec![page(1, "[TITLE]继电器[/TITLE]")];
        assert!(engine().search(&pages, "", true).is_empty());
        assert!(engine().search(&pages, "   ", false).is_empty());
        assert!(engine().search(&Vec::<DocumentPage>::new(), "继电器", false).is_empty());
        assert!(engine()
            .search(&vec![page(1, "no tags here 继电器")], "继电器", false)
            .is_empty());
    }

    #[test]
    fn test_search_page_text() {
        let results = engine().search_page_text(
            "[TITLE]电磁继电器[/TITLE]",
            9,
            "继电器",
            true,
        );
        // "继电器" and "电磁继电器" both match the title
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.page_number == 9));
        assert_eq!(results[0].text, "继电器");
        assert_eq!(results[0].relevance_score, 1000 + 50 + 5);
        assert_eq!(results[1].text, "电磁继电器");
        assert_eq!(results[1].relevance_score, 1000 + 30 + 5);
    }

    #[test]
    fn test_search_extracted_text() {
        let text = "第1页 目录\n继电器说明\n第2页 针脚表\nK1 | 继电器 | 12V";
        let results = engine().search_extracted_text(text, "继电器", false);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].page_number, 1);
        assert_eq!(results[0].match_type, MatchType::Description);
        assert_eq!(results[1].page_number, 2);
        assert_eq!(results[1].match_type, MatchType::Table);
    }
}
