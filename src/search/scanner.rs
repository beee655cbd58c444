//! Literal match scanning with context windows

use regex::{Regex, RegexBuilder};

use crate::types::{MatchType, Position};

use super::query::ExpandedTerms;
use super::scorer::classify_text;
use super::segments::SegmentKind;

/// Characters of a title kept as its context
const TITLE_CONTEXT_CHARS: usize = 100;
/// Lines on each side of the matching line kept as context
const CONTEXT_LINES: usize = 2;

const POSITION_X: u32 = 50;
const TITLE_Y: u32 = 50;
const DESCRIPTION_Y: u32 = 100;
const CIRCUIT_Y: u32 = 200;
const LINE_HEIGHT: u32 = 20;
const CHAR_WIDTH: u32 = 8;
const MATCH_HEIGHT: u32 = 16;

/// Case-insensitive literal matcher for one expanded term
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    pattern: Regex,
}

impl TermMatcher {
    pub fn new(term: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            term: term.to_string(),
            pattern,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Non-overlapping occurrences, left to right
    pub fn find_iter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.pattern.find_iter(text).map(|m| m.as_str())
    }

    /// Wrap every occurrence in `<mark>` tags
    pub fn highlight(&self, text: &str) -> String {
        self.pattern.replace_all(text, "<mark>${0}</mark>").into_owned()
    }
}

/// Compile matchers for every expanded term
pub fn compile_terms(terms: &ExpandedTerms) -> Vec<TermMatcher> {
    terms
        .iter()
        .filter_map(|term| match TermMatcher::new(term) {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                tracing::warn!("Skipping search term {:?}: {}", term, e);
                None
            }
        })
        .collect()
}

/// One occurrence of a term, before scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub page_number: u32,
    /// Text as it appears on the page
    pub literal: String,
    /// Context with the term highlighted, shown to the user
    pub context: String,
    /// Unmarked context the scorer looks for the query in
    pub plain_context: String,
    pub match_type: MatchType,
    pub position: Position,
}

/// Scan one page segment
pub fn scan_segment(
    kind: SegmentKind,
    text: &str,
    page_number: u32,
    matchers: &[TermMatcher],
) -> Vec<RawMatch> {
    match kind {
        SegmentKind::Title => scan_title(text, page_number, matchers),
        SegmentKind::Description => {
            scan_lines(text, page_number, matchers, DESCRIPTION_Y, |_, literal| {
                classify_text(literal)
            })
        }
        SegmentKind::Circuit => {
            scan_lines(text, page_number, matchers, CIRCUIT_Y, |_, _| MatchType::Text)
        }
    }
}

/// Scan a page split out of a document's flat extracted text.
///
/// Lines are classified as a whole rather than by the matched literal.
pub fn scan_extracted_page(text: &str, page_number: u32, matchers: &[TermMatcher]) -> Vec<RawMatch> {
    scan_lines(text, page_number, matchers, DESCRIPTION_Y, |line, _| {
        classify_text(line)
    })
}

fn scan_title(title: &str, page_number: u32, matchers: &[TermMatcher]) -> Vec<RawMatch> {
    let prefix = char_prefix(title, TITLE_CONTEXT_CHARS);
    let mut matches = Vec::new();

    for matcher in matchers {
        for literal in matcher.find_iter(title) {
            matches.push(RawMatch {
                page_number,
                literal: literal.to_string(),
                context: matcher.highlight(prefix),
                plain_context: title.to_string(),
                match_type: MatchType::Title,
                position: approximate_position(literal, TITLE_Y),
            });
        }
    }

    matches
}

fn scan_lines<F>(
    text: &str,
    page_number: u32,
    matchers: &[TermMatcher],
    y_offset: u32,
    classify: F,
) -> Vec<RawMatch>
where
    F: Fn(&str, &str) -> MatchType,
{
    let lines: Vec<&str> = text.split('\n').collect();
    let mut matches = Vec::new();

    for (line_index, line) in lines.iter().enumerate() {
        let line_text = line.trim();
        if line_text.is_empty() {
            continue;
        }

        let y = y_offset.saturating_add((line_index as u32).saturating_mul(LINE_HEIGHT));

        for matcher in matchers {
            for literal in matcher.find_iter(line_text) {
                let plain_context = context_window(&lines, line_index);
                matches.push(RawMatch {
                    page_number,
                    literal: literal.to_string(),
                    context: matcher.highlight(&plain_context),
                    match_type: classify(line_text, literal),
                    plain_context,
                    position: approximate_position(literal, y),
                });
            }
        }
    }

    matches
}

/// Lines `index - 2 ..= index + 2`, clamped, joined by spaces
fn context_window(lines: &[&str], index: usize) -> String {
    let start = index.saturating_sub(CONTEXT_LINES);
    let end = (index + CONTEXT_LINES + 1).min(lines.len());
    lines[start..end].join(" ").trim().to_string()
}

fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

fn approximate_position(literal: &str, y: u32) -> Position {
    Position {
        x: POSITION_X,
        y,
        width: (literal.chars().count() as u32).saturating_mul(CHAR_WIDTH),
        height: MATCH_HEIGHT,
    }
}
