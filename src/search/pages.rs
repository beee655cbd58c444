//! Heuristic page splitting for a document's flat extracted text

use lazy_static::lazy_static;
use regex::Regex;

/// Characters per page when the text carries no page breaks or markers
const FALLBACK_PAGE_CHARS: usize = 2000;

lazy_static! {
    static ref PAGE_MARKER_RE: Regex = Regex::new(r"(?i)第\s*\d+\s*页|Page\s*\d+").unwrap();
}

/// Split extracted text into pages.
///
/// Tries, in order: form feeds, `第 N 页` / `Page N` markers (each marker
/// starts a new page), fixed-size character chunks. Blank pages are dropped.
pub fn split_into_pages(text: &str) -> Vec<&str> {
    let pages: Vec<&str> = if text.contains('\u{000C}') {
        text.split('\u{000C}').collect()
    } else if PAGE_MARKER_RE.is_match(text) {
        split_before_markers(text)
    } else {
        chunk_chars(text, FALLBACK_PAGE_CHARS)
    };

    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect()
}

fn split_before_markers(text: &str) -> Vec<&str> {
    let mut pages = Vec::new();
    let mut start = 0;

    for marker in PAGE_MARKER_RE.find_iter(text) {
        if marker.start() > start {
            pages.push(&text[start..marker.start()]);
            start = marker.start();
        }
    }
    pages.push(&text[start..]);

    pages
}

fn chunk_chars(text: &str, chunk_size: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        let end = text[start..]
            .char_indices()
            .nth(chunk_size)
            .map(|(offset, _)| start + offset)
            .unwrap_or(text.len());
        chunks.push(&text[start..end]);
        start = end;
    }

    chunks
}
