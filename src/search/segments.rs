//! Page segment extraction
//!
//! Stored page text wraps up to three regions in bracket tags:
//!
//! ```text
//! [TITLE]...[/TITLE]
//! [DESCRIPTION]...[/DESCRIPTION]
//! [TEXT]...[/TEXT]
//! ```
//!
//! Each region is taken from its first opening tag to the nearest closing
//! tag. A missing or unclosed tag yields an empty segment.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TITLE_RE: Regex = Regex::new(r"(?s)\[TITLE\](.*?)\[/TITLE\]").unwrap();
    static ref DESCRIPTION_RE: Regex =
        Regex::new(r"(?s)\[DESCRIPTION\](.*?)\[/DESCRIPTION\]").unwrap();
    static ref TEXT_RE: Regex = Regex::new(r"(?s)\[TEXT\](.*?)\[/TEXT\]").unwrap();
}

/// The three tagged regions of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Title,
    Description,
    Circuit,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 3] = [
        SegmentKind::Title,
        SegmentKind::Description,
        SegmentKind::Circuit,
    ];

    /// Tag name used in stored page text
    pub fn tag(self) -> &'static str {
        match self {
            SegmentKind::Title => "TITLE",
            SegmentKind::Description => "DESCRIPTION",
            SegmentKind::Circuit => "TEXT",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            SegmentKind::Title => &TITLE_RE,
            SegmentKind::Description => &DESCRIPTION_RE,
            SegmentKind::Circuit => &TEXT_RE,
        }
    }
}

/// Outcome of extracting one tagged region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentExtraction<'a> {
    Found(&'a str),
    Missing,
}

impl<'a> SegmentExtraction<'a> {
    /// Body of the segment, or an empty string when missing
    pub fn text(self) -> &'a str {
        match self {
            SegmentExtraction::Found(body) => body,
            SegmentExtraction::Missing => "",
        }
    }
}

/// Extract one tagged region from page text
pub fn extract_segment(page_text: &str, kind: SegmentKind) -> SegmentExtraction<'_> {
    match kind.pattern().captures(page_text).and_then(|caps| caps.get(1)) {
        Some(body) => SegmentExtraction::Found(body.as_str()),
        None => SegmentExtraction::Missing,
    }
}

/// Segments of one page, each possibly empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageSegments<'a> {
    pub title_text: &'a str,
    pub description_text: &'a str,
    pub circuit_text: &'a str,
}

impl<'a> PageSegments<'a> {
    /// Split stored page text into its segments
    pub fn parse(page_text: &'a str) -> Self {
        Self {
            title_text: extract_segment(page_text, SegmentKind::Title).text(),
            description_text: extract_segment(page_text, SegmentKind::Description).text(),
            circuit_text: extract_segment(page_text, SegmentKind::Circuit).text(),
        }
    }

    pub fn get(&self, kind: SegmentKind) -> &'a str {
        match kind {
            SegmentKind::Title => self.title_text,
            SegmentKind::Description => self.description_text,
            SegmentKind::Circuit => self.circuit_text,
        }
    }

    /// Non-empty segments in title, description, circuit order
    pub fn non_empty(&self) -> impl Iterator<Item = (SegmentKind, &'a str)> + '_ {
        SegmentKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, text)| !text.is_empty())
    }
}
