//! Text-based term search
//!
//! Extracts each page's raw text, repairs hyphenated line wraps, then counts
//! literal occurrences of each term. Produces a report only; the document is
//! never mutated in this mode.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use super::{open_document, MatchReport, ScanError, TermOccurrences};

lazy_static! {
    /// A word split across a line wrap: trailing hyphen, optional trailing
    /// spaces, the line break, and any leading whitespace on the next line.
    static ref HYPHEN_BREAK: Regex = Regex::new(r"-[ \t]*\r?\n[ \t]*").unwrap();
    /// Any remaining line break, with surrounding spaces collapsed.
    static ref LINE_BREAK: Regex = Regex::new(r"[ \t]*\r?\n[ \t]*").unwrap();
}

/// Options for the text matching strategy
#[derive(Debug, Clone, Copy)]
pub struct TextScanOptions {
    pub case_sensitive: bool,
}

impl Default for TextScanOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
        }
    }
}

/// Join hyphen-broken words and flatten remaining line breaks to single
/// spaces, so phrase terms spanning a wrap still match.
pub fn normalize_page_text(raw: &str) -> String {
    let joined = HYPHEN_BREAK.replace_all(raw, "");
    LINE_BREAK.replace_all(&joined, " ").into_owned()
}

/// Count literal occurrences of each term per page.
///
/// Terms are literal text, never patterns: each one is escaped before the
/// matcher is compiled. Counts are non-overlapping. A page number is
/// appended to a term's page list at most once per page, however many
/// matches the page yielded; terms with no matches anywhere are absent
/// from the report.
pub fn scan_text(
    bytes: &[u8],
    terms: &[String],
    options: TextScanOptions,
) -> Result<MatchReport, ScanError> {
    let doc = open_document(bytes)?;
    let page_count = doc.page_count().map_err(|e| ScanError::Parse(e.to_string()))? as usize;

    // One compiled matcher per term, reused across all pages.
    let patterns = terms
        .iter()
        .map(|term| {
            RegexBuilder::new(&regex::escape(term))
                .case_insensitive(!options.case_sensitive)
                .build()
                .map(|re| (term.as_str(), re))
                .map_err(|e| ScanError::InvalidTerm(format!("{}: {}", term, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = MatchReport::new();

    for page_index in 0..page_count {
        let page = doc
            .load_page(page_index as i32)
            .map_err(|e| ScanError::Parse(e.to_string()))?;
        let raw = page
            .to_text()
            .map_err(|e| ScanError::TextExtraction(e.to_string()))?;
        let text = normalize_page_text(&raw);
        let page_number = page_index + 1;

        for (term, pattern) in &patterns {
            let count = pattern.find_iter(&text).count();
            if count == 0 {
                continue;
            }

            let entry = report
                .entry((*term).to_string())
                .or_insert_with(|| TermOccurrences {
                    count: 0,
                    pages: Vec::new(),
                });
            entry.count += count;
            entry.pages.push(page_number);
        }
    }

    Ok(report)
}
