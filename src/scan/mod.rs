//! PDF scanning strategies
//!
//! Two genuinely different matching strategies live here, and callers pick
//! one explicitly via endpoint choice:
//!
//! - `geometric`: quad search over the rendered glyph layout, feeding the
//!   highlight annotator. Counts only, no per-page breakdown.
//! - `text`: normalized-text literal matching, producing a per-term
//!   {count, pages} report without touching the document.
//!
//! Their edge-case semantics differ (phrase matches spanning line wraps,
//! rendering-dependent matches), so the two are never reconciled.

pub mod geometric;
pub mod text;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Total occurrences per term, in term order (highlight mode)
pub type FoundWords = IndexMap<String, usize>;

/// Per-term counts and page numbers, in term order (report mode)
pub type MatchReport = IndexMap<String, TermOccurrences>;

/// Where and how often one term was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermOccurrences {
    pub count: usize,
    /// 1-indexed pages on which the term appears
    pub pages: Vec<usize>,
}

/// Axis-aligned region on a page, in MuPDF page space (origin top-left,
/// y growing downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A located occurrence to be highlighted
#[derive(Debug, Clone)]
pub struct HighlightRegion {
    /// 0-indexed page
    pub page_index: usize,
    /// Page height, needed to convert into PDF user space
    pub page_height: f32,
    pub rect: RegionRect,
}

/// Error type for document scanning
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    #[error("text extraction failed: {0}")]
    TextExtraction(String),

    #[error("search failed: {0}")]
    Search(String),

    #[error("invalid search term: {0}")]
    InvalidTerm(String),
}

/// Open a request-local document from uploaded bytes.
pub(crate) fn open_document(bytes: &[u8]) -> Result<mupdf::Document, ScanError> {
    mupdf::Document::from_bytes(bytes, "application/pdf")
        .map_err(|e| ScanError::Parse(e.to_string()))
}
