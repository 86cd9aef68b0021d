//! Geometric term search
//!
//! Locates every rendered occurrence of each term via MuPDF's quad search.
//! What counts as a hit on the glyph layout is the engine's own semantics;
//! this module only walks pages and terms in order and records the results.

use super::{open_document, FoundWords, HighlightRegion, RegionRect, ScanError};

/// Upper bound on hits returned per term per page
const MAX_HITS_PER_PAGE: u32 = 512;

/// Outcome of a geometric scan: per-term totals plus the regions to mark
#[derive(Debug, Default)]
pub struct GeometricScan {
    pub found: FoundWords,
    pub regions: Vec<HighlightRegion>,
}

/// Locate every term occurrence in the document.
///
/// Regions come out in page order, then term order within a page, which is
/// also the order highlights are applied. A term never found does not
/// appear in `found`.
pub fn scan_document(bytes: &[u8], terms: &[String]) -> Result<GeometricScan, ScanError> {
    let doc = open_document(bytes)?;
    let page_count = doc.page_count().map_err(|e| ScanError::Parse(e.to_string()))? as usize;

    let mut scan = GeometricScan::default();

    for page_index in 0..page_count {
        let page = doc
            .load_page(page_index as i32)
            .map_err(|e| ScanError::Parse(e.to_string()))?;
        let bounds = page.bounds().map_err(|e| ScanError::Parse(e.to_string()))?;
        let page_height = bounds.y1 - bounds.y0;

        for term in terms {
            let quads = page
                .search(term, MAX_HITS_PER_PAGE)
                .map_err(|e| ScanError::Search(e.to_string()))?;

            for quad in quads {
                // Bounding rect from the quad corners
                let x = quad.ul.x.min(quad.ll.x);
                let y = quad.ul.y.min(quad.ur.y);
                let width = quad.ur.x.max(quad.lr.x) - x;
                let height = quad.ll.y.max(quad.lr.y) - y;

                *scan.found.entry(term.clone()).or_insert(0) += 1;
                scan.regions.push(HighlightRegion {
                    page_index,
                    page_height,
                    rect: RegionRect {
                        x,
                        y,
                        width,
                        height,
                    },
                });
            }
        }
    }

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let terms = vec!["racism".to_string()];
        let result = scan_document(b"not a pdf at all", &terms);
        assert!(matches!(result, Err(ScanError::Parse(_))));
    }
}
