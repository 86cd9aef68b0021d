//! Highlight endpoint
//!
//! POST /highlight-terms/ returns the uploaded PDF with every located term
//! occurrence highlighted, plus an `X-Found-Words` header carrying the
//! per-term totals as JSON.

use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, HeaderValue, StatusCode},
    response::Response,
};

use crate::annotate;
use crate::error::{ApiError, Result};
use crate::routes::upload::read_scan_upload;
use crate::scan::{geometric, FoundWords};
use crate::state::AppState;
use crate::terms::TermSource;

/// Response header carrying the JSON term -> count mapping
pub const FOUND_WORDS_HEADER: &str = "X-Found-Words";

/// Filename offered in the Content-Disposition header
const OUTPUT_FILENAME: &str = "highlighted_output.pdf";

/// Highlight every term occurrence and return the rewritten document.
pub async fn highlight_terms(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let upload = read_scan_upload(&mut multipart).await?;
    let (pdf, spreadsheet) = upload.require_pdf()?;

    let terms = TermSource::from_upload(spreadsheet.as_deref())?.resolve()?;
    tracing::debug!(
        "highlighting {} terms in a {} byte PDF",
        terms.len(),
        pdf.len()
    );

    // MuPDF and the rewrite are CPU-bound; run the whole pipeline off the
    // async runtime.
    let (output, found) = tokio::task::spawn_blocking(move || -> Result<(Vec<u8>, FoundWords)> {
        let scan = geometric::scan_document(&pdf, &terms)?;
        let output = annotate::highlight_regions(&pdf, &scan.regions)?;
        Ok((output, scan.found))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("task join error: {}", e)))??;

    let total: usize = found.values().sum();
    tracing::info!(
        "highlighted {} occurrences of {} distinct terms",
        total,
        found.len()
    );

    let found_words_json =
        serde_json::to_string(&found).map_err(|e| ApiError::Internal(e.to_string()))?;

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", OUTPUT_FILENAME),
        );

    // Header values are stricter than JSON; omit the summary rather than
    // fail the whole request over an unencodable term.
    match HeaderValue::from_str(&found_words_json) {
        Ok(value) => {
            response = response.header(FOUND_WORDS_HEADER, value);
        }
        Err(_) => {
            tracing::warn!(
                "found-words mapping is not a valid header value, omitting {}",
                FOUND_WORDS_HEADER
            );
        }
    }

    response
        .body(Body::from(output))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
