//! Flag endpoint
//!
//! POST /flag-terms/ reports where each term occurs (total count and the
//! 1-indexed pages it appears on) without touching the document.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::routes::upload::read_scan_upload;
use crate::scan::text::{scan_text, TextScanOptions};
use crate::scan::MatchReport;
use crate::state::AppState;
use crate::terms::TermSource;

/// Report term occurrences per page.
pub async fn flag_terms(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchReport>> {
    let upload = read_scan_upload(&mut multipart).await?;
    let (pdf, spreadsheet) = upload.require_pdf()?;

    let terms = TermSource::from_upload(spreadsheet.as_deref())?.resolve()?;
    let options = TextScanOptions {
        case_sensitive: state.config().matching.case_sensitive,
    };

    tracing::debug!("flagging {} terms in a {} byte PDF", terms.len(), pdf.len());

    let report = tokio::task::spawn_blocking(move || scan_text(&pdf, &terms, options))
        .await
        .map_err(|e| ApiError::Internal(format!("task join error: {}", e)))??;

    tracing::info!("flagged {} distinct terms", report.len());

    Ok(Json(report))
}
