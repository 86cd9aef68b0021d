//! API error types
//!
//! Maps domain errors onto HTTP responses. Handlers return
//! `Result<_, ApiError>`; axum renders the status code and the JSON
//! `{error, details}` body via `IntoResponse`. Every failure is terminal
//! for its request; there are no retries and no partial results.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::annotate::AnnotateError;
use crate::scan::ScanError;
use crate::terms::TermListError;

/// Result type alias for handlers
pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Error response body shared by all endpoints
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Request-level error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No PDF file provided. Use field name 'pdf_file'")]
    MissingPdf,

    #[error("Term list is empty")]
    EmptyTermList,

    #[error("Failed to read upload")]
    Upload(#[source] axum::extract::multipart::MultipartError),

    #[error("Failed to read term list")]
    TermList(#[source] TermListError),

    #[error("Failed to scan PDF")]
    Scan(#[source] ScanError),

    #[error("Failed to highlight PDF")]
    Annotate(#[source] AnnotateError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Status code for this error. Caller mistakes (missing upload, empty
    /// term list, unparseable inputs) are 400; everything else is 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingPdf
            | ApiError::EmptyTermList
            | ApiError::Upload(_)
            | ApiError::TermList(_) => StatusCode::BAD_REQUEST,
            ApiError::Scan(ScanError::Parse(_)) => StatusCode::BAD_REQUEST,
            ApiError::Scan(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Annotate(AnnotateError::Pdf(_)) => StatusCode::BAD_REQUEST,
            ApiError::Annotate(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        use std::error::Error;
        self.source().map(|source| source.to_string())
    }
}

impl From<TermListError> for ApiError {
    fn from(err: TermListError) -> Self {
        match err {
            TermListError::Empty => ApiError::EmptyTermList,
            other => ApiError::TermList(other),
        }
    }
}

impl From<ScanError> for ApiError {
    fn from(err: ScanError) -> Self {
        ApiError::Scan(err)
    }
}

impl From<AnnotateError> for ApiError {
    fn from(err: AnnotateError) -> Self {
        ApiError::Annotate(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("request failed: {} ({:?})", self, self.details());
        } else {
            tracing::warn!("request rejected: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            details: self.details(),
        });

        (status, body).into_response()
    }
}
