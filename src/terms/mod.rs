//! Term list resolution
//!
//! Every request resolves one ordered term list before scanning: the first
//! column of an uploaded spreadsheet when one is present, the built-in watch
//! list otherwise. Resolution happens once, at request start; the resolved
//! list is owned by the request and dropped with it.

pub mod defaults;
pub mod spreadsheet;

pub use defaults::DEFAULT_TERMS;

use thiserror::Error;

/// Error type for term list resolution
#[derive(Debug, Error)]
pub enum TermListError {
    #[error("no usable terms in the first spreadsheet column")]
    Empty,

    #[error("failed to read workbook: {0}")]
    UnreadableWorkbook(String),
}

/// Where a request's term list comes from
#[derive(Debug, Clone)]
pub enum TermSource {
    /// Terms supplied by the caller (spreadsheet first column)
    Provided(Vec<String>),
    /// The built-in watch list
    Default,
}

impl TermSource {
    /// Build a source from the optional spreadsheet upload.
    pub fn from_upload(spreadsheet: Option<&[u8]>) -> Result<Self, TermListError> {
        match spreadsheet {
            Some(bytes) => Ok(Self::Provided(spreadsheet::terms_from_workbook(bytes)?)),
            None => Ok(Self::Default),
        }
    }

    /// Resolve into the concrete ordered term list used for scanning.
    ///
    /// A provided list that resolved to nothing is a caller error, never a
    /// silent empty scan.
    pub fn resolve(self) -> Result<Vec<String>, TermListError> {
        match self {
            Self::Provided(terms) if terms.is_empty() => Err(TermListError::Empty),
            Self::Provided(terms) => Ok(terms),
            Self::Default => Ok(DEFAULT_TERMS.iter().map(|t| t.to_string()).collect()),
        }
    }
}
