//! Multipart upload extraction
//!
//! Both scan endpoints accept the same form shape: a required `pdf_file`
//! field and an optional `excel_file` carrying the term spreadsheet.
//! Fields are read fully into memory; unknown fields are skipped.

use axum::extract::Multipart;

use crate::error::ApiError;

/// Field name for the PDF document
const PDF_FIELD: &str = "pdf_file";

/// Field name for the optional term spreadsheet
const SPREADSHEET_FIELD: &str = "excel_file";

/// The uploads a scan request may carry
#[derive(Debug, Default)]
pub struct ScanUpload {
    pub pdf: Option<Vec<u8>>,
    pub spreadsheet: Option<Vec<u8>>,
}

impl ScanUpload {
    /// The PDF is required; a request without one is a caller error.
    pub fn require_pdf(self) -> Result<(Vec<u8>, Option<Vec<u8>>), ApiError> {
        match self.pdf {
            Some(pdf) => Ok((pdf, self.spreadsheet)),
            None => Err(ApiError::MissingPdf),
        }
    }
}

/// Read every field of the multipart form into memory.
pub async fn read_scan_upload(multipart: &mut Multipart) -> Result<ScanUpload, ApiError> {
    let mut upload = ScanUpload::default();

    while let Some(field) = multipart.next_field().await.map_err(ApiError::Upload)? {
        let name = field.name().unwrap_or("").to_string();
        let filename = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());

        tracing::debug!(
            "received field: name='{}', filename={:?}, content_type={:?}",
            name,
            filename,
            content_type
        );

        match name.as_str() {
            PDF_FIELD => {
                let data = field.bytes().await.map_err(ApiError::Upload)?;
                tracing::debug!("read {} bytes of PDF data", data.len());
                upload.pdf = Some(data.to_vec());
            }
            SPREADSHEET_FIELD => {
                let data = field.bytes().await.map_err(ApiError::Upload)?;
                tracing::debug!("read {} bytes of spreadsheet data", data.len());
                upload.spreadsheet = Some(data.to_vec());
            }
            other => {
                tracing::debug!("ignoring unknown field '{}'", other);
            }
        }
    }

    Ok(upload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pdf_is_rejected() {
        let upload = ScanUpload {
            pdf: None,
            spreadsheet: Some(vec![1, 2, 3]),
        };
        assert!(matches!(upload.require_pdf(), Err(ApiError::MissingPdf)));
    }

    #[test]
    fn test_pdf_and_spreadsheet_pass_through() {
        let upload = ScanUpload {
            pdf: Some(vec![b'%']),
            spreadsheet: None,
        };
        let (pdf, spreadsheet) = upload.require_pdf().unwrap();
        assert_eq!(pdf, vec![b'%']);
        assert!(spreadsheet.is_none());
    }
}
