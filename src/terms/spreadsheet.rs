//! Term extraction from uploaded spreadsheets
//!
//! Uses the calamine crate for reading workbooks. Only the first column of
//! the first sheet is consulted: every non-empty cell becomes one term, in
//! row order.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};

use super::TermListError;

/// Read the term list from workbook bytes (first sheet, first column).
pub fn terms_from_workbook(bytes: &[u8]) -> Result<Vec<String>, TermListError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| TermListError::UnreadableWorkbook(e.to_string()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names
        .first()
        .ok_or_else(|| TermListError::UnreadableWorkbook("workbook has no sheets".into()))?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| TermListError::UnreadableWorkbook(e.to_string()))?;

    Ok(first_column_terms(&range))
}

/// Collect the first column top to bottom, dropping cells with no usable text.
fn first_column_terms(range: &Range<Data>) -> Vec<String> {
    range
        .rows()
        .filter_map(|row| row.first())
        .filter_map(cell_to_term)
        .collect()
}

/// Convert a cell to its term text, if it has any.
fn cell_to_term(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
