//! CSV and TSV reading.

use std::path::Path;

use acervo_model::{RawRow, RawSheet};
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

use super::io_error;

/// Reads every record of a delimited text file as a row of cells.
///
/// Rows may differ in width; the validator decides whether that is an error.
/// Blank lines are skipped by the parser, cell values are kept verbatim.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<RawSheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut sheet = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let row: RawRow = record.iter().map(str::to_string).collect();
        sheet.push(row);
    }

    if let Some(first) = sheet.first_mut().and_then(|row| row.first_mut()) {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }

    Ok(sheet)
}

fn csv_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(io) => io_error(path, io),
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}
