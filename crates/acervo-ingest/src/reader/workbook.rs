//! Excel and OpenDocument workbook reading.

use std::path::Path;

use acervo_model::{RawRow, SheetContents};
use calamine::{Data, Reader, open_workbook_auto};

use crate::error::{IngestError, Result};

/// Reads one worksheet of a workbook as rows of display strings.
///
/// The first worksheet is used unless `sheet` names another one. Rows where
/// every cell is empty come back zero-length so the decoder drops them; all
/// other rows keep the full width of the used range. Leading blank rows are
/// not returned; `first_row` says where the range starts.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<SheetContents> {
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, &e))?;

    let names = workbook.sheet_names();
    let name = match sheet {
        Some(requested) => names
            .iter()
            .find(|name| name.as_str() == requested)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: requested.to_string(),
            })?,
        None => names.first().cloned().ok_or_else(|| IngestError::NoWorksheets {
            path: path.to_path_buf(),
        })?,
    };

    if sheet.is_none() && names.len() > 1 {
        tracing::warn!(
            path = %path.display(),
            sheet = %name,
            sheets = names.len(),
            "Workbook has several worksheets, reading the first one"
        );
    }

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| workbook_error(path, &e))?;

    let first_row = range.start().map_or(1, |(row, _)| row as usize + 1);
    let rows = range.rows().map(row_cells).collect();
    Ok(SheetContents::new(rows, first_row))
}

fn row_cells(cells: &[Data]) -> RawRow {
    if cells.iter().all(|cell| matches!(cell, Data::Empty)) {
        return Vec::new();
    }
    cells.iter().map(cell_text).collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}

fn workbook_error(path: &Path, error: &calamine::Error) -> IngestError {
    IngestError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
