//! Splits a raw sheet into normalized headers and data rows.

use acervo_model::{DataRow, DecodedSheet, RawSheet, Result, SheetError, Slug};

/// Decodes a raw sheet without looking at any template.
///
/// Row 0 becomes the slugified header row. Zero-length rows after it are
/// dropped; rows of empty cells are kept.
///
/// # Errors
///
/// [`SheetError::EmptySheet`] when the sheet has no rows and
/// [`SheetError::EmptyData`] when no data rows remain.
pub fn decode(sheet: RawSheet) -> Result<DecodedSheet> {
    decode_from(sheet, 1)
}

/// Like [`decode`], for a sheet whose header sits on worksheet row
/// `header_row` (1-based). Data rows are numbered from there.
pub fn decode_from(sheet: RawSheet, header_row: usize) -> Result<DecodedSheet> {
    let mut lines = sheet.into_iter();
    let header_cells = lines.next().ok_or(SheetError::EmptySheet)?;

    let headers: Vec<Slug> = header_cells
        .iter()
        .map(|cell| Slug::from_header(cell))
        .collect();

    let rows: Vec<DataRow> = lines
        .enumerate()
        .filter(|(_, cells)| !cells.is_empty())
        .map(|(idx, cells)| DataRow::new(header_row + idx + 1, cells))
        .collect();

    if rows.is_empty() {
        return Err(SheetError::EmptyData);
    }

    Ok(DecodedSheet { headers, rows })
}
