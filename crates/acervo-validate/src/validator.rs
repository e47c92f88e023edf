//! Template matching and row validation.

use acervo_model::{
    DataRow, HeaderDifference, HeaderMismatch, Record, RecordKind, Result, SheetError, Slug,
    ValidationResult,
};
use acervo_standards::{Schema, schema_for};

/// Validates decoded headers and rows against the template for `kind`.
///
/// Structural problems abort with an error. Blank required cells do not: each
/// affected column is listed once in [`ValidationResult::errors`] and every
/// row is still returned.
///
/// # Errors
///
/// [`SheetError::HeaderMismatch`] when the headers differ from the template
/// in any way, [`SheetError::RowWidth`] when a row's width differs from the
/// header row.
pub fn validate(kind: RecordKind, headers: &[Slug], rows: &[DataRow]) -> Result<ValidationResult> {
    let schema = schema_for(kind);

    match_headers(schema, headers).map_err(|mismatch| SheetError::HeaderMismatch { kind, mismatch })?;
    check_row_widths(headers.len(), rows)?;

    let records: Vec<Record> = rows
        .iter()
        .map(|row| Record::from_row(headers, &row.cells))
        .collect();
    let errors = missing_required(schema, &records);

    Ok(ValidationResult { records, errors })
}

/// Exact, ordered comparison of a header row with the template.
pub fn match_headers(schema: &Schema, headers: &[Slug]) -> std::result::Result<(), HeaderMismatch> {
    let expected = schema.expected_headers;
    if headers.len() == expected.len() && headers.iter().zip(expected).all(|(found, exp)| found == exp)
    {
        return Ok(());
    }

    let first_difference = (0..expected.len().max(headers.len()))
        .find(|&idx| headers.get(idx).map(Slug::as_str) != expected.get(idx).copied())
        .map(|idx| HeaderDifference {
            column: idx + 1,
            expected: expected.get(idx).map(|slug| (*slug).to_string()),
            found: headers.get(idx).map(Slug::to_string),
        });

    Err(HeaderMismatch {
        expected_columns: expected.len(),
        found_columns: headers.len(),
        first_difference,
    })
}

/// Every row must have exactly `width` cells. Ragged rows are not padded.
fn check_row_widths(width: usize, rows: &[DataRow]) -> Result<()> {
    match rows.iter().find(|row| row.width() != width) {
        Some(row) => Err(SheetError::RowWidth {
            row: row.number,
            expected: width,
            found: row.width(),
        }),
        None => Ok(()),
    }
}

/// Required columns blank in at least one record, in the order first seen:
/// row by row, then by the template's required-field order.
fn missing_required(schema: &Schema, records: &[Record]) -> Vec<Slug> {
    let mut missing: Vec<Slug> = Vec::new();
    for record in records {
        for field in schema.required_fields {
            if record.is_blank(field) && !missing.iter().any(|slug| slug == field) {
                missing.push(Slug::from_header(field));
            }
        }
    }
    missing
}
