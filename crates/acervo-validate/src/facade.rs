//! One entry point per record kind.

use acervo_ingest::decode_from;
use acervo_model::{RawSheet, RecordKind, Result, SheetContents, ValidationResult};

use crate::validator::validate;

/// Decodes `sheet` and validates it against the template for `kind`.
pub fn validate_sheet(kind: RecordKind, sheet: RawSheet) -> Result<ValidationResult> {
    validate_contents(kind, sheet.into())
}

/// Same as [`validate_sheet`]; row numbers in errors count from
/// `contents.first_row`.
pub fn validate_contents(kind: RecordKind, contents: SheetContents) -> Result<ValidationResult> {
    let decoded = decode_from(contents.rows, contents.first_row)?;
    validate(kind, &decoded.headers, &decoded.rows)
}

/// Validates a museological inventory sheet.
pub fn validate_museological(sheet: RawSheet) -> Result<ValidationResult> {
    validate_sheet(RecordKind::Museological, sheet)
}

/// Validates a bibliographic inventory sheet.
pub fn validate_bibliographic(sheet: RawSheet) -> Result<ValidationResult> {
    validate_sheet(RecordKind::Bibliographic, sheet)
}

/// Validates an archival inventory sheet.
pub fn validate_archival(sheet: RawSheet) -> Result<ValidationResult> {
    validate_sheet(RecordKind::Archival, sheet)
}
