//! Structural sheet errors.

use std::fmt;

use thiserror::Error;

use crate::kind::RecordKind;

/// A condition that makes the whole sheet unusable for its record kind.
///
/// Blank required cells are not structural; they are reported through
/// [`ValidationResult::errors`](crate::ValidationResult::errors).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// The sheet has no rows at all.
    #[error("sheet has no rows")]
    EmptySheet,

    /// The sheet has a header row but no data rows.
    #[error("sheet has no data rows")]
    EmptyData,

    /// The header row does not follow the template for `kind`.
    #[error("{kind} header row does not match the template: {mismatch}")]
    HeaderMismatch {
        kind: RecordKind,
        mismatch: HeaderMismatch,
    },

    /// A data row has a different number of cells than the header row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl SheetError {
    /// Stable identifier for callers that map errors to their own messages.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptySheet => "EMPTY_SHEET",
            Self::EmptyData => "EMPTY_DATA",
            Self::HeaderMismatch { .. } => "INVALID_HEADERS",
            Self::RowWidth { .. } => "INVALID_ROW",
        }
    }

    /// What the user should be told.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::EmptySheet => "The file could not be read as a spreadsheet.",
            Self::EmptyData => "The file has no items to declare.",
            Self::HeaderMismatch { .. } => "The file does not follow the official template.",
            Self::RowWidth { .. } => "A row has the wrong number of columns.",
        }
    }
}

/// Where a header row first departs from its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMismatch {
    pub expected_columns: usize,
    pub found_columns: usize,
    /// First differing column (1-based) with the expected and found slugs.
    /// `None` on either side means the row ended early.
    pub first_difference: Option<HeaderDifference>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDifference {
    pub column: usize,
    pub expected: Option<String>,
    pub found: Option<String>,
}

impl fmt::Display for HeaderMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} columns, found {}",
            self.expected_columns, self.found_columns
        )?;
        if let Some(diff) = &self.first_difference {
            write!(
                f,
                "; column {} expected `{}`, found `{}`",
                diff.column,
                diff.expected.as_deref().unwrap_or("<none>"),
                diff.found.as_deref().unwrap_or("<none>")
            )?;
        }
        Ok(())
    }
}

/// Error returned when a string names no known record kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record kind '{value}' (expected museological, bibliographic or archival)")]
pub struct ParseRecordKindError {
    pub value: String,
}

/// Result type for sheet decoding and validation.
pub type Result<T> = std::result::Result<T, SheetError>;
