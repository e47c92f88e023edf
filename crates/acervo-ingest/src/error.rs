//! Error types for reading spreadsheet files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a file into a raw sheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, larger than the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Extension is not a known spreadsheet format.
    #[error("unsupported file format '{extension}' for {path} (expected csv, tsv, xlsx, xlsm, xls or ods)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Failed to parse delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Workbook has no worksheet with the requested name.
    #[error("worksheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    /// Workbook contains no worksheets.
    #[error("workbook {path} has no worksheets")]
    NoWorksheets { path: PathBuf },
}

/// Result type for reading operations.
pub type Result<T> = std::result::Result<T, IngestError>;
