//! Spreadsheet file readers.
//!
//! Readers only produce a [`RawSheet`]; they never interpret headers.

mod delimited;
mod workbook;

use std::path::Path;

use acervo_model::{RawSheet, SheetContents};

use crate::error::{IngestError, Result};

pub use delimited::read_delimited;
pub use workbook::read_workbook;

/// Maximum file size accepted by default (50 MB).
pub const MAX_SHEET_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Options for reading a spreadsheet file.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Files larger than this are rejected before parsing.
    pub max_file_size: u64,
    /// Field delimiter for text files. Defaults to `,` for `.csv` and tab for `.tsv`.
    pub delimiter: Option<u8>,
    /// Worksheet to read from a workbook. Defaults to the first sheet.
    pub sheet: Option<String>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_SHEET_FILE_SIZE,
            delimiter: None,
            sheet: None,
        }
    }
}

impl ReaderOptions {
    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Option<u8>) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }
}

/// File formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Tsv,
    Workbook,
}

impl SheetFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Reads a spreadsheet file into a raw sheet, picking the reader by extension.
pub fn read_sheet(path: &Path, options: &ReaderOptions) -> Result<RawSheet> {
    read_sheet_contents(path, options).map(|contents| contents.rows)
}

/// Like [`read_sheet`], keeping the worksheet row the sheet starts on.
pub fn read_sheet_contents(path: &Path, options: &ReaderOptions) -> Result<SheetContents> {
    let format = SheetFormat::from_path(path)?;
    check_file_size_with_limit(path, options.max_file_size)?;

    let contents: SheetContents = match format {
        SheetFormat::Csv => read_delimited(path, options.delimiter.unwrap_or(b','))?.into(),
        SheetFormat::Tsv => read_delimited(path, options.delimiter.unwrap_or(b'\t'))?.into(),
        SheetFormat::Workbook => read_workbook(path, options.sheet.as_deref())?,
    };

    tracing::debug!(
        path = %path.display(),
        format = ?format,
        rows = contents.rows.len(),
        first_row = contents.first_row,
        "Read sheet"
    );
    Ok(contents)
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn io_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SheetFormat::from_path(Path::new("a.CSV")).unwrap(), SheetFormat::Csv);
        assert_eq!(SheetFormat::from_path(Path::new("a.tsv")).unwrap(), SheetFormat::Tsv);
        assert_eq!(
            SheetFormat::from_path(Path::new("INBCM_Museologia.xlsx")).unwrap(),
            SheetFormat::Workbook
        );
        assert!(matches!(
            SheetFormat::from_path(Path::new("notes.txt")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            SheetFormat::from_path(Path::new("no_extension")),
            Err(IngestError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_reader_options_builder() {
        let options = ReaderOptions::default()
            .with_max_file_size(10)
            .with_delimiter(Some(b';'))
            .with_sheet(Some("Acervo".to_string()));
        assert_eq!(options.max_file_size, 10);
        assert_eq!(options.delimiter, Some(b';'));
        assert_eq!(options.sheet.as_deref(), Some("Acervo"));
    }
}
