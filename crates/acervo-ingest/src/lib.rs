//! Inventory spreadsheet ingestion.
//!
//! This crate turns spreadsheet files into raw cell grids and decodes those
//! grids into normalized headers and data rows.
//!
//! # Features
//!
//! - **File Reading**: CSV/TSV through `csv`, XLSX/XLS/ODS through `calamine`
//! - **Sheet Decoding**: header slugification and empty-row filtering
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use acervo_ingest::{ReaderOptions, decode, read_sheet};
//!
//! let sheet = read_sheet(Path::new("INBCM_Museologia.xlsx"), &ReaderOptions::default())?;
//! let decoded = decode(sheet)?;
//! println!("{} columns, {} rows", decoded.headers.len(), decoded.rows.len());
//! ```

mod decode;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sheet Decoding ===
pub use decode::{decode, decode_from};

// === File Reading ===
pub use reader::{
    MAX_SHEET_FILE_SIZE, ReaderOptions, SheetFormat, check_file_size_with_limit, read_delimited,
    read_sheet, read_sheet_contents, read_workbook,
};
