//! Validation of inventory spreadsheets against the declaration templates.
//!
//! A sheet is first decoded (headers slugified, empty rows dropped), then its
//! header row must equal the template for its record kind, column for column.
//! Rows must be as wide as the header row. Blank required cells are collected
//! into [`ValidationResult::errors`](acervo_model::ValidationResult) without
//! failing the call.
//!
//! # Example
//!
//! ```
//! use acervo_standards::template_headers;
//! use acervo_model::RecordKind;
//! use acervo_validate::validate_archival;
//!
//! let header: Vec<String> = template_headers(RecordKind::Archival)
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//! let mut row = vec!["x".to_string(); header.len()];
//! row[1] = String::new(); // Título
//!
//! let result = validate_archival(vec![header, row]).unwrap();
//! assert_eq!(result.errors, vec!["titulo"]);
//! assert_eq!(result.records[0].get("titulo"), Some(""));
//! ```

mod facade;
mod submission;
mod validator;

pub use facade::{
    validate_archival, validate_bibliographic, validate_contents, validate_museological,
    validate_sheet,
};
pub use submission::{
    SheetReport, SheetStatus, SheetSummary, Submission, SubmissionReport, validate_submission,
};
pub use validator::{match_headers, validate};
