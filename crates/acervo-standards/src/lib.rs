//! Spreadsheet templates for heritage inventory declarations.
//!
//! # Example
//!
//! ```
//! use acervo_model::RecordKind;
//! use acervo_standards::{field_label, schema_for};
//!
//! let schema = schema_for(RecordKind::Archival);
//! assert_eq!(schema.column_count(), 16);
//! assert!(schema.is_required("titulo"));
//! assert_eq!(field_label(RecordKind::Archival, "titulo"), Some("Título"));
//! ```

mod labels;
mod schema;

pub use labels::{field_label, labelled_errors, template_headers};
pub use schema::{Schema, schema_for};
