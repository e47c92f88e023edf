//! Data model for heritage inventory spreadsheets.
//!
//! Shared by the reader, decoder and validator crates:
//!
//! - [`RecordKind`] - museological, bibliographic or archival template
//! - [`Slug`] / [`slugify`] - normalized column identifiers
//! - [`RawSheet`], [`DecodedSheet`], [`Record`], [`ValidationResult`]
//! - [`SheetError`] - the four structural failures

mod error;
mod kind;
mod sheet;
mod slug;

pub use error::{HeaderDifference, HeaderMismatch, ParseRecordKindError, Result, SheetError};
pub use kind::RecordKind;
pub use sheet::{
    DataRow, DecodedSheet, RawRow, RawSheet, Record, SheetContents, ValidationResult,
};
pub use slug::{Slug, slugify};
