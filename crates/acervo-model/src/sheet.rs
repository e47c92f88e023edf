//! Tabular data passed between the reader, decoder and validator.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::slug::Slug;

/// One row of cell strings as produced by a spreadsheet reader.
pub type RawRow = Vec<String>;

/// A fully materialized worksheet. Row 0 is the header row.
pub type RawSheet = Vec<RawRow>;

/// A raw sheet plus the sheet row its first row was read from.
///
/// Workbook ranges start at the first non-empty cell, so `rows[0]` is not
/// always row 1 of the worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetContents {
    pub rows: RawSheet,
    /// 1-based sheet row of `rows[0]`.
    pub first_row: usize,
}

impl SheetContents {
    pub fn new(rows: RawSheet, first_row: usize) -> Self {
        Self { rows, first_row }
    }
}

impl From<RawSheet> for SheetContents {
    fn from(rows: RawSheet) -> Self {
        Self::new(rows, 1)
    }
}

/// A data row together with its 1-based position in the source sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    /// Sheet row number.
    pub number: usize,
    pub cells: RawRow,
}

impl DataRow {
    pub fn new(number: usize, cells: RawRow) -> Self {
        Self { number, cells }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

/// A sheet split into normalized headers and candidate data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSheet {
    pub headers: Vec<Slug>,
    pub rows: Vec<DataRow>,
}

/// The values of one data row keyed by column slug, in column order.
///
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(Slug, String)>,
}

impl Record {
    /// Zips headers with cells. Missing cells become empty strings.
    pub fn from_row(headers: &[Slug], cells: &[String]) -> Self {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), cells.get(idx).cloned().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Value stored for `field`, if the column exists.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(slug, _)| slug == field)
            .map(|(_, value)| value.as_str())
    }

    /// True when the column exists and holds the empty string.
    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).is_some_and(str::is_empty)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (slug, value) in &self.fields {
            map.serialize_entry(slug, value)?;
        }
        map.end()
    }
}

/// Outcome of validating a structurally sound sheet.
///
/// `errors` lists each required column that was blank in at least one row,
/// once, in the order the gaps were first met. Rows with gaps are still
/// present in `records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ValidationResult {
    pub records: Vec<Record>,
    pub errors: Vec<Slug>,
}

impl ValidationResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
