//! Validation of a full declaration: up to one sheet per record kind.

use acervo_model::{RawSheet, RecordKind, SheetContents, SheetError, Slug, ValidationResult};
use serde::Serialize;

use crate::facade::validate_contents;

/// Sheets attached to one declaration. Each kind is optional.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub museological: Option<SheetContents>,
    pub bibliographic: Option<SheetContents>,
    pub archival: Option<SheetContents>,
}

impl Submission {
    #[must_use]
    pub fn with_sheet(self, kind: RecordKind, sheet: RawSheet) -> Self {
        self.with_contents(kind, sheet.into())
    }

    #[must_use]
    pub fn with_contents(mut self, kind: RecordKind, contents: SheetContents) -> Self {
        *self.slot(kind) = Some(contents);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.museological.is_none() && self.bibliographic.is_none() && self.archival.is_none()
    }

    fn slot(&mut self, kind: RecordKind) -> &mut Option<SheetContents> {
        match kind {
            RecordKind::Museological => &mut self.museological,
            RecordKind::Bibliographic => &mut self.bibliographic,
            RecordKind::Archival => &mut self.archival,
        }
    }
}

/// Outcome for one attached sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    pub kind: RecordKind,
    pub outcome: Result<ValidationResult, SheetError>,
}

impl SheetReport {
    pub fn status(&self) -> SheetStatus {
        match &self.outcome {
            Ok(result) if result.has_errors() => SheetStatus::Incomplete {
                records: result.record_count(),
                missing_required: result.errors.clone(),
            },
            Ok(result) => SheetStatus::Accepted {
                records: result.record_count(),
            },
            Err(error) => SheetStatus::Rejected {
                code: error.code(),
                reason: error.to_string(),
            },
        }
    }

    pub fn summary(&self) -> SheetSummary {
        SheetSummary {
            kind: self.kind,
            status: self.status(),
        }
    }
}

/// Serializable status of a sheet, without its records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SheetStatus {
    /// Template matched and every required cell is filled.
    Accepted { records: usize },
    /// Template matched but some required cells are blank.
    Incomplete {
        records: usize,
        missing_required: Vec<Slug>,
    },
    /// Structural error; the sheet cannot be used.
    Rejected { code: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub kind: RecordKind,
    #[serde(flatten)]
    pub status: SheetStatus,
}

/// Per-kind outcomes in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionReport {
    pub sheets: Vec<SheetReport>,
}

impl SubmissionReport {
    /// At least one sheet was attached and none has a structural error.
    pub fn is_acceptable(&self) -> bool {
        !self.sheets.is_empty() && self.sheets.iter().all(|sheet| sheet.outcome.is_ok())
    }

    /// Some attached sheet has blank required cells.
    pub fn has_content_errors(&self) -> bool {
        self.sheets
            .iter()
            .any(|sheet| matches!(&sheet.outcome, Ok(result) if result.has_errors()))
    }

    pub fn get(&self, kind: RecordKind) -> Option<&SheetReport> {
        self.sheets.iter().find(|sheet| sheet.kind == kind)
    }

    pub fn summaries(&self) -> Vec<SheetSummary> {
        self.sheets.iter().map(SheetReport::summary).collect()
    }
}

/// Validates every attached sheet independently.
pub fn validate_submission(submission: Submission) -> SubmissionReport {
    let Submission {
        museological,
        bibliographic,
        archival,
    } = submission;

    let sheets = [
        (RecordKind::Museological, museological),
        (RecordKind::Bibliographic, bibliographic),
        (RecordKind::Archival, archival),
    ]
    .into_iter()
    .filter_map(|(kind, sheet)| {
        sheet.map(|contents| SheetReport {
            kind,
            outcome: validate_contents(kind, contents),
        })
    })
    .collect();

    SubmissionReport { sheets }
}
