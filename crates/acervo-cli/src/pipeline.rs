//! File-level steps shared by the CLI commands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, trace, warn};

use acervo_ingest::{ReaderOptions, read_sheet_contents};
use acervo_model::{RecordKind, SheetError, ValidationResult};
use acervo_standards::template_headers;
use acervo_validate::{Submission, SubmissionReport, validate_contents, validate_submission};

use crate::logging::redact_value;

/// Every sheet validated with all required fields filled.
pub const EXIT_CLEAN: i32 = 0;
/// I/O failure or a sheet rejected for structural reasons.
pub const EXIT_FAILURE: i32 = 1;
/// Sheets were accepted but some required fields are blank.
pub const EXIT_CONTENT_ERRORS: i32 = 2;

/// Reads `path` and validates it against the template for `kind`.
///
/// The outer error covers reading the file; the inner one is the sheet's
/// structural verdict.
pub fn validate_file(
    kind: RecordKind,
    path: &Path,
    options: &ReaderOptions,
) -> Result<std::result::Result<ValidationResult, SheetError>> {
    let contents = read_sheet_contents(path, options)
        .with_context(|| format!("read {kind} sheet {}", path.display()))?;
    debug!(rows = contents.rows.len(), "sheet read");
    if let Some(first) = contents.rows.first().and_then(|row| row.first()) {
        trace!(first_cell = redact_value(first), "header row");
    }

    let outcome = validate_contents(kind, contents);
    match &outcome {
        Ok(result) => info!(
            records = result.record_count(),
            blank_required = result.errors.len(),
            "sheet validated"
        ),
        Err(error) => warn!(code = error.code(), %error, "sheet rejected"),
    }
    Ok(outcome)
}

/// Reads every attached file and validates them as one declaration.
pub fn validate_files(
    files: &[(RecordKind, &Path)],
    options: &ReaderOptions,
) -> Result<SubmissionReport> {
    let mut submission = Submission::default();
    for (kind, path) in files {
        let contents = read_sheet_contents(path, options)
            .with_context(|| format!("read {kind} sheet {}", path.display()))?;
        debug!(%kind, rows = contents.rows.len(), "sheet read");
        submission = submission.with_contents(*kind, contents);
    }
    let report = validate_submission(submission);
    info!(
        sheets = report.sheets.len(),
        acceptable = report.is_acceptable(),
        "submission validated"
    );
    Ok(report)
}

pub fn validation_exit_code(outcome: &std::result::Result<ValidationResult, SheetError>) -> i32 {
    match outcome {
        Ok(result) if result.has_errors() => EXIT_CONTENT_ERRORS,
        Ok(_) => EXIT_CLEAN,
        Err(_) => EXIT_FAILURE,
    }
}

pub fn submission_exit_code(report: &SubmissionReport) -> i32 {
    if !report.is_acceptable() {
        EXIT_FAILURE
    } else if report.has_content_errors() {
        EXIT_CONTENT_ERRORS
    } else {
        EXIT_CLEAN
    }
}

/// Writes the blank template for `kind` as a single CSV header row.
pub fn write_template<W: Write>(kind: RecordKind, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(template_headers(kind))
        .with_context(|| format!("write {kind} template"))?;
    csv.flush().context("flush template")?;
    Ok(())
}
