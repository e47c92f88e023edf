//! Terminal and JSON rendering of validation outcomes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use acervo_model::{Record, RecordKind, SheetError, Slug, ValidationResult};
use acervo_standards::{field_label, schema_for};
use acervo_validate::{SheetStatus, SubmissionReport};

/// JSON document printed by `acervo validate --format json`.
#[derive(Debug, Serialize)]
pub struct ValidationOutput<'a> {
    pub kind: RecordKind,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<&'a [Record]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<&'a [Slug]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,
}

#[derive(Debug, Serialize)]
pub struct Rejection {
    pub code: &'static str,
    pub reason: String,
    pub guidance: &'static str,
}

impl<'a> ValidationOutput<'a> {
    pub fn new(kind: RecordKind, outcome: &'a Result<ValidationResult, SheetError>) -> Self {
        match outcome {
            Ok(result) => Self {
                kind,
                status: if result.has_errors() { "incomplete" } else { "accepted" },
                records: Some(&result.records),
                errors: Some(&result.errors),
                rejection: None,
            },
            Err(error) => Self {
                kind,
                status: "rejected",
                records: None,
                errors: None,
                rejection: Some(Rejection {
                    code: error.code(),
                    reason: error.to_string(),
                    guidance: error.guidance(),
                }),
            },
        }
    }
}

/// Human-readable summary of one validated sheet.
pub fn render_validation(kind: RecordKind, source: &str, result: &ValidationResult) -> String {
    let mut out = format!(
        "Kind: {} ({kind})\nFile: {source}\nRecords: {}\n",
        kind.label(),
        result.record_count()
    );
    if !result.has_errors() {
        out.push_str("All required fields are filled.\n");
        return out;
    }

    let schema = schema_for(kind);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for slug in &result.errors {
        let position = schema
            .position(slug.as_str())
            .map_or_else(|| "-".to_string(), |idx| (idx + 1).to_string());
        table.add_row(vec![
            dim_cell(position),
            Cell::new(field_label(kind, slug.as_str()).unwrap_or(slug.as_str())),
            Cell::new(slug.as_str()).fg(Color::Red),
        ]);
    }
    out.push_str(&format!(
        "Required fields left blank in at least one row ({}):\n{table}\n",
        result.errors.len()
    ));
    out
}

/// Human-readable explanation of a structural error.
pub fn render_rejection(kind: RecordKind, source: &str, error: &SheetError) -> String {
    format!(
        "Kind: {} ({kind})\nFile: {source}\nRejected [{}]: {}\n  {error}\n",
        kind.label(),
        error.code(),
        error.guidance()
    )
}

/// One row per attached sheet of a declaration.
pub fn render_submission(report: &SubmissionReport) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Status"),
        header_cell("Records"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for sheet in &report.sheets {
        let kind_cell = Cell::new(sheet.kind.label())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold);
        let row = match sheet.status() {
            SheetStatus::Accepted { records } => vec![
                kind_cell,
                Cell::new("accepted").fg(Color::Green),
                Cell::new(records),
                dim_cell("-"),
            ],
            SheetStatus::Incomplete {
                records,
                missing_required,
            } => {
                let labels = acervo_standards::labelled_errors(sheet.kind, &missing_required);
                vec![
                    kind_cell,
                    Cell::new("incomplete").fg(Color::Yellow),
                    Cell::new(records),
                    Cell::new(format!("blank: {}", labels.join(", "))),
                ]
            }
            SheetStatus::Rejected { code, reason } => vec![
                kind_cell,
                Cell::new("rejected")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                dim_cell("-"),
                Cell::new(format!("{code}: {reason}")),
            ],
        };
        table.add_row(row);
    }

    let verdict = if !report.is_acceptable() {
        "Submission rejected: fix the structural errors and upload again."
    } else if report.has_content_errors() {
        "Submission accepted with blank required fields."
    } else {
        "Submission accepted."
    };
    format!("{table}\n{verdict}\n")
}

/// Template columns with their labels and required flags.
pub fn render_schema(kind: RecordKind) -> String {
    let schema = schema_for(kind);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Slug"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);

    for (idx, slug) in schema.expected_headers.iter().copied().enumerate() {
        let required = if schema.is_required(slug) {
            Cell::new("yes").fg(Color::Yellow)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(field_label(kind, slug).unwrap_or(slug)),
            Cell::new(slug),
            required,
        ]);
    }
    format!(
        "{} ({kind}): {} columns, {} required\n{table}\n",
        kind.label(),
        schema.column_count(),
        schema.required_fields.len()
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
