//! Declaration-level validation across record kinds.

use acervo_model::{RawRow, RawSheet, RecordKind, SheetError};
use acervo_standards::{schema_for, template_headers};
use acervo_validate::{SheetStatus, Submission, validate_submission};

fn sheet(kind: RecordKind, rows: usize) -> RawSheet {
    let header: RawRow = template_headers(kind).into_iter().map(String::from).collect();
    let mut sheet = vec![header];
    for seed in 0..rows {
        sheet.push(
            schema_for(kind)
                .expected_headers
                .iter()
                .map(|h| format!("{h}-{seed}"))
                .collect(),
        );
    }
    sheet
}

#[test]
fn empty_submission_is_not_acceptable() {
    let report = validate_submission(Submission::default());
    assert!(Submission::default().is_empty());
    assert!(report.sheets.is_empty());
    assert!(!report.is_acceptable());
}

#[test]
fn kinds_are_validated_independently() {
    let mut archival = sheet(RecordKind::Archival, 1);
    archival[1][1].clear(); // Título

    let submission = Submission::default()
        .with_sheet(RecordKind::Museological, sheet(RecordKind::Museological, 2))
        .with_sheet(RecordKind::Archival, archival);
    let report = validate_submission(submission);

    assert_eq!(report.sheets.len(), 2);
    assert!(report.is_acceptable());
    assert!(report.has_content_errors());
    assert!(report.get(RecordKind::Bibliographic).is_none());
    assert_eq!(
        report.get(RecordKind::Archival).unwrap().status(),
        SheetStatus::Incomplete {
            records: 1,
            missing_required: vec!["Título".into()],
        }
    );
}

#[test]
fn structural_error_in_one_kind_rejects_submission() {
    let submission = Submission::default()
        .with_sheet(RecordKind::Museological, sheet(RecordKind::Museological, 1))
        .with_sheet(RecordKind::Bibliographic, sheet(RecordKind::Archival, 1));
    let report = validate_submission(submission);

    assert!(!report.is_acceptable());
    let bibliographic = report.get(RecordKind::Bibliographic).unwrap();
    assert!(matches!(
        bibliographic.outcome,
        Err(SheetError::HeaderMismatch { kind: RecordKind::Bibliographic, .. })
    ));
}

#[test]
fn summaries_serialize() {
    let mut museological = sheet(RecordKind::Museological, 2);
    museological[2][2].clear(); // Situação

    let submission = Submission::default()
        .with_sheet(RecordKind::Museological, museological)
        .with_sheet(RecordKind::Bibliographic, sheet(RecordKind::Bibliographic, 3))
        .with_sheet(RecordKind::Archival, vec![]);
    let report = validate_submission(submission);

    insta::assert_json_snapshot!(report.summaries(), @r#"
    [
      {
        "kind": "museological",
        "status": "incomplete",
        "records": 2,
        "missing_required": [
          "situacao"
        ]
      },
      {
        "kind": "bibliographic",
        "status": "accepted",
        "records": 3
      },
      {
        "kind": "archival",
        "status": "rejected",
        "code": "EMPTY_SHEET",
        "reason": "sheet has no rows"
      }
    ]
    "#);
}
