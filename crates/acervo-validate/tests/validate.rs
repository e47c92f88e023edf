//! End-to-end validation through the per-kind entry points.

use acervo_model::{RawRow, RawSheet, RecordKind, SheetContents, SheetError};
use acervo_standards::{schema_for, template_headers};
use acervo_validate::{
    validate_archival, validate_bibliographic, validate_contents, validate_museological,
    validate_sheet,
};

fn header_row(kind: RecordKind) -> RawRow {
    template_headers(kind).into_iter().map(String::from).collect()
}

fn slug_header_row(kind: RecordKind) -> RawRow {
    schema_for(kind)
        .expected_headers
        .iter()
        .map(|h| (*h).to_string())
        .collect()
}

fn filled_row(kind: RecordKind, seed: usize) -> RawRow {
    schema_for(kind)
        .expected_headers
        .iter()
        .map(|h| format!("{h}-{seed}"))
        .collect()
}

fn sheet_with_rows(kind: RecordKind, rows: usize) -> RawSheet {
    let mut sheet = vec![header_row(kind)];
    sheet.extend((0..rows).map(|seed| filled_row(kind, seed)));
    sheet
}

fn column(kind: RecordKind, slug: &str) -> usize {
    schema_for(kind).position(slug).unwrap()
}

#[test]
fn well_formed_sheets_validate_cleanly() {
    for kind in RecordKind::ALL {
        let result = validate_sheet(kind, sheet_with_rows(kind, 3)).unwrap();
        assert!(result.errors.is_empty(), "{kind}");
        assert_eq!(result.records.len(), 3, "{kind}");
    }
}

#[test]
fn slug_headers_are_accepted_as_is() {
    for kind in RecordKind::ALL {
        let sheet = vec![slug_header_row(kind), filled_row(kind, 1)];
        assert!(validate_sheet(kind, sheet).is_ok(), "{kind}");
    }
}

#[test]
fn entry_points_select_their_template() {
    assert!(validate_museological(sheet_with_rows(RecordKind::Museological, 1)).is_ok());
    assert!(validate_bibliographic(sheet_with_rows(RecordKind::Bibliographic, 1)).is_ok());
    assert!(validate_archival(sheet_with_rows(RecordKind::Archival, 1)).is_ok());

    let err = validate_archival(sheet_with_rows(RecordKind::Museological, 1)).unwrap_err();
    assert!(matches!(err, SheetError::HeaderMismatch { kind: RecordKind::Archival, .. }));
}

#[test]
fn removing_any_column_is_a_header_mismatch() {
    for kind in RecordKind::ALL {
        let width = schema_for(kind).column_count();
        for removed in 0..width {
            let mut sheet = sheet_with_rows(kind, 1);
            for row in &mut sheet {
                row.remove(removed);
            }
            let err = validate_sheet(kind, sheet).unwrap_err();
            assert!(
                matches!(err, SheetError::HeaderMismatch { .. }),
                "{kind}: removing column {removed} gave {err:?}"
            );
        }
    }
}

#[test]
fn reordered_columns_are_a_header_mismatch() {
    for kind in RecordKind::ALL {
        let mut sheet = sheet_with_rows(kind, 1);
        for row in &mut sheet {
            row.swap(0, 1);
        }
        let err = validate_sheet(kind, sheet).unwrap_err();
        assert!(matches!(err, SheetError::HeaderMismatch { .. }), "{kind}");
    }
}

#[test]
fn renamed_column_is_a_header_mismatch() {
    let mut sheet = sheet_with_rows(RecordKind::Archival, 1);
    sheet[0][2] = "Data de criação".to_string();
    let err = validate_archival(sheet).unwrap_err();
    assert_eq!(err.code(), "INVALID_HEADERS");
}

#[test]
fn required_gap_is_reported_once() {
    let kind = RecordKind::Bibliographic;
    let titulo = column(kind, "titulo");
    let mut sheet = sheet_with_rows(kind, 5);
    for row in sheet.iter_mut().skip(1) {
        row[titulo].clear();
    }

    let result = validate_bibliographic(sheet).unwrap();
    assert_eq!(result.errors, vec!["titulo"]);
    assert_eq!(result.records.len(), 5);
    assert!(result.records.iter().all(|r| r.get("titulo") == Some("")));
}

#[test]
fn gaps_are_listed_in_the_order_rows_reveal_them() {
    let kind = RecordKind::Archival;
    let mut sheet = sheet_with_rows(kind, 2);
    sheet[1][column(kind, "nomedoprodutor")].clear();
    sheet[2][column(kind, "titulo")].clear();

    let result = validate_archival(sheet).unwrap();
    assert_eq!(result.errors, vec!["nomedoprodutor", "titulo"]);
}

#[test]
fn optional_gap_is_not_an_error() {
    let kind = RecordKind::Museological;
    let titulo = column(kind, "titulo");
    assert!(!schema_for(kind).is_required("titulo"));

    let mut sheet = sheet_with_rows(kind, 1);
    sheet[1][titulo].clear();

    let result = validate_museological(sheet).unwrap();
    assert!(result.errors.is_empty());
    assert_eq!(result.records[0].get("titulo"), Some(""));
}

#[test]
fn whitespace_only_cell_is_not_blank() {
    let kind = RecordKind::Archival;
    let mut sheet = sheet_with_rows(kind, 1);
    sheet[1][column(kind, "titulo")] = " ".to_string();

    let result = validate_archival(sheet).unwrap();
    assert!(result.errors.is_empty());
}

#[test]
fn header_only_sheet_is_empty_data() {
    for kind in RecordKind::ALL {
        let err = validate_sheet(kind, vec![header_row(kind)]).unwrap_err();
        assert_eq!(err, SheetError::EmptyData, "{kind}");
    }
}

#[test]
fn empty_sheet_is_empty_sheet() {
    for kind in RecordKind::ALL {
        assert_eq!(validate_sheet(kind, vec![]).unwrap_err(), SheetError::EmptySheet);
    }
}

#[test]
fn zero_length_rows_are_skipped_but_blank_rows_count() {
    let kind = RecordKind::Archival;
    let width = schema_for(kind).column_count();
    let sheet = vec![
        header_row(kind),
        filled_row(kind, 1),
        vec![],
        vec![String::new(); width],
    ];

    let result = validate_archival(sheet).unwrap();
    assert_eq!(result.records.len(), 2);
    assert_eq!(result.errors, schema_for(kind).required_fields.to_vec());
}

#[test]
fn ragged_row_is_rejected_with_its_sheet_row() {
    let kind = RecordKind::Archival;
    let mut sheet = sheet_with_rows(kind, 3);
    sheet.insert(2, vec![]);
    sheet[4].pop();

    let err = validate_archival(sheet).unwrap_err();
    assert_eq!(
        err,
        SheetError::RowWidth {
            row: 5,
            expected: 16,
            found: 15
        }
    );
}

#[test]
fn ragged_row_counts_from_where_the_sheet_starts() {
    let kind = RecordKind::Archival;
    let mut sheet = sheet_with_rows(kind, 2);
    sheet[2].pop();

    let err = validate_contents(kind, SheetContents::new(sheet, 3)).unwrap_err();
    assert_eq!(
        err,
        SheetError::RowWidth {
            row: 5,
            expected: 16,
            found: 15
        }
    );
}

#[test]
fn wide_row_is_rejected() {
    let kind = RecordKind::Museological;
    let mut sheet = sheet_with_rows(kind, 2);
    sheet[2].push("extra".to_string());

    let err = validate_museological(sheet).unwrap_err();
    assert!(matches!(err, SheetError::RowWidth { row: 3, expected: 22, found: 23 }));
}

#[test]
fn museological_situacao_blank() {
    let kind = RecordKind::Museological;
    let header = header_row(kind);
    assert_eq!(header[0], "Nº de Registro");
    assert_eq!(header[2], "Situação");
    assert_eq!(header[3], "Denominação");

    let mut row = filled_row(kind, 1);
    row[column(kind, "situacao")] = String::new();

    let result = validate_museological(vec![header, row]).unwrap();
    assert!(result.errors.iter().any(|slug| slug == "situacao"));
    assert_eq!(result.records[0].get("situacao"), Some(""));
    assert_eq!(result.records[0].get("nderegistro"), Some("nderegistro-1"));
}

#[test]
fn records_keep_row_order() {
    let kind = RecordKind::Archival;
    let result = validate_archival(sheet_with_rows(kind, 4)).unwrap();
    let codes: Vec<_> = result
        .records
        .iter()
        .map(|r| r.get("coddereferencia").unwrap_or_default())
        .collect();
    assert_eq!(
        codes,
        vec![
            "coddereferencia-0",
            "coddereferencia-1",
            "coddereferencia-2",
            "coddereferencia-3"
        ]
    );
}
