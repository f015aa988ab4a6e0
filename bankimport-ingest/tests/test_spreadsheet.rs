mod common;

use bankimport_core::TransactionType;
use bankimport_ingest::parsers::spreadsheet::SHEET_NAME;
use bankimport_ingest::{detect_format, ImportError, StatementFormat, StatementImporter};
use chrono::NaiveDate;
use common::{spreadsheet_header, write_hebrew_html, write_xlsx, Cell};
use rust_decimal::Decimal;
use std::fs;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sample_rows() -> Vec<Vec<Cell>> {
    let mut rows = spreadsheet_header();
    rows.push(vec![
        Cell::Text("02/01/2020"),
        Cell::Text("משיכת מזומן"),
        Cell::Text("1001"),
        Cell::Text("02/01/2020"),
        Cell::Num(400.0),
        Cell::Empty,
        Cell::Num(1600.0),
        Cell::Text("סניף"),
        Cell::Empty,
        Cell::Text("דיזנגוף"),
    ]);
    rows.push(vec![Cell::Empty]);
    rows.push(vec![
        Cell::Num(43862.0),
        Cell::Text("החזר מס"),
        Cell::Text("1002"),
        Cell::Empty,
        Cell::Empty,
        Cell::Text("1,250.50"),
        Cell::Text("2,850.50"),
    ]);
    rows
}

#[test]
fn test_detects_and_imports_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xlsx(dir.path(), "export.xlsx", SHEET_NAME, &sample_rows());

    assert_eq!(detect_format(&path), Some(StatementFormat::Spreadsheet));
    assert_eq!(StatementFormat::Spreadsheet.index(), 2);

    let stmt = StatementImporter::default().import(&path).unwrap();
    assert_eq!(stmt.len(), 2);

    let withdrawal = &stmt.transactions[0];
    // Month-first: February 1st
    assert_eq!(withdrawal.date, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
    assert_eq!(withdrawal.amount, dec("-400"));
    assert_eq!(withdrawal.balance, Some(dec("1600")));
    assert_eq!(withdrawal.memo.as_deref(), Some("סניף דיזנגוף"));
    assert_eq!(withdrawal.kind, TransactionType::Atm);

    let refund = &stmt.transactions[1];
    assert_eq!(refund.date, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
    assert_eq!(refund.amount, dec("1250.50"));
    assert_eq!(refund.balance, Some(dec("2850.50")));
    assert_eq!(refund.memo, None);
    assert_eq!(refund.kind, TransactionType::Deposit);
}

#[test]
fn test_other_sheet_name_is_not_detected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_xlsx(dir.path(), "export.xlsx", "Sheet1", &sample_rows());

    assert!(!StatementFormat::Spreadsheet.matches(&path));
    assert_eq!(detect_format(&path), None);
}

#[test]
fn test_header_cell_must_be_a6() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = sample_rows();
    rows.remove(0);
    let path = write_xlsx(dir.path(), "export.xlsx", SHEET_NAME, &rows);

    assert_eq!(detect_format(&path), None);
}

#[test]
fn test_corrupt_container_is_a_non_match() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    fs::write(&path, b"PK\x03\x04 definitely not a workbook").unwrap();

    assert!(!StatementFormat::Spreadsheet.matches(&path));
    assert_eq!(detect_format(&path), None);

    let err = StatementImporter::default().import(&path).unwrap_err();
    assert!(matches!(err, ImportError::UnsupportedFormat { .. }));
}

#[test]
fn test_html_is_not_a_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_hebrew_html(dir.path(), "page.xlsx", "<html><body>תאריך</body></html>");

    assert!(!StatementFormat::Spreadsheet.matches(&path));
}

#[test]
fn test_both_amounts_abort() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = spreadsheet_header();
    rows.push(vec![
        Cell::Text("02/01/2020"),
        Cell::Text("שגוי"),
        Cell::Empty,
        Cell::Empty,
        Cell::Num(1.0),
        Cell::Num(2.0),
        Cell::Num(3.0),
    ]);
    let path = write_xlsx(dir.path(), "export.xlsx", SHEET_NAME, &rows);

    let err = StatementFormat::Spreadsheet.extract(&path).unwrap_err();
    match err {
        ImportError::StructuralViolation { row, .. } => assert_eq!(row, 7),
        other => panic!("expected StructuralViolation, got {other:?}"),
    }
}
