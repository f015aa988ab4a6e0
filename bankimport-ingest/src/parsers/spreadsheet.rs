//! Spreadsheet (xlsx) export.
//!
//! Single sheet named `גיליון1`. Rows 1-5 hold account details, row 6 the
//! column header (A6 is the date label), transactions start at row 7:
//!   A date | B description | C reference | D value date | E debit | F credit | G balance | H.. notes

use bankimport_core::Field;
use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use chrono::{Days, NaiveDate};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::detect::DATE_HEADER;
use crate::error::ImportError;
use crate::types::{RawRow, TransactionRow};
use crate::values::{parse_amount, parse_date, DateOrder};

/// Name of the first worksheet ("Sheet1" in a Hebrew-locale Excel)
pub const SHEET_NAME: &str = "גיליון1";

/// Rows before the first transaction; the last of them is the header.
pub const HEADER_ROWS: u32 = 6;

/// Columns A..G; anything to the right is memo text.
const FIXED_COLUMNS: u32 = 7;

static EMPTY: Data = Data::Empty;

fn first_sheet(path: &Path) -> Result<(String, Range<Data>), ImportError> {
    let spreadsheet_err = |source: XlsxError| ImportError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook: Xlsx<BufReader<File>> = open_workbook(path).map_err(spreadsheet_err)?;
    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ImportError::violation(path, 0, "workbook has no sheets"))?;
    let range = workbook.worksheet_range(&name).map_err(spreadsheet_err)?;
    Ok((name, range))
}

pub fn recognize(path: &Path) -> Result<bool, ImportError> {
    let (name, range) = first_sheet(path)?;
    if name != SHEET_NAME {
        return Ok(false);
    }

    Ok(matches!(
        range.get_value((HEADER_ROWS - 1, 0)),
        Some(Data::String(s)) if s.trim() == DATE_HEADER
    ))
}

pub fn extract(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    let (_, range) = first_sheet(path)?;
    let Some((last_row, last_col)) = range.end() else {
        return Ok(Vec::new());
    };

    let cell = |r: u32, c: u32| range.get_value((r, c)).unwrap_or(&EMPTY);
    let mut rows = Vec::new();

    for r in HEADER_ROWS..=last_row {
        let row = r as usize + 1;
        if (0..=last_col).all(|c| is_blank(cell(r, c))) {
            continue;
        }

        let column = |field: Field| field.column().map_or(&EMPTY, |c| cell(r, c as u32));

        let amount = |field: Field| -> Result<Option<Decimal>, ImportError> {
            let data = column(field);
            cell_amount(data).ok_or_else(|| ImportError::invalid_value(path, row, field, &data.to_string()))
        };

        let date_cell = column(Field::Date);
        let date = cell_date(date_cell)
            .ok_or_else(|| ImportError::invalid_value(path, row, Field::Date, &date_cell.to_string()))?;

        let notes: Vec<String> = (FIXED_COLUMNS..=last_col)
            .map(|c| cell_string(cell(r, c)))
            .filter(|s| !s.is_empty())
            .collect();

        let txn = TransactionRow {
            row,
            date,
            description: cell_string(column(Field::Description)),
            payment: amount(Field::Payment)?,
            deposit: amount(Field::Deposit)?,
            balance: amount(Field::Balance)?,
            memo: (!notes.is_empty()).then(|| notes.join(" ")),
        };

        txn.signed_amount()
            .map_err(|conflict| ImportError::amount_conflict(path, row, conflict))?;

        rows.push(RawRow::Transaction(txn));
    }

    info!(rows = rows.len(), path = %path.display(), "extracted spreadsheet rows");
    Ok(rows)
}

fn is_blank(data: &Data) -> bool {
    match data {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn cell_string(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}

/// `None` means the cell holds something that is not an amount.
fn cell_amount(data: &Data) -> Option<Option<Decimal>> {
    match data {
        Data::Empty => Some(None),
        Data::Float(f) => Decimal::from_f64(*f).map(Some),
        Data::Int(i) => Some(Some(Decimal::from(*i))),
        Data::String(s) => parse_amount(s).ok(),
        _ => None,
    }
}

/// Dates are month-first here, unlike the HTML exports.
fn cell_date(data: &Data) -> Option<NaiveDate> {
    match data {
        Data::DateTime(dt) => dt.as_datetime().map(|t| t.date()),
        Data::DateTimeIso(s) | Data::String(s) => parse_date(s, DateOrder::MonthFirst),
        Data::Float(f) => serial_date(*f),
        Data::Int(i) => serial_date(*i as f64),
        _ => None,
    }
}

/// Excel serial day number (1900 date system) to a calendar date.
fn serial_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.trunc() as u64))
}
