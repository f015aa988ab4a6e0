//! Row extractors, one module per export layout.
//!
//! Each module exposes `recognize(path)` for the detector and `extract(path)`
//! which yields raw rows in file order.

pub mod legacy_html;
pub mod new_html;
pub mod spreadsheet;

use bankimport_core::Field;
use scraper::ElementRef;
use std::path::Path;

use crate::error::ImportError;
use crate::types::{RawRow, TransactionRow};
use crate::values::{parse_amount, parse_date, DateOrder};

/// Concatenated text of an element, as the bank rendered it.
pub(crate) fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Build a transaction row from text cells looked up by field.
///
/// Shared by both HTML layouts: dates are day-first, blank amounts are NBSP.
pub(crate) fn text_row<F>(path: &Path, row: usize, cell: F) -> Result<RawRow, ImportError>
where
    F: Fn(Field) -> Option<String>,
{
    let required = |field: Field| cell(field).ok_or_else(|| ImportError::missing_cell(path, row, field));

    let amount = |field: Field| -> Result<_, ImportError> {
        let text = required(field)?;
        parse_amount(&text).map_err(|_| ImportError::invalid_value(path, row, field, &text))
    };

    let date_text = required(Field::Date)?;
    let date = parse_date(&date_text, DateOrder::DayFirst)
        .ok_or_else(|| ImportError::invalid_value(path, row, Field::Date, &date_text))?;

    let txn = TransactionRow {
        row,
        date,
        description: required(Field::Description)?.trim().to_string(),
        payment: amount(Field::Payment)?,
        deposit: amount(Field::Deposit)?,
        balance: amount(Field::Balance)?,
        memo: None,
    };

    txn.signed_amount()
        .map_err(|conflict| ImportError::amount_conflict(path, row, conflict))?;

    Ok(RawRow::Transaction(txn))
}
