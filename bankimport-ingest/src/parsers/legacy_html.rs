//! Legacy HTML export.
//!
//! Transactions live in `table#mytable_body`, one `TR_ROW_BANKTABLE` row each:
//!   <tr id="TR_ROW_BANKTABLE">
//!     <td headers="header1">01/02/2020</td> ... <td headers="header7">500.00</td>
//!   </tr>
//!   <tr id="TR_ROW_BANKTABLE"><td colspan="5">comment for the row above</td></tr>

use bankimport_core::Field;
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use tracing::info;

use super::{cell_text, text_row};
use crate::decode::read_hebrew_text;
use crate::detect::DATE_HEADER;
use crate::error::ImportError;
use crate::types::RawRow;

const TABLE: &str = "table#mytable_body";
const DATE_TH: &str = "th#header1";
const ROW: &str = r#"[id="TR_ROW_BANKTABLE"]"#;
const LABELED_CELL: &str = "[headers]";
const COMMENT_CELL: &str = r#"[colspan="5"]"#;

/// Labeled cells in a transaction row
const CELLS_PER_ROW: usize = 7;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector should parse")
}

pub fn recognize(path: &Path) -> Result<bool, ImportError> {
    let text = read_hebrew_text(path)?;
    let doc = Html::parse_document(&text);

    let Some(table) = doc.select(&selector(TABLE)).next() else {
        return Ok(false);
    };

    Ok(table
        .select(&selector(DATE_TH))
        .next()
        .is_some_and(|th| cell_text(th).trim() == DATE_HEADER))
}

pub fn extract(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    let text = read_hebrew_text(path)?;
    let doc = Html::parse_document(&text);

    let table = doc
        .select(&selector(TABLE))
        .next()
        .ok_or_else(|| ImportError::violation(path, 0, "table mytable_body not found"))?;

    let labeled = selector(LABELED_CELL);
    let comment = selector(COMMENT_CELL);
    let mut rows = Vec::new();

    for (i, tr) in table.select(&selector(ROW)).enumerate() {
        let row = i + 1;
        let cells: Vec<ElementRef<'_>> = tr.select(&labeled).collect();

        match cells.len() {
            0 => {
                let text = tr
                    .select(&comment)
                    .next()
                    .map(cell_text)
                    .ok_or_else(|| ImportError::missing_cell(path, row, Field::Memo))?;
                rows.push(RawRow::Continuation {
                    row,
                    comment: text.trim().to_string(),
                });
            }
            CELLS_PER_ROW => {
                rows.push(text_row(path, row, |field| labeled_cell(&cells, field))?);
            }
            n => {
                return Err(ImportError::violation(
                    path,
                    row,
                    format!("expected 0 or {CELLS_PER_ROW} labeled cells, found {n}"),
                ));
            }
        }
    }

    info!(rows = rows.len(), path = %path.display(), "extracted legacy html rows");
    Ok(rows)
}

fn labeled_cell(cells: &[ElementRef<'_>], field: Field) -> Option<String> {
    let label = field.header_label()?;
    cells
        .iter()
        .find(|c| {
            c.value()
                .attr("headers")
                .is_some_and(|h| h.split_whitespace().any(|t| t == label))
        })
        .map(|c| cell_text(*c))
}
