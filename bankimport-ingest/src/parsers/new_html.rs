//! Newer HTML export: a plain grid, header row first, seven `td`s per
//! transaction. Rows of any other width are page furniture and are skipped.

use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use tracing::{info, trace};

use super::{cell_text, text_row};
use crate::decode::read_hebrew_text;
use crate::detect::DATE_HEADER;
use crate::error::ImportError;
use crate::types::RawRow;

const TABLE: &str = "table#trBlueOnWhite12, table.trBlueOnWhite12";
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

    let first_cell = table
        .select(&selector("tr"))
        .next()
        .and_then(|tr| tr.select(&selector("td")).next());

    Ok(first_cell.is_some_and(|td| cell_text(td).trim() == DATE_HEADER))
}

pub fn extract(path: &Path) -> Result<Vec<RawRow>, ImportError> {
    let text = read_hebrew_text(path)?;
    let doc = Html::parse_document(&text);

    let table = doc
        .select(&selector(TABLE))
        .next()
        .ok_or_else(|| ImportError::violation(path, 0, "table trBlueOnWhite12 not found"))?;

    let mut rows = Vec::new();

    // First row is the column header
    for (i, tr) in child_rows(table).into_iter().enumerate().skip(1) {
        let row = i + 1;
        let cells = child_elements(tr, "td");
        if cells.len() != CELLS_PER_ROW {
            trace!(row, cells = cells.len(), "skipping non-transaction row");
            continue;
        }

        rows.push(text_row(path, row, |field| {
            field.column().and_then(|c| cells.get(c)).map(|c| cell_text(*c))
        })?);
    }

    info!(rows = rows.len(), path = %path.display(), "extracted new html rows");
    Ok(rows)
}

/// Rows directly under the table, looking through the implicit row groups.
fn child_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(child_elements(child, "tr")),
            _ => {}
        }
    }
    rows
}

fn child_elements<'a>(parent: ElementRef<'a>, name: &str) -> Vec<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == name)
        .collect()
}
