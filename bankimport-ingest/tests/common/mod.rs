//! Fixture writers shared by the integration tests.
#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const NBSP: &str = "\u{a0}";

/// Write `html` encoded as ISO-8859-8, the way the bank serves it.
pub fn write_hebrew_html(dir: &Path, name: &str, html: &str) -> PathBuf {
    let (bytes, _, had_errors) = encoding_rs::ISO_8859_8.encode(html);
    assert!(!had_errors, "fixture has characters outside ISO-8859-8");
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// A legacy transaction row: date, description, debit, credit, balance.
pub fn legacy_txn(date: &str, desc: &str, debit: &str, credit: &str, balance: &str) -> String {
    format!(
        r#"<tr id="TR_ROW_BANKTABLE">
  <td headers="header1">{date}</td>
  <td headers="header2">{desc}</td>
  <td headers="header3">99-001</td>
  <td headers="header4">{date}</td>
  <td headers="header5">{debit}</td>
  <td headers="header6">{credit}</td>
  <td headers="header7">{balance}</td>
</tr>"#
    )
}

pub fn legacy_comment(text: &str) -> String {
    format!(r#"<tr id="TR_ROW_BANKTABLE"><td>&nbsp;</td><td colspan="5">{text}</td></tr>"#)
}

pub fn legacy_page(rows: &[String]) -> String {
    format!(
        r#"<html>
<head><meta http-equiv="Content-Type" content="text/html; charset=iso-8859-8"></head>
<body>
<table id="mytable_body">
<tr>
  <th id="header1">תאריך</th><th id="header2">תיאור</th><th id="header3">אסמכתא</th>
  <th id="header4">תאריך ערך</th><th id="header5">חובה</th><th id="header6">זכות</th>
  <th id="header7">יתרה</th>
</tr>
{}
</table>
</body>
</html>"#,
        rows.join("\n")
    )
}

pub fn new_row(cells: &[&str]) -> String {
    let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
    format!("<tr>{tds}</tr>")
}

pub fn new_page(table_attr: &str, rows: &[String]) -> String {
    format!(
        r#"<html><body>
<table {table_attr}>
{}
{}
</table>
</body></html>"#,
        new_row(&["תאריך", "תיאור", "אסמכתא", "תאריך ערך", "חובה", "זכות", "יתרה"]),
        rows.join("\n")
    )
}

/// Spreadsheet cell for the xlsx writer
#[derive(Debug, Clone)]
pub enum Cell {
    Text(&'static str),
    Num(f64),
    Empty,
}

fn column_letter(c: usize) -> char {
    (b'A' + c as u8) as char
}

fn sheet_xml(rows: &[Vec<Cell>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    for (r, row) in rows.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_letter(c), r + 1);
            match cell {
                Cell::Text(s) => xml.push_str(&format!(
                    r#"<c r="{reference}" t="inlineStr"><is><t>{s}</t></is></c>"#
                )),
                Cell::Num(n) => xml.push_str(&format!(r#"<c r="{reference}"><v>{n}</v></c>"#)),
                Cell::Empty => {}
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Minimal xlsx package with one worksheet.
pub fn write_xlsx(dir: &Path, name: &str, sheet_name: &str, rows: &[Vec<Cell>]) -> PathBuf {
    let path = dir.join(name);
    let mut zip = ZipWriter::new(File::create(&path).unwrap());

    let parts = [
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#
                .to_string(),
        ),
        (
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#
                .to_string(),
        ),
        (
            "xl/workbook.xml",
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="{sheet_name}" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#
                .to_string(),
        ),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows)),
    ];

    for (name, body) in parts {
        let opts = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        zip.start_file(name, opts).unwrap();
        zip.write_all(body.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    path
}

/// Five account-detail rows followed by the column header in row 6.
pub fn spreadsheet_header() -> Vec<Vec<Cell>> {
    let mut rows = vec![
        vec![Cell::Text("בנק הפועלים")],
        vec![Cell::Text("חשבון 12-345-678901")],
        vec![Cell::Empty],
        vec![Cell::Text("תנועות בחשבון")],
        vec![Cell::Empty],
    ];
    rows.push(vec![
        Cell::Text("תאריך"),
        Cell::Text("תיאור"),
        Cell::Text("אסמכתא"),
        Cell::Text("תאריך ערך"),
        Cell::Text("חובה"),
        Cell::Text("זכות"),
        Cell::Text("יתרה"),
        Cell::Text("הערות"),
    ]);
    rows
}
