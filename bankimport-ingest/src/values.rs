//! Cell value parsing shared by all extractors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// What the HTML exports put in a blank amount cell.
pub const NBSP: &str = "\u{a0}";

/// Which of the two leading date components is the day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    DayFirst,
    MonthFirst,
}

/// Parse an amount cell. `Ok(None)` means the cell is blank, which is not zero.
///
/// Thousands separators are stripped: "1,234.50" -> 1234.50.
pub fn parse_amount(s: &str) -> Result<Option<Decimal>, rust_decimal::Error> {
    if s == NBSP {
        return Ok(None);
    }
    // Unicode trim: the bank pads some figures with NBSP as well
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(&s.replace(',', "")).map(Some)
}

/// Parse a date cell like "01/02/2020", "1.2.20" or "2020-02-01".
///
/// A time part after the date is ignored. When the preferred order gives an
/// impossible date the components are tried the other way round.
pub fn parse_date(s: &str, order: DateOrder) -> Option<NaiveDate> {
    let token = s.split_whitespace().next()?;

    if let Ok(d) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Some(d);
    }

    let parts: Vec<&str> = token.split(['/', '.', '-']).collect();
    if parts.len() != 3 {
        return None;
    }

    let a: u32 = parts[0].parse().ok()?;
    let b: u32 = parts[1].parse().ok()?;
    let year = parse_year(parts[2])?;

    let (day, month) = match order {
        DateOrder::DayFirst => (a, b),
        DateOrder::MonthFirst => (b, a),
    };

    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, day, month))
}

fn parse_year(s: &str) -> Option<i32> {
    let y: i32 = s.parse().ok()?;
    match s.len() {
        4 => Some(y),
        // Same pivot as strftime's %y
        2 if y < 69 => Some(2000 + y),
        2 => Some(1900 + y),
        _ => None,
    }
}
