//! Format sniffing: the first candidate whose marker is present wins.

use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ImportError;
use crate::parsers::{legacy_html, new_html, spreadsheet};
use crate::types::RawRow;

/// Header label every export puts over its date column ("date").
pub const DATE_HEADER: &str = "תאריך";

/// Known export layouts, in detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementFormat {
    LegacyHtml,
    NewHtml,
    Spreadsheet,
}

impl StatementFormat {
    pub const ALL: [StatementFormat; 3] = [
        StatementFormat::LegacyHtml,
        StatementFormat::NewHtml,
        StatementFormat::Spreadsheet,
    ];

    /// Position in the detection order
    pub fn index(&self) -> usize {
        match self {
            StatementFormat::LegacyHtml => 0,
            StatementFormat::NewHtml => 1,
            StatementFormat::Spreadsheet => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatementFormat::LegacyHtml => "legacy-html",
            StatementFormat::NewHtml => "new-html",
            StatementFormat::Spreadsheet => "spreadsheet",
        }
    }

    /// Check one candidate. Every failure is a non-match.
    pub fn matches(&self, path: &Path) -> bool {
        let recognized = match self {
            StatementFormat::LegacyHtml => legacy_html::recognize(path),
            StatementFormat::NewHtml => new_html::recognize(path),
            StatementFormat::Spreadsheet => spreadsheet::recognize(path),
        };

        match recognized {
            Ok(matched) => matched,
            Err(e) => {
                debug!(format = self.name(), path = %path.display(), error = %e, "candidate rejected");
                false
            }
        }
    }

    /// Run this layout's row extractor over the whole file.
    pub fn extract(&self, path: &Path) -> Result<Vec<RawRow>, ImportError> {
        match self {
            StatementFormat::LegacyHtml => legacy_html::extract(path),
            StatementFormat::NewHtml => new_html::extract(path),
            StatementFormat::Spreadsheet => spreadsheet::extract(path),
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify `path` into one of the known layouts, or `None`.
pub fn detect_format(path: &Path) -> Option<StatementFormat> {
    let found = StatementFormat::ALL.into_iter().find(|f| f.matches(path));
    match found {
        Some(format) => info!(
            format = format.name(),
            version = format.index(),
            path = %path.display(),
            "detected statement format"
        ),
        None => debug!(path = %path.display(), "no statement format matched"),
    }
    found
}
