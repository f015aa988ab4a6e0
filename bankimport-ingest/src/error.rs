use bankimport_core::Field;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::AmountConflict;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unsupported file {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("{}: row {row}: {reason}", path.display())]
    StructuralViolation {
        path: PathBuf,
        row: usize,
        reason: String,
    },

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid ISO-8859-8 text", path.display())]
    Decode { path: PathBuf },

    #[error("Failed to open workbook {}", path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl ImportError {
    pub fn unsupported(path: &Path) -> Self {
        Self::UnsupportedFormat { path: path.to_path_buf() }
    }

    pub fn violation(path: &Path, row: usize, reason: impl Into<String>) -> Self {
        Self::StructuralViolation {
            path: path.to_path_buf(),
            row,
            reason: reason.into(),
        }
    }

    pub fn missing_cell(path: &Path, row: usize, field: Field) -> Self {
        Self::violation(path, row, format!("missing {field} cell"))
    }

    pub fn invalid_value(path: &Path, row: usize, field: Field, value: &str) -> Self {
        Self::violation(path, row, format!("invalid {field} value {value:?}"))
    }

    pub fn amount_conflict(path: &Path, row: usize, conflict: AmountConflict) -> Self {
        Self::violation(path, row, conflict.to_string())
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    /// True for errors caused by file content rather than by reading it
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::StructuralViolation { .. })
    }
}
