//! Entry points a host calls: one importer per institution.

use bankimport_core::{Classifier, Statement, DEFAULT_CURRENCY};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::detect::detect_format;
use crate::error::ImportError;
use crate::normalize::normalize;

/// Detect, extract and normalize one export file.
#[derive(Debug, Clone)]
pub struct StatementImporter {
    classifier: Classifier,
    currency: String,
}

impl StatementImporter {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// All-or-nothing: any extraction error discards the whole file.
    pub fn import(&self, path: &Path) -> Result<Statement, ImportError> {
        let format = detect_format(path).ok_or_else(|| ImportError::unsupported(path))?;
        let rows = format.extract(path)?;
        let transactions = normalize(rows, &self.classifier, path)?;

        info!(
            format = format.name(),
            transactions = transactions.len(),
            path = %path.display(),
            "imported statement"
        );

        Ok(Statement::new(self.currency.clone(), transactions))
    }
}

impl Default for StatementImporter {
    fn default() -> Self {
        Self::new(Classifier::default())
    }
}

/// Institutions with an import plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Institution {
    /// Checking-account exports (HTML and xlsx)
    Hapoalim,
    /// Credit-card exports
    Isracard,
}

impl Institution {
    pub fn import(&self, path: &Path, importer: &StatementImporter) -> Result<Statement, ImportError> {
        match self {
            Institution::Hapoalim => importer.import(path),
            Institution::Isracard => Err(ImportError::NotImplemented("Isracard statement import")),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Institution::Hapoalim => "hapoalim",
            Institution::Isracard => "isracard",
        }
    }
}

impl fmt::Display for Institution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Institution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hapoalim" => Ok(Institution::Hapoalim),
            "isracard" => Ok(Institution::Isracard),
            other => Err(format!("unknown institution: {other}")),
        }
    }
}
