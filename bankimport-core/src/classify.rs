//! Transaction-type rules: description prefixes first, amount sign last.
//!
//! The keyword table is data, not code. Hosts load it from their config and
//! fall back to `KeywordRules::default()`.

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::statement::TransactionType;

/// Localized description prefixes per transaction type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeywordRules {
    /// Cash withdrawal from a teller machine
    pub atm: Vec<String>,
    /// Check payment
    pub check: Vec<String>,
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self {
            atm: vec![
                "משיכה מבנקט".to_string(),
                "משיכת מזומן".to_string(),
                "כספומט".to_string(),
            ],
            check: vec![
                "שיק".to_string(),
                "צ'ק".to_string(),
                "המחאה".to_string(),
            ],
        }
    }
}

/// Compiled form of [`KeywordRules`]
#[derive(Debug, Clone)]
pub struct Classifier {
    atm: Option<Regex>,
    check: Option<Regex>,
}

impl Classifier {
    pub fn new(rules: &KeywordRules) -> Result<Self, regex::Error> {
        Ok(Self {
            atm: prefix_pattern(&rules.atm)?,
            check: prefix_pattern(&rules.check)?,
        })
    }

    /// Keyword match wins; otherwise debit → CASH, credit → DEP.
    pub fn classify(&self, description: &str, amount: Decimal) -> TransactionType {
        let desc = description.trim_start();

        if self.atm.as_ref().is_some_and(|re| re.is_match(desc)) {
            return TransactionType::Atm;
        }

        if self.check.as_ref().is_some_and(|re| re.is_match(desc)) {
            return TransactionType::Check;
        }

        TransactionType::from_sign(amount)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        // The default table is all literals, so compiling it cannot fail.
        Self::new(&KeywordRules::default()).unwrap_or(Self {
            atm: None,
            check: None,
        })
    }
}

fn prefix_pattern(keywords: &[String]) -> Result<Option<Regex>, regex::Error> {
    let alternatives: Vec<String> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(regex::escape)
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    Regex::new(&format!("^(?:{})", alternatives.join("|"))).map(Some)
}
