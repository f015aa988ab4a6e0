//! Field tags shared by every export layout

use serde::{Deserialize, Serialize};
use std::fmt;

/// A column of a bank export, independent of where a given layout puts it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Description,
    Reference,
    ValueDate,
    Payment,
    Deposit,
    Balance,
    Memo,
}

impl Field {
    /// Fields in the column order used by all three exports
    pub const COLUMNS: [Field; 7] = [
        Field::Date,
        Field::Description,
        Field::Reference,
        Field::ValueDate,
        Field::Payment,
        Field::Deposit,
        Field::Balance,
    ];

    /// Zero-based column position, `None` for fields that are not a fixed column
    pub fn column(&self) -> Option<usize> {
        Self::COLUMNS.iter().position(|f| f == self)
    }

    /// `headers="headerN"` label of the cell in the legacy HTML export
    pub fn header_label(&self) -> Option<String> {
        self.column().map(|c| format!("header{}", c + 1))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Description => "description",
            Field::Reference => "reference",
            Field::ValueDate => "value date",
            Field::Payment => "payment",
            Field::Deposit => "deposit",
            Field::Balance => "balance",
            Field::Memo => "memo",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
