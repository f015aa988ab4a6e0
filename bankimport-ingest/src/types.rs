use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// One physical row of an export, before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum RawRow {
    Transaction(TransactionRow),
    /// Comment-only row that belongs to the transaction above it
    Continuation { row: usize, comment: String },
}

impl RawRow {
    /// Row number in the source file, as reported in errors
    pub fn row(&self) -> usize {
        match self {
            RawRow::Transaction(txn) => txn.row,
            RawRow::Continuation { row, .. } => *row,
        }
    }
}

/// A row that carries transaction data
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// 1-based position in the export's row sequence
    pub row: usize,
    pub date: NaiveDate,
    pub description: String,
    /// Debit column; `None` when the cell is blank
    pub payment: Option<Decimal>,
    /// Credit column; `None` when the cell is blank
    pub deposit: Option<Decimal>,
    pub balance: Option<Decimal>,
    pub memo: Option<String>,
}

/// Violation of the one-of-debit-or-credit rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountConflict {
    Both,
    Neither,
}

impl fmt::Display for AmountConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountConflict::Both => f.write_str("both payment and deposit are present"),
            AmountConflict::Neither => f.write_str("neither payment nor deposit is present"),
        }
    }
}

impl TransactionRow {
    /// Credit as-is, debit negated.
    pub fn signed_amount(&self) -> Result<Decimal, AmountConflict> {
        match (self.payment, self.deposit) {
            (None, Some(deposit)) => Ok(deposit),
            (Some(payment), None) => Ok(-payment),
            (Some(_), Some(_)) => Err(AmountConflict::Both),
            (None, None) => Err(AmountConflict::Neither),
        }
    }
}
