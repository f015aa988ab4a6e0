//! Normalized statement types handed back to the host

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency of every statement produced by the bundled importers.
pub const DEFAULT_CURRENCY: &str = "ILS";

/// Transaction type tag, named after the OFX `TRNTYPE` values it maps to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "DEP")]
    Deposit,
    #[serde(rename = "ATM")]
    Atm,
    #[serde(rename = "CHECK")]
    Check,
}

impl TransactionType {
    /// Sign-based fallback when no keyword rule matched
    pub fn from_sign(amount: Decimal) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            TransactionType::Cash
        } else {
            TransactionType::Deposit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Cash => "CASH",
            TransactionType::Deposit => "DEP",
            TransactionType::Atm => "ATM",
            TransactionType::Check => "CHECK",
        }
    }
}

/// One statement line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Posting date
    pub date: NaiveDate,
    /// Negative = debit, positive = credit
    pub amount: Decimal,
    /// Payee / description as printed by the bank
    pub description: String,
    /// Free text from continuation rows or trailing spreadsheet columns
    pub memo: Option<String>,
    /// Running balance after this line, when the export has one
    pub balance: Option<Decimal>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Returns true if money left the account
    pub fn is_debit(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

/// Ordered transactions of one imported file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub currency: String,
    pub transactions: Vec<Transaction>,
}

impl Statement {
    pub fn new(currency: impl Into<String>, transactions: Vec<Transaction>) -> Self {
        Self {
            currency: currency.into(),
            transactions,
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Earliest transaction date
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().map(|t| t.date).min()
    }

    /// Latest transaction date
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.transactions.iter().map(|t| t.date).max()
    }

    /// Balance of the last line that reports one
    pub fn end_balance(&self) -> Option<Decimal> {
        self.transactions.iter().rev().find_map(|t| t.balance)
    }

    /// Net movement over the statement
    pub fn total(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}
