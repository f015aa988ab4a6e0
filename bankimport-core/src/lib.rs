//! bankimport-core: statement model, shared field set, and transaction-type rules

pub mod classify;
pub mod fields;
pub mod statement;

pub use classify::{Classifier, KeywordRules};
pub use fields::Field;
pub use statement::{Statement, Transaction, TransactionType, DEFAULT_CURRENCY};
