//! Fold raw rows into statement transactions.

use bankimport_core::{Classifier, Transaction};
use std::path::Path;

use crate::error::ImportError;
use crate::types::RawRow;

/// Single pass; a continuation row only ever touches the last transaction.
///
/// Several continuation rows in a row are joined with a space.
pub fn normalize(
    rows: Vec<RawRow>,
    classifier: &Classifier,
    path: &Path,
) -> Result<Vec<Transaction>, ImportError> {
    let mut out: Vec<Transaction> = Vec::with_capacity(rows.len());

    for raw in rows {
        let row = raw.row();
        match raw {
            RawRow::Continuation { comment, .. } => {
                let last = out.last_mut().ok_or_else(|| {
                    ImportError::violation(path, row, "continuation row without a preceding transaction")
                })?;
                if comment.is_empty() {
                    continue;
                }
                last.memo = Some(match last.memo.take() {
                    Some(memo) => format!("{memo} {comment}"),
                    None => comment,
                });
            }
            RawRow::Transaction(txn) => {
                let amount = txn
                    .signed_amount()
                    .map_err(|conflict| ImportError::amount_conflict(path, row, conflict))?;
                let kind = classifier.classify(&txn.description, amount);
                out.push(Transaction {
                    date: txn.date,
                    amount,
                    description: txn.description,
                    memo: txn.memo,
                    balance: txn.balance,
                    kind,
                });
            }
        }
    }

    Ok(out)
}
