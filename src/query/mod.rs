//! Pure filter and sort operations over in-memory transaction collections.
//!
//! Nothing here touches storage; every function takes a slice and returns a
//! fresh `Vec`, so filters compose and any result can be re-sorted.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::{
    errors::LedgerError,
    ledger::{Category, Transaction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Amount,
    Category,
}

/// Transactions whose category equals `category`.
pub fn filter_by_category(transactions: &[Transaction], category: Category) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.category == category)
        .cloned()
        .collect()
}

/// Transactions with `min <= amount <= max`. Bounds must be non-negative and
/// ordered.
pub fn filter_by_amount_range(
    transactions: &[Transaction],
    min: f64,
    max: f64,
) -> Result<Vec<Transaction>, LedgerError> {
    if min < 0.0 || max < 0.0 {
        return Err(LedgerError::InvalidRange(format!(
            "amounts must be non-negative, got {}..{}",
            min, max
        )));
    }
    if min > max {
        return Err(LedgerError::InvalidRange(format!(
            "minimum {} is greater than maximum {}",
            min, max
        )));
    }
    Ok(transactions
        .iter()
        .filter(|t| t.amount >= min && t.amount <= max)
        .cloned()
        .collect())
}

/// Transactions dated within `start..=end`.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Transaction>, LedgerError> {
    if start > end {
        return Err(LedgerError::InvalidRange(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    Ok(transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .cloned()
        .collect())
}

/// Returns a new collection ordered by `field`. The sort is stable: equal
/// keys keep their input order in both directions, because descending order
/// reverses the key comparison rather than the result.
pub fn sort_by(transactions: &[Transaction], field: SortField, descending: bool) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    sorted
}

fn compare(a: &Transaction, b: &Transaction, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Amount => a.amount.total_cmp(&b.amount),
        SortField::Category => a.category.label().cmp(b.category.label()),
    }
}
