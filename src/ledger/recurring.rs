use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::transaction::Transaction;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Monthly,
    Weekly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Weekly => "weekly",
        }
    }

    /// Next occurrence after `from`. Weekly adds exactly seven days; monthly
    /// keeps the day-of-month, rolling December into January of the next year
    /// and clamping to the last valid day of the target month (31st into a
    /// 30-day month lands on the 30th).
    pub fn next_date(&self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Weekly => from + Duration::weeks(1),
            Frequency::Monthly => shift_month(from, 1),
        }
    }
}

impl FromStr for Frequency {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Frequency::Monthly),
            "weekly" => Ok(Frequency::Weekly),
            other => Err(LedgerError::Validation(format!(
                "unknown frequency `{}`",
                other
            ))),
        }
    }
}

/// A transaction blueprint that fires every period on or after `next_date`.
///
/// `next_date` only ever moves forward; the engine advances it by one period
/// each time the entry is materialized into the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringTransaction {
    pub template: Transaction,
    pub frequency: Frequency,
    pub next_date: NaiveDate,
}

impl RecurringTransaction {
    pub fn new(template: Transaction, frequency: Frequency, next_date: NaiveDate) -> Self {
        Self {
            template,
            frequency,
            next_date,
        }
    }

    /// Whether this entry is eligible to fire on `today`.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_date <= today
    }

    /// Moves `next_date` forward by one period.
    pub fn advance(&mut self) {
        self.next_date = self.frequency.next_date(self.next_date);
    }

    /// Builds the concrete transaction for the current occurrence: a copy of
    /// the template with a fresh id, dated on `next_date` (the intended
    /// occurrence date), and stamped with the owning user's id.
    pub fn materialize(&self, user: &super::UserRef) -> Transaction {
        let mut txn = self.template.clone();
        txn.id = uuid::Uuid::new_v4();
        txn.date = self.next_date;
        txn.user_id = user.id.clone();
        txn
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
