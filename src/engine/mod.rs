//! Detects due recurring schedule entries and materializes them into the
//! ledger.

use chrono::NaiveDate;

use crate::{
    errors::LedgerError,
    ledger::{RecurringTransaction, UserRef},
    storage::{LedgerStore, ScheduleStore},
};

/// Applies due recurring transactions against a user's ledger.
///
/// Invoked explicitly by the caller (typically once per session) with a
/// reference date; there is no background polling. Each application advances
/// the fired entry's `next_date` by one period, so a second run with the same
/// reference date applies nothing.
pub struct RecurringEngine<'a> {
    ledger: &'a LedgerStore,
    schedule: &'a ScheduleStore,
}

impl<'a> RecurringEngine<'a> {
    pub fn new(ledger: &'a LedgerStore, schedule: &'a ScheduleStore) -> Self {
        Self { ledger, schedule }
    }

    /// Entries eligible to fire on `today`. Does not mutate anything.
    pub fn find_due(
        entries: &[RecurringTransaction],
        today: NaiveDate,
    ) -> Vec<&RecurringTransaction> {
        entries.iter().filter(|entry| entry.is_due(today)).collect()
    }

    /// Fires every due entry in schedule order and returns how many applied.
    ///
    /// Each due entry materializes one transaction dated on its `next_date`
    /// and, only after a successful append, advances by one period. An entry
    /// whose append fails stays due and is retried on the next evaluation;
    /// the remaining entries are still processed. The updated schedule is
    /// written back once, after the whole pass.
    pub fn apply(&self, user: &UserRef, today: NaiveDate) -> Result<usize, LedgerError> {
        let mut entries = self.schedule.load(user)?;
        let mut applied = 0usize;

        for entry in entries.iter_mut() {
            if !entry.is_due(today) {
                continue;
            }
            let transaction = entry.materialize(user);
            match self.ledger.append(user, transaction) {
                Ok(()) => {
                    entry.advance();
                    applied += 1;
                }
                Err(error) => {
                    tracing::warn!(
                        user = %user.id,
                        due = %entry.next_date,
                        %error,
                        "failed to apply recurring transaction, leaving entry due"
                    );
                }
            }
        }

        if applied > 0 {
            self.schedule.save(user, &entries)?;
            tracing::info!(user = %user.id, applied, "applied recurring transactions");
        }
        Ok(applied)
    }
}
