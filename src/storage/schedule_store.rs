use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config,
    errors::LedgerError,
    ledger::{RecurringTransaction, UserRef},
};

use super::{load_collection, save_collection, Result};

/// Filesystem-backed store for per-user recurring transaction schedules.
///
/// Lives in its own namespace next to the transaction ledger. Entries carry
/// no id of their own, so removal is by position within the persisted list.
#[derive(Clone)]
pub struct ScheduleStore {
    dir: PathBuf,
}

impl ScheduleStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(config::recurring_dir_in(&config::app_data_dir()))
    }

    /// Canonical file path for a user's recurring schedule.
    pub fn file_path(&self, user: &UserRef) -> PathBuf {
        self.dir
            .join(format!("recurring_{}_{}.json", user.slug(), user.id))
    }

    /// Loads the user's schedule, bootstrapping an empty file when missing.
    /// Corrupt files degrade to an empty in-memory schedule without being
    /// overwritten.
    pub fn load(&self, user: &UserRef) -> Result<Vec<RecurringTransaction>> {
        load_collection(&self.file_path(user), "recurring schedule")
    }

    /// Replaces the user's schedule file with the given collection.
    pub fn save(&self, user: &UserRef, entries: &[RecurringTransaction]) -> Result<()> {
        save_collection(&self.file_path(user), entries)?;
        tracing::debug!(
            user = %user.id,
            count = entries.len(),
            "saved recurring schedule"
        );
        Ok(())
    }

    /// Appends one schedule entry.
    pub fn append(&self, user: &UserRef, entry: RecurringTransaction) -> Result<()> {
        let mut entries = self.load(user)?;
        entries.push(entry);
        self.save(user, &entries)
    }

    /// Removes and returns the entry at `index` (position within the list as
    /// last loaded). Fails without mutation when the index is out of range.
    pub fn remove(&self, user: &UserRef, index: usize) -> Result<RecurringTransaction> {
        let mut entries = self.load(user)?;
        if index >= entries.len() {
            return Err(LedgerError::EntryNotFound(index));
        }
        let removed = entries.remove(index);
        self.save(user, &entries)?;
        Ok(removed)
    }

    pub fn base_dir(&self) -> &Path {
        &self.dir
    }
}
