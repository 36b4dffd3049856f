//! Per-user JSON persistence for ledgers and recurring schedules.

pub mod ledger_store;
pub mod schedule_store;

use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::LedgerError;

pub use ledger_store::LedgerStore;
pub use schedule_store::ScheduleStore;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Writes `data` to `path` atomically by staging to a temporary file.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Serializes the full collection and replaces the file contents.
pub(crate) fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    write_atomic(path, &json)
}

/// Loads a collection file, bootstrapping an empty one when missing.
///
/// A file that exists but does not parse is treated as corrupt: a warning is
/// logged and an empty collection is returned, leaving the file on disk
/// untouched so it can be recovered manually.
pub(crate) fn load_collection<T: DeserializeOwned + Serialize>(
    path: &Path,
    label: &str,
) -> Result<Vec<T>> {
    if !path.exists() {
        save_collection::<T>(path, &[])?;
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    match serde_json::from_str(&data) {
        Ok(items) => Ok(items),
        Err(error) => {
            tracing::warn!(
                file = %path.display(),
                %error,
                "{} file is corrupted, continuing with an empty collection",
                label
            );
            Ok(Vec::new())
        }
    }
}
