use std::{
    fs,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::{
    config,
    errors::LedgerError,
    ledger::{Transaction, TransactionPatch, UserRef},
};

use super::{load_collection, save_collection, Result};

/// Filesystem-backed store for per-user transaction ledgers.
///
/// Each user owns one JSON array file; every mutating operation is a full
/// load-modify-save cycle, so callers compose freely without a partial-write
/// API. Concurrent writers for the same user are not supported.
#[derive(Clone)]
pub struct LedgerStore {
    dir: PathBuf,
}

impl LedgerStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(config::transactions_dir_in(&config::app_data_dir()))
    }

    /// Canonical file path for a user's ledger.
    pub fn file_path(&self, user: &UserRef) -> PathBuf {
        self.dir
            .join(format!("transactions_{}_{}.json", user.slug(), user.id))
    }

    /// Loads the user's ledger, bootstrapping an empty file when missing.
    /// Corrupt files degrade to an empty in-memory ledger without being
    /// overwritten.
    pub fn load(&self, user: &UserRef) -> Result<Vec<Transaction>> {
        load_collection(&self.file_path(user), "transaction ledger")
    }

    /// Replaces the user's ledger file with the given collection.
    pub fn save(&self, user: &UserRef, transactions: &[Transaction]) -> Result<()> {
        save_collection(&self.file_path(user), transactions)?;
        tracing::debug!(
            user = %user.id,
            count = transactions.len(),
            "saved transaction ledger"
        );
        Ok(())
    }

    /// Appends one transaction to the user's ledger.
    pub fn append(&self, user: &UserRef, transaction: Transaction) -> Result<()> {
        let mut transactions = self.load(user)?;
        transactions.push(transaction);
        self.save(user, &transactions)
    }

    /// Removes the transaction with the given id. Returns `false` without
    /// touching the file when no such transaction exists.
    pub fn delete(&self, user: &UserRef, id: Uuid) -> Result<bool> {
        let mut transactions = self.load(user)?;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        if transactions.len() == before {
            return Ok(false);
        }
        self.save(user, &transactions)?;
        Ok(true)
    }

    /// Applies a patch to the transaction with the given id and persists the
    /// result, returning the updated record.
    pub fn update(&self, user: &UserRef, id: Uuid, patch: TransactionPatch) -> Result<Transaction> {
        let mut transactions = self.load(user)?;
        let target = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        target.apply_patch(patch)?;
        let updated = target.clone();
        self.save(user, &transactions)?;
        Ok(updated)
    }

    pub fn base_dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (LedgerStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = LedgerStore::new(temp.path().to_path_buf()).expect("ledger store");
        (store, temp)
    }

    fn user() -> UserRef {
        UserRef::new("user-1234", "John Doe")
    }

    fn sample_transaction(amount: f64) -> Transaction {
        Transaction::new(
            TransactionKind::Expense,
            "user-1234",
            amount,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Category::Food,
        )
        .unwrap()
    }

    #[test]
    fn load_bootstraps_empty_file() {
        let (store, _guard) = store_with_temp_dir();
        let user = user();
        let transactions = store.load(&user).expect("load");
        assert!(transactions.is_empty());
        let path = store.file_path(&user);
        assert!(path.exists());
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }

    #[test]
    fn append_then_load_round_trips() {
        let (store, _guard) = store_with_temp_dir();
        let user = user();
        let txn = sample_transaction(42.5).with_description("groceries");
        store.append(&user, txn.clone()).expect("append");
        let loaded = store.load(&user).expect("load");
        assert_eq!(loaded, vec![txn]);
    }

    #[test]
    fn delete_missing_id_is_a_noop() {
        let (store, _guard) = store_with_temp_dir();
        let user = user();
        let txn = sample_transaction(10.0);
        store.append(&user, txn.clone()).expect("append");
        let removed = store.delete(&user, Uuid::new_v4()).expect("delete");
        assert!(!removed);
        assert_eq!(store.load(&user).expect("load"), vec![txn]);
    }

    #[test]
    fn delete_existing_id_removes_only_that_row() {
        let (store, _guard) = store_with_temp_dir();
        let user = user();
        let keep = sample_transaction(10.0);
        let remove = sample_transaction(20.0);
        store.append(&user, keep.clone()).expect("append");
        store.append(&user, remove.clone()).expect("append");
        assert!(store.delete(&user, remove.id).expect("delete"));
        assert_eq!(store.load(&user).expect("load"), vec![keep]);
    }

    #[test]
    fn update_patches_and_persists() {
        let (store, _guard) = store_with_temp_dir();
        let user = user();
        let txn = sample_transaction(10.0);
        store.append(&user, txn.clone()).expect("append");

        let updated = store
            .update(
                &user,
                txn.id,
                TransactionPatch {
                    amount: Some(99.0),
                    ..TransactionPatch::default()
                },
            )
            .expect("update");
        assert_eq!(updated.amount, 99.0);
        assert_eq!(store.load(&user).expect("load")[0].amount, 99.0);
    }

    #[test]
    fn update_unknown_id_fails_without_mutation() {
        let (store, _guard) = store_with_temp_dir();
        let user = user();
        let txn = sample_transaction(10.0);
        store.append(&user, txn.clone()).expect("append");

        let missing = Uuid::new_v4();
        let result = store.update(&user, missing, TransactionPatch::default());
        assert!(matches!(
            result,
            Err(LedgerError::TransactionNotFound(id)) if id == missing
        ));
        assert_eq!(store.load(&user).expect("load"), vec![txn]);
    }

    #[test]
    fn corrupt_file_degrades_to_empty_without_overwrite() {
        let (store, _guard) = store_with_temp_dir();
        let user = user();
        let path = store.file_path(&user);
        fs::write(&path, "{not json").expect("write corrupt file");

        let loaded = store.load(&user).expect("load");
        assert!(loaded.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }

    #[test]
    fn users_do_not_share_files() {
        let (store, _guard) = store_with_temp_dir();
        let alice = UserRef::new("a-1", "Alice");
        let bob = UserRef::new("b-2", "Bob");
        store
            .append(&alice, sample_transaction(5.0))
            .expect("append");
        assert!(store.load(&bob).expect("load").is_empty());
        assert_eq!(store.load(&alice).expect("load").len(), 1);
    }
}
