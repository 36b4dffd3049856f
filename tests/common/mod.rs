use std::sync::Mutex;

use finance_core::{
    ledger::UserRef,
    storage::{LedgerStore, ScheduleStore},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates isolated stores backed by unique directories for each test.
pub fn setup_test_env() -> (LedgerStore, ScheduleStore) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let ledger = LedgerStore::new(base.join("transactions")).expect("create ledger store");
    let schedule = ScheduleStore::new(base.join("recurring")).expect("create schedule store");
    (ledger, schedule)
}

pub fn test_user() -> UserRef {
    UserRef::new("user-1234", "John Doe")
}
