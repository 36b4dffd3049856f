//! Ledger domain models, persistence-friendly types, and helpers.

pub mod recurring;
pub mod transaction;
pub mod user;

pub use recurring::{Frequency, RecurringTransaction};
pub use transaction::{Category, PaymentMethod, Transaction, TransactionKind, TransactionPatch};
pub use user::UserRef;
