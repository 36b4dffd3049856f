use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Malformed ledger data: {0}")]
    Format(#[from] serde_json::Error),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Recurring entry not found at position {0}")]
    EntryNotFound(usize),
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
