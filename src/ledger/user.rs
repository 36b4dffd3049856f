use serde::{Deserialize, Serialize};

/// Handle identifying the owner of a ledger.
///
/// The account/identity service manages credentials and balances; the ledger
/// core only needs a stable id and a display name, carried explicitly through
/// every store operation rather than read from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

impl UserRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Filesystem-safe slug derived from the display name.
    pub fn slug(&self) -> String {
        let sanitized: String = self
            .name
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'a'..='z' | '0'..='9' => c,
                _ => '_',
            })
            .collect();
        if sanitized.trim_matches('_').is_empty() {
            "user".into()
        } else {
            sanitized
        }
    }
}
