//! Draft store errors

/// Error type for draft store operations.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("draft store lock poisoned")]
    Poisoned,
}
