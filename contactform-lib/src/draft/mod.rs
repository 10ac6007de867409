//! Draft persistence for in-progress form input.

mod memory;
mod sqlite;

pub use memory::MemoryDraftStore;
pub use sqlite::SqliteDraftStore;

use std::sync::Arc;

use crate::error::DraftError;

/// Default namespace prepended to every draft key.
pub const DEFAULT_DRAFT_PREFIX: &str = "contact_";

/// Backend trait for draft storage.
///
/// Reads and writes are synchronous and unguarded: the last writer wins for
/// each key.
pub trait DraftStore: Send + Sync {
    /// Get the stored value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, DraftError>;

    /// Store a value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), DraftError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), DraftError>;
}

/// Drafts of one form.
///
/// Wraps a `DraftStore` and namespaces each field under a key prefix.
/// Entries only exist for non-empty values.
#[derive(Clone)]
pub struct Drafts {
    store: Arc<dyn DraftStore>,
    prefix: String,
}

impl Drafts {
    /// Create drafts over `store` using `prefix` for keys.
    pub fn new(store: Arc<dyn DraftStore>, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// Storage key for a field.
    pub fn key(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field)
    }

    /// Load the draft for a field.
    pub fn load(&self, field: &str) -> Result<Option<String>, DraftError> {
        Ok(self
            .store
            .get(&self.key(field))?
            .filter(|value| !value.is_empty()))
    }

    /// Save the draft for a field. An empty value removes the entry.
    pub fn save(&self, field: &str, value: &str) -> Result<(), DraftError> {
        let key = self.key(field);
        if value.is_empty() {
            self.store.remove(&key)
        } else {
            self.store.set(&key, value)
        }
    }

    /// Remove the draft for a field.
    pub fn discard(&self, field: &str) -> Result<(), DraftError> {
        self.store.remove(&self.key(field))
    }
}

impl std::fmt::Debug for Drafts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drafts").field("prefix", &self.prefix).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafts() -> (Arc<MemoryDraftStore>, Drafts) {
        let store = Arc::new(MemoryDraftStore::new());
        let drafts = Drafts::new(store.clone(), DEFAULT_DRAFT_PREFIX);
        (store, drafts)
    }

    #[test]
    fn test_keys_are_namespaced() {
        let (store, drafts) = drafts();
        assert_eq!(drafts.key("email"), "contact_email");

        drafts.save("email", "a@b.com").unwrap();
        assert_eq!(store.get("contact_email").unwrap().as_deref(), Some("a@b.com"));
        assert_eq!(drafts.load("email").unwrap().as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_empty_value_removes_entry() {
        let (store, drafts) = drafts();
        drafts.save("name", "Ada").unwrap();
        drafts.save("name", "").unwrap();
        assert!(store.get("contact_name").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_discard() {
        let (_store, drafts) = drafts();
        drafts.save("message", "hello").unwrap();
        drafts.discard("message").unwrap();
        drafts.discard("message").unwrap();
        assert!(drafts.load("message").unwrap().is_none());
    }
}
