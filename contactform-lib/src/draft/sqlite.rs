//! SQLite draft store with in-memory cache.

use std::path::Path;
use std::sync::Mutex;

use dashmap::DashMap;
use rusqlite::{Connection, OptionalExtension};

use super::DraftStore;
use crate::error::DraftError;

/// SQLite-backed draft storage with DashMap cache.
///
/// Survives restarts until entries are explicitly removed.
pub struct SqliteDraftStore {
    conn: Mutex<Connection>,
    cache: DashMap<String, String>,
}

impl SqliteDraftStore {
    /// Open (or create) a draft database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DraftError> {
        Self::init(Connection::open(path)?)
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self, DraftError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, DraftError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS drafts (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            cache: DashMap::new(),
        })
    }

    fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> Result<T, DraftError> {
        let conn = self.conn.lock().map_err(|_| DraftError::Poisoned)?;
        Ok(f(&conn)?)
    }
}

impl DraftStore for SqliteDraftStore {
    fn get(&self, key: &str) -> Result<Option<String>, DraftError> {
        // Check cache first
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let result = self.with_conn(|conn| {
            conn.query_row("SELECT value FROM drafts WHERE key = ?", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
        })?;

        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }

        Ok(result)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DraftError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO drafts (key, value) VALUES (?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, value],
            )
        })?;

        self.cache.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DraftError> {
        self.with_conn(|conn| conn.execute("DELETE FROM drafts WHERE key = ?", [key]))?;

        self.cache.remove(key);

        Ok(())
    }
}
