//! SQLite-backed persistence.
//!
//! The collection is stored as one JSON value in the `kv_store` table under
//! [`CREDENTIALS_KEY`], replaced inside a transaction on every save.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, OptionalExtension};

use super::database::Database;
use super::{decode_collection, encode_collection, CredentialPersistence};
use crate::types::credential::Credential;
use crate::types::errors::PersistenceError;

/// Key under which the credential collection is stored.
pub const CREDENTIALS_KEY: &str = "credentials";

/// Persistence backed by a SQLite key-value table.
pub struct SqlitePersistence {
    db: Mutex<Database>,
}

impl SqlitePersistence {
    /// Opens (or creates) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PersistenceError::Io(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }
        Ok(Self::from_database(Database::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        Ok(Self::from_database(Database::open_in_memory()?))
    }

    pub fn from_database(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }

    fn db(&self) -> MutexGuard<'_, Database> {
        self.db.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialPersistence for SqlitePersistence {
    fn load(&self) -> Result<Vec<Credential>, PersistenceError> {
        let db = self.db();
        let raw: Option<String> = db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![CREDENTIALS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        Ok(raw
            .map(|value| decode_collection(&value, "kv_store"))
            .unwrap_or_default())
    }

    fn save(&self, credentials: &[Credential]) -> Result<(), PersistenceError> {
        let json = encode_collection(credentials)?;
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        let db = self.db();
        let tx = db.connection().unchecked_transaction()?;
        tx.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![CREDENTIALS_KEY, json, now],
        )?;
        tx.commit()?;
        Ok(())
    }
}
