//! SQLite handle for the `kv_store` backend.

use rusqlite::Connection;
use std::path::Path;

use super::migrations;

/// A connection whose schema is at [`migrations::CURRENT_SCHEMA_VERSION`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens or creates the database file, switches it to WAL and migrates it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        Self::migrated(conn)
    }

    /// Throwaway database, mostly for tests.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::migrated(Connection::open_in_memory()?)
    }

    fn migrated(conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
