//! Passvault persistence layer.
//!
//! The credential store talks to storage only through [`CredentialPersistence`],
//! which loads and saves the whole collection at once. Three backends ship
//! with the crate:
//!
//! - [`MemoryPersistence`]: an in-process slot, for tests and embedding.
//! - [`JsonFilePersistence`]: a JSON array in a single file, replaced atomically.
//! - [`SqlitePersistence`]: a SQLite key-value table holding the same JSON blob.
//!
//! # Usage
//!
//! ```no_run
//! use passvault::storage::{CredentialPersistence, JsonFilePersistence};
//!
//! let storage = JsonFilePersistence::new("/tmp/passvault/credentials.json");
//! let credentials = storage.load().expect("failed to read vault");
//! storage.save(&credentials).expect("failed to write vault");
//! ```

pub mod database;
pub mod json_file;
pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use database::Database;
pub use json_file::JsonFilePersistence;
pub use memory::MemoryPersistence;
pub use sqlite::SqlitePersistence;

use crate::types::credential::Credential;
use crate::types::errors::PersistenceError;

/// Persistence port consumed by the credential store.
pub trait CredentialPersistence {
    /// Returns the previously saved collection.
    ///
    /// Missing or unreadable-as-JSON data yields an empty collection. Only
    /// faults in the backing medium itself are reported as errors.
    fn load(&self) -> Result<Vec<Credential>, PersistenceError>;

    /// Replaces the stored collection. A later `load` sees either the old or
    /// the new collection, never a mix.
    fn save(&self, credentials: &[Credential]) -> Result<(), PersistenceError>;
}

impl<P: CredentialPersistence + ?Sized> CredentialPersistence for Box<P> {
    fn load(&self) -> Result<Vec<Credential>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, credentials: &[Credential]) -> Result<(), PersistenceError> {
        (**self).save(credentials)
    }
}

/// Decodes a saved collection, treating malformed content as empty.
pub(crate) fn decode_collection(raw: &str, origin: &str) -> Vec<Credential> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(raw) {
        Ok(credentials) => credentials,
        Err(e) => {
            log::warn!("Ignoring corrupt credential data in {}: {}", origin, e);
            Vec::new()
        }
    }
}

pub(crate) fn encode_collection(credentials: &[Credential]) -> Result<String, PersistenceError> {
    serde_json::to_string(credentials).map_err(|e| PersistenceError::Serialization(e.to_string()))
}
