use std::sync::{Arc, Mutex, MutexGuard};

use super::CredentialPersistence;
use crate::types::credential::Credential;
use crate::types::errors::PersistenceError;

#[derive(Debug, Default)]
struct Slot {
    credentials: Vec<Credential>,
    fail_saves: bool,
    save_count: usize,
}

/// In-memory persistence slot.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the store saved, or make the next saves fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slot: Arc<Mutex<Slot>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds `credentials`.
    pub fn with_credentials(credentials: Vec<Credential>) -> Self {
        let persistence = Self::default();
        persistence.lock().credentials = credentials;
        persistence
    }

    /// When set, every `save` fails with an I/O error and leaves the slot untouched.
    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// The collection as last saved.
    pub fn saved(&self) -> Vec<Credential> {
        self.lock().credentials.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialPersistence for MemoryPersistence {
    fn load(&self) -> Result<Vec<Credential>, PersistenceError> {
        Ok(self.lock().credentials.clone())
    }

    fn save(&self, credentials: &[Credential]) -> Result<(), PersistenceError> {
        let mut slot = self.lock();
        if slot.fail_saves {
            return Err(PersistenceError::Io("Simulated write failure".to_string()));
        }
        slot.credentials = credentials.to_vec();
        slot.save_count += 1;
        Ok(())
    }
}
