//! Credential Store for Passvault.
//!
//! Owns the ordered credential collection and is the only place IDs and
//! timestamps are assigned. Every successful mutation writes the whole
//! collection through the persistence port before reporting success.
//!
//! When a save fails, the mutation stays applied in memory, the operation
//! returns [`VaultError::Persistence`], and [`CredentialStore::is_persisted`]
//! reports `false` until [`CredentialStore::persist`] succeeds.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::services::clock::{Clock, SystemClock};
use crate::services::id_generator::{IdGenerator, UuidGenerator};
use crate::storage::CredentialPersistence;
use crate::types::credential::{Credential, CredentialFields};
use crate::types::errors::VaultError;

/// Trait defining credential store operations.
pub trait CredentialStoreTrait {
    fn add(&mut self, website: &str, username: &str, password: &str) -> Result<Credential, VaultError>;
    fn edit(&mut self, id: &str, fields: CredentialFields) -> Result<Credential, VaultError>;
    fn delete(&mut self, id: &str) -> Result<(), VaultError>;
    fn search(&self, query: &str) -> Vec<Credential>;
    fn get(&self, id: &str) -> Option<Credential>;
    fn list(&self) -> &[Credential];
}

/// In-memory credential collection synced through a persistence port.
pub struct CredentialStore<P, C = SystemClock, G = UuidGenerator> {
    credentials: Vec<Credential>,
    persistence: P,
    clock: C,
    ids: G,
    persisted: bool,
}

impl<P: CredentialPersistence> CredentialStore<P> {
    /// Opens a store using the system clock and random UUIDs.
    pub fn with_defaults(persistence: P) -> Result<Self, VaultError> {
        Self::open(persistence, SystemClock, UuidGenerator)
    }
}

impl<P, C, G> CredentialStore<P, C, G>
where
    P: CredentialPersistence,
    C: Clock,
    G: IdGenerator,
{
    /// Loads the saved collection and takes ownership of it.
    pub fn open(persistence: P, clock: C, ids: G) -> Result<Self, VaultError> {
        let loaded = persistence.load()?;
        let credentials = normalize_loaded(loaded);
        info!("Opened credential store with {} entries", credentials.len());

        Ok(Self {
            credentials,
            persistence,
            clock,
            ids,
            persisted: true,
        })
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// False after a save failed and before a later save succeeded.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Writes the current collection through the persistence port.
    ///
    /// This is the retry path after a mutation reported a persistence error.
    pub fn persist(&mut self) -> Result<(), VaultError> {
        match self.persistence.save(&self.credentials) {
            Ok(()) => {
                self.persisted = true;
                Ok(())
            }
            Err(e) => {
                self.persisted = false;
                warn!("Failed to save {} credentials: {}", self.credentials.len(), e);
                Err(VaultError::Persistence(e))
            }
        }
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.credentials.iter().position(|c| c.id == id)
    }
}

impl<P, C, G> CredentialStoreTrait for CredentialStore<P, C, G>
where
    P: CredentialPersistence,
    C: Clock,
    G: IdGenerator,
{
    fn add(&mut self, website: &str, username: &str, password: &str) -> Result<Credential, VaultError> {
        let fields = CredentialFields::new(website, username, password);
        validate(&fields)?;

        let now = self.clock.now_millis();
        let credential = Credential {
            id: self.ids.next_id(),
            website: fields.website,
            username: fields.username,
            password: fields.password,
            created_at: now,
            updated_at: now,
        };
        self.credentials.push(credential.clone());

        self.persist()?;
        info!("Added credential {}", credential.id);
        Ok(credential)
    }

    fn edit(&mut self, id: &str, fields: CredentialFields) -> Result<Credential, VaultError> {
        let index = self
            .position(id)
            .ok_or_else(|| VaultError::NotFound(id.to_string()))?;
        validate(&fields)?;

        let current = &self.credentials[index];
        let updated = Credential {
            id: current.id.clone(),
            website: fields.website,
            username: fields.username,
            password: fields.password,
            created_at: current.created_at,
            updated_at: self.clock.now_millis().max(current.updated_at),
        };

        let mut previous = std::mem::replace(&mut self.credentials[index], updated.clone());
        previous.wipe_password();

        self.persist()?;
        info!("Updated credential {}", updated.id);
        Ok(updated)
    }

    /// Removing an ID that is not present succeeds without touching storage.
    fn delete(&mut self, id: &str) -> Result<(), VaultError> {
        let Some(index) = self.position(id) else {
            debug!("Delete of unknown credential {} ignored", id);
            return Ok(());
        };

        let mut removed = self.credentials.remove(index);
        removed.wipe_password();

        self.persist()?;
        info!("Deleted credential {}", id);
        Ok(())
    }

    /// Case-insensitive substring match on website or username, in stored order.
    /// A blank query returns everything.
    fn search(&self, query: &str) -> Vec<Credential> {
        if query.trim().is_empty() {
            return self.credentials.clone();
        }

        let needle = query.to_lowercase();
        self.credentials
            .iter()
            .filter(|c| {
                c.website.to_lowercase().contains(&needle)
                    || c.username.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    fn get(&self, id: &str) -> Option<Credential> {
        self.credentials.iter().find(|c| c.id == id).cloned()
    }

    fn list(&self) -> &[Credential] {
        &self.credentials
    }
}

fn validate(fields: &CredentialFields) -> Result<(), VaultError> {
    let blank = fields.blank_fields();
    if blank.is_empty() {
        Ok(())
    } else {
        Err(VaultError::Validation(format!(
            "{} must not be empty",
            blank.join(", ")
        )))
    }
}

/// Drops records with a blank field or an ID that repeats an earlier one,
/// and repairs `updated_at < created_at`.
fn normalize_loaded(loaded: Vec<Credential>) -> Vec<Credential> {
    let mut seen = HashSet::new();
    let mut credentials = Vec::with_capacity(loaded.len());

    for mut credential in loaded {
        if !seen.insert(credential.id.clone()) {
            warn!("Skipping duplicate credential id {} in saved data", credential.id);
            continue;
        }
        let fields = CredentialFields::new(
            credential.website.as_str(),
            credential.username.as_str(),
            credential.password.as_str(),
        );
        let blank = fields.blank_fields();
        if !blank.is_empty() {
            warn!(
                "Skipping credential {} in saved data: blank {}",
                credential.id,
                blank.join(", ")
            );
            continue;
        }
        if credential.updated_at < credential.created_at {
            credential.updated_at = credential.created_at;
        }
        credentials.push(credential);
    }
    credentials
}
