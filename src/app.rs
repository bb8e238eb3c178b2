//! Vault facade for Passvault.
//!
//! Central struct holding the settings engine, the credential store, and the
//! password engine. The store sits behind an `RwLock`: mutations take the
//! write lock one at a time, searches and listings share the read lock.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::info;

use crate::services::credential_store::{CredentialStore, CredentialStoreTrait};
use crate::services::password_engine::{PasswordEngine, PasswordEngineTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{CredentialPersistence, JsonFilePersistence, SqlitePersistence};
use crate::types::credential::{Credential, CredentialFields, PasswordOptions};
use crate::types::errors::{GeneratorError, VaultError};
use crate::types::settings::StorageBackend;
use crate::types::strength::StrengthLabel;

/// Persistence backend chosen at runtime from settings.
pub type DynPersistence = Box<dyn CredentialPersistence + Send + Sync>;

/// Central vault struct shared by the presentation layer.
pub struct Vault {
    settings_engine: SettingsEngine,
    store: RwLock<CredentialStore<DynPersistence>>,
    password_engine: PasswordEngine,
}

impl Vault {
    /// Loads settings, opens the configured storage backend, and loads the
    /// saved credentials.
    ///
    /// `settings_path` overrides the platform config location.
    pub fn open(settings_path: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        settings_engine.load()?;

        let storage_path = settings_engine.storage_path();
        let persistence: DynPersistence = match settings_engine.get_settings().storage.backend {
            StorageBackend::Json => Box::new(JsonFilePersistence::new(&storage_path)),
            StorageBackend::Sqlite => Box::new(SqlitePersistence::open(&storage_path)?),
        };
        info!("Using credential storage at {}", storage_path.display());

        Ok(Self::from_parts(settings_engine, persistence)?)
    }

    /// Builds a vault around an already-configured settings engine and backend.
    pub fn from_parts(
        settings_engine: SettingsEngine,
        persistence: DynPersistence,
    ) -> Result<Self, VaultError> {
        let store = CredentialStore::with_defaults(persistence)?;
        Ok(Self {
            settings_engine,
            store: RwLock::new(store),
            password_engine: PasswordEngine::new(),
        })
    }

    pub fn add(&self, website: &str, username: &str, password: &str) -> Result<Credential, VaultError> {
        self.write_store().add(website, username, password)
    }

    pub fn edit(&self, id: &str, fields: CredentialFields) -> Result<Credential, VaultError> {
        self.write_store().edit(id, fields)
    }

    pub fn delete(&self, id: &str) -> Result<(), VaultError> {
        self.write_store().delete(id)
    }

    pub fn search(&self, query: &str) -> Vec<Credential> {
        self.read_store().search(query)
    }

    pub fn get(&self, id: &str) -> Option<Credential> {
        self.read_store().get(id)
    }

    pub fn list(&self) -> Vec<Credential> {
        self.read_store().list().to_vec()
    }

    /// Retries saving after a mutation reported a persistence error.
    pub fn persist(&self) -> Result<(), VaultError> {
        self.write_store().persist()
    }

    pub fn is_persisted(&self) -> bool {
        self.read_store().is_persisted()
    }

    /// Generates a password with the generator defaults from settings.
    pub fn generate_password(&self) -> Result<String, GeneratorError> {
        let options = self.settings_engine.get_settings().generator;
        self.password_engine.generate(&options)
    }

    pub fn generate_password_with(&self, options: &PasswordOptions) -> Result<String, GeneratorError> {
        self.password_engine.generate(options)
    }

    pub fn evaluate_password(&self, password: &str) -> (u8, StrengthLabel) {
        self.password_engine.evaluate(password)
    }

    pub fn settings_engine(&self) -> &SettingsEngine {
        &self.settings_engine
    }

    pub fn settings_engine_mut(&mut self) -> &mut SettingsEngine {
        &mut self.settings_engine
    }

    fn read_store(&self) -> RwLockReadGuard<'_, CredentialStore<DynPersistence>> {
        self.store.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_store(&self) -> RwLockWriteGuard<'_, CredentialStore<DynPersistence>> {
        self.store.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
