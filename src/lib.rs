//! Passvault — a local credential vault with a password generator and strength meter.
//!
//! This library crate exposes all modules for use by a presentation layer and
//! by the integration tests.

pub mod app;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;

pub use app::Vault;
pub use services::credential_store::{CredentialStore, CredentialStoreTrait};
pub use services::password_engine::{PasswordEngine, PasswordEngineTrait};
pub use types::credential::{Credential, CredentialFields, PasswordOptions};
pub use types::errors::{GeneratorError, PersistenceError, SettingsError, VaultError};
