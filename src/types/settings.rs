use serde::{Deserialize, Serialize};

use super::credential::PasswordOptions;

/// Top-level vault settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VaultSettings {
    pub storage: StorageSettings,
    pub generator: PasswordOptions,
}

/// Where the credential collection is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Overrides the platform data directory location when set.
    pub path: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Json,
            path: None,
        }
    }
}

/// Persistence backend selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StorageBackend {
    Json,
    Sqlite,
}

impl StorageBackend {
    /// File name used inside the data directory when no explicit path is configured.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            StorageBackend::Json => "credentials.json",
            StorageBackend::Sqlite => "vault.db",
        }
    }
}
