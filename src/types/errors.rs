use std::fmt;

// === VaultError ===

/// Errors surfaced by credential store operations.
#[derive(Debug)]
pub enum VaultError {
    /// Required credential fields were empty. Nothing was stored.
    Validation(String),
    /// No credential with the given ID exists.
    NotFound(String),
    /// The mutation was applied in memory but could not be saved.
    Persistence(PersistenceError),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            VaultError::NotFound(id) => write!(f, "Credential not found: {}", id),
            VaultError::Persistence(err) => write!(f, "Vault not saved: {}", err),
        }
    }
}

impl std::error::Error for VaultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VaultError::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersistenceError> for VaultError {
    fn from(err: PersistenceError) -> Self {
        VaultError::Persistence(err)
    }
}

// === PersistenceError ===

/// Errors reported by a persistence backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Reading or writing the backing file failed.
    Io(String),
    /// The collection could not be encoded or decoded.
    Serialization(String),
    /// The database rejected the operation.
    Database(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            PersistenceError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
            PersistenceError::Database(msg) => write!(f, "Storage database error: {}", msg),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<rusqlite::Error> for PersistenceError {
    fn from(err: rusqlite::Error) -> Self {
        PersistenceError::Database(err.to_string())
    }
}

// === GeneratorError ===

/// Errors related to password generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The random source could not produce a value.
    RandomSource(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::RandomSource(msg) => {
                write!(f, "Random generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
