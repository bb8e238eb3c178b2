// Passvault JSON file storage
// Keeps the credential collection as a JSON array in a single file.
// Writes go to a temp file in the same directory which is then renamed over
// the target, so readers never see a half-written collection.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{decode_collection, encode_collection, CredentialPersistence};
use crate::types::credential::Credential;
use crate::types::errors::PersistenceError;

/// File-backed persistence using JSON.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialPersistence for JsonFilePersistence {
    fn load(&self) -> Result<Vec<Credential>, PersistenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                log::warn!("Vault file {} is not valid UTF-8", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(PersistenceError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Ok(decode_collection(&content, &self.path.display().to_string()))
    }

    fn save(&self, credentials: &[Credential]) -> Result<(), PersistenceError> {
        let json = encode_collection(credentials)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| {
            PersistenceError::Io(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let mut tmp = NamedTempFile::new_in(&dir)
            .map_err(|e| PersistenceError::Io(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| PersistenceError::Io(format!("Failed to write temp file: {}", e)))?;
        tmp.persist(&self.path).map_err(|e| {
            PersistenceError::Io(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e.error
            ))
        })?;

        Ok(())
    }
}
