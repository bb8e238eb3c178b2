//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence, and reset behavior.

use passvault::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use passvault::types::settings::{StorageBackend, VaultSettings};
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, VaultSettings::default());
    assert_eq!(settings.generator.length, 16);
    assert!(settings.generator.uppercase && settings.generator.symbols);
    assert_eq!(settings.storage.backend, StorageBackend::Json);
}

/// A change made through `set_value` must be visible to a fresh engine reading
/// the same file.
#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("generator.length", serde_json::json!(28))
            .unwrap();
    }

    {
        let mut engine2 = engine_in_temp(&dir);
        let loaded = engine2.load().unwrap();
        assert_eq!(loaded.generator.length, 28);
    }
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("generator.numbers", serde_json::json!(false))
            .unwrap();
        engine
            .set_value("storage.backend", serde_json::json!("Sqlite"))
            .unwrap();
        assert!(!engine.get_settings().generator.numbers);

        engine.reset().unwrap();
        assert_eq!(*engine.get_settings(), VaultSettings::default());
    }

    {
        let mut engine2 = engine_in_temp(&dir);
        assert_eq!(engine2.load().unwrap(), VaultSettings::default());
    }
}

#[test]
fn test_sqlite_backend_default_file_name() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("storage.backend", serde_json::json!("Sqlite"))
        .unwrap();

    assert!(engine.storage_path().ends_with("vault.db"));
}
