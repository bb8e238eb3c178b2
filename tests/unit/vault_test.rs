//! Tests for the Vault facade: backend selection from settings, generator
//! defaults, and shared access from several threads.

use std::sync::Arc;
use std::thread;

use passvault::app::{DynPersistence, Vault};
use passvault::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use passvault::storage::MemoryPersistence;
use passvault::types::credential::{CredentialFields, PasswordOptions};
use passvault::types::errors::VaultError;
use tempfile::TempDir;

fn settings_path(dir: &TempDir) -> String {
    dir.path().join("settings.json").to_string_lossy().to_string()
}

fn configure(dir: &TempDir, backend: &str) -> String {
    let path = settings_path(dir);
    let mut engine = SettingsEngine::new(Some(path.clone()));
    engine.load().unwrap();
    engine
        .set_value("storage.backend", serde_json::json!(backend))
        .unwrap();
    engine
        .set_value(
            "storage.path",
            serde_json::json!(dir.path().join("store.data").to_string_lossy()),
        )
        .unwrap();
    path
}

fn memory_vault(dir: &TempDir) -> (Vault, MemoryPersistence) {
    let persistence = MemoryPersistence::new();
    let mut engine = SettingsEngine::new(Some(settings_path(dir)));
    engine.load().unwrap();
    let boxed: DynPersistence = Box::new(persistence.clone());
    (Vault::from_parts(engine, boxed).unwrap(), persistence)
}

#[test]
fn test_json_backed_vault_reopens_with_data() {
    let dir = TempDir::new().unwrap();
    let path = configure(&dir, "Json");

    let id = {
        let vault = Vault::open(Some(path.clone())).unwrap();
        vault.add("example.com", "alice", "Passw0rd!").unwrap().id
    };

    let vault = Vault::open(Some(path)).unwrap();
    let found = vault.search("example");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, id);
}

#[test]
fn test_sqlite_backed_vault_reopens_with_data() {
    let dir = TempDir::new().unwrap();
    let path = configure(&dir, "Sqlite");

    {
        let vault = Vault::open(Some(path.clone())).unwrap();
        let cred = vault.add("example.com", "alice", "pw").unwrap();
        vault
            .edit(&cred.id, CredentialFields::new("example.com", "alice", "pw2"))
            .unwrap();
    }

    let vault = Vault::open(Some(path)).unwrap();
    let all = vault.list();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].password, "pw2");
}

#[test]
fn test_generate_password_uses_settings_defaults() {
    let dir = TempDir::new().unwrap();
    let (mut vault, _) = memory_vault(&dir);
    vault
        .settings_engine_mut()
        .set_value("generator.length", serde_json::json!(20))
        .unwrap();
    vault
        .settings_engine_mut()
        .set_value("generator.symbols", serde_json::json!(false))
        .unwrap();

    let pw = vault.generate_password().unwrap();
    assert_eq!(pw.len(), 20);
    assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_generate_with_explicit_options_and_evaluate() {
    let dir = TempDir::new().unwrap();
    let (vault, _) = memory_vault(&dir);

    let options = PasswordOptions { length: 12, uppercase: false, lowercase: false, numbers: false, symbols: false };
    let pw = vault.generate_password_with(&options).unwrap();
    assert_eq!(pw.len(), 12);
    assert!(pw.chars().all(|c| c.is_ascii_lowercase()));

    let (score, label) = vault.evaluate_password("Abcdefgh1!");
    assert_eq!(score, 5);
    assert_eq!(label.text, "Very Strong");
}

#[test]
fn test_vault_surfaces_persistence_failure_and_retries() {
    let dir = TempDir::new().unwrap();
    let (vault, persistence) = memory_vault(&dir);
    persistence.set_fail_saves(true);

    assert!(matches!(
        vault.add("a.com", "u", "p"),
        Err(VaultError::Persistence(_))
    ));
    assert_eq!(vault.list().len(), 1);
    assert!(!vault.is_persisted());

    persistence.set_fail_saves(false);
    vault.persist().unwrap();
    assert!(vault.is_persisted());
    assert_eq!(persistence.saved().len(), 1);
}

#[test]
fn test_concurrent_adds_keep_ids_unique() {
    let dir = TempDir::new().unwrap();
    let (vault, persistence) = memory_vault(&dir);
    let vault = Arc::new(vault);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let vault = Arc::clone(&vault);
            thread::spawn(move || {
                for i in 0..25 {
                    vault
                        .add(&format!("site{t}-{i}.com"), "user", "pw")
                        .unwrap();
                    let _ = vault.search("site");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let all = vault.list();
    assert_eq!(all.len(), 100);
    let mut ids: Vec<_> = all.iter().map(|c| c.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 100);
    assert_eq!(persistence.saved(), all);
}

#[test]
fn test_delete_and_get_through_vault() {
    let dir = TempDir::new().unwrap();
    let (vault, _) = memory_vault(&dir);
    let cred = vault.add("a.com", "u", "p").unwrap();

    assert_eq!(vault.get(&cred.id), Some(cred.clone()));
    vault.delete(&cred.id).unwrap();
    vault.delete(&cred.id).unwrap();
    assert_eq!(vault.get(&cred.id), None);
}
