//! Integration tests for the config store: persistence, import/export and
//! the end-to-end scenarios a caller drives

use listskin_config::{default_config, ColorsPatch, ConfigPatch, Configuration, ObserverPatch};
use listskin_editor::{
    ConfigStore, FileStorage, KeyValueStore, LoadOutcome, MemoryStorage, StorageError,
    CONFIG_STORAGE_KEY, HISTORY_LIMIT,
};

/// Storage whose every call fails
#[derive(Debug, Default)]
struct BrokenStorage {
    writes: usize,
}

impl KeyValueStore for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        Err(StorageError::Unavailable("disk on fire".to_string()))
    }
}

#[test]
fn test_update_colors_scenario() {
    let mut store = ConfigStore::new(MemoryStorage::new());

    store.update_colors(&ColorsPatch {
        light: Some("red".to_string()),
        ..Default::default()
    });

    assert_eq!(store.config().colors.light, "red");
    assert_eq!(store.config().colors.dark, default_config().colors.dark);
    assert_eq!(store.history().len(), 2);
    assert!(store.can_undo());
    assert!(!store.can_redo());
}

#[test]
fn test_import_rejects_invalid_without_side_effects() {
    let mut store = ConfigStore::new(MemoryStorage::new());
    store.update(&ConfigPatch {
        debug: Some(true),
        ..Default::default()
    });

    let before = store.config().clone();
    let history_len = store.history().len();
    let cursor = store.history().cursor();
    let version = store.version();

    let result = store.import_config(r#"{"colors":{}}"#);
    assert!(result.is_err());
    assert!(!result.unwrap_err().is_parse_error());

    let result = store.import_config("this is not json");
    assert!(result.unwrap_err().is_parse_error());

    assert_eq!(store.config(), &before);
    assert_eq!(store.history().len(), history_len);
    assert_eq!(store.history().cursor(), cursor);
    assert_eq!(store.version(), version);
}

#[test]
fn test_import_valid_replaces_and_records() {
    let mut store = ConfigStore::new(MemoryStorage::new());

    let mut imported = default_config();
    imported.colors.dark = "rgb(0, 0, 0)".to_string();
    imported.paths.excluded = vec![];

    store.import_config(&imported.to_json().unwrap()).unwrap();

    assert_eq!(store.config(), &imported);
    assert_eq!(store.history().len(), 2);

    let saved = store.storage().get(CONFIG_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(Configuration::from_json(&saved).unwrap(), imported);
}

#[test]
fn test_export_import_round_trip() {
    let mut store = ConfigStore::new(MemoryStorage::new());
    store.apply_preset("High Contrast");
    let exported = store.export_config().unwrap();

    let mut other = ConfigStore::new(MemoryStorage::new());
    other.import_config(&exported).unwrap();

    assert_eq!(other.export_config().unwrap(), exported);
    assert_eq!(other.config(), store.config());
}

#[test]
fn test_export_is_pure() {
    let store = ConfigStore::new(MemoryStorage::new());
    let first = store.export_config().unwrap();
    let second = store.config_json().unwrap();

    assert_eq!(first, second);
    assert_eq!(store.history().len(), 1);
    assert!(store.storage().is_empty());
}

#[test]
fn test_persistence_failure_is_swallowed() {
    let mut store = ConfigStore::new(BrokenStorage::default());

    store.update_observer(&ObserverPatch {
        throttle_delay: Some(32),
        ..Default::default()
    });
    assert_eq!(store.config().observer.throttle_delay, 32);
    assert!(store.undo());
    assert_eq!(store.config().observer.throttle_delay, 16);

    let storage = store.teardown();
    assert_eq!(storage.writes, 2);
}

#[test]
fn test_load_restores_saved_config() {
    let mut storage = MemoryStorage::new();
    let mut saved = default_config();
    saved.debug = true;
    storage
        .set(CONFIG_STORAGE_KEY, &serde_json::to_string(&saved).unwrap())
        .unwrap();

    let mut store = ConfigStore::new(storage);
    assert_eq!(store.load_from_storage(), LoadOutcome::Restored);

    assert_eq!(store.config(), &saved);
    assert_eq!(store.history().len(), 1);
    assert_eq!(store.history().current(), &saved);
    assert!(!store.can_undo());
}

#[test]
fn test_load_missing_keeps_default() {
    let mut store = ConfigStore::new(MemoryStorage::new());
    assert_eq!(store.load_from_storage(), LoadOutcome::Missing);
    assert_eq!(store.config(), &default_config());
}

#[test]
fn test_load_invalid_falls_back_to_default() {
    let mut storage = MemoryStorage::new();
    storage.set(CONFIG_STORAGE_KEY, r#"{"colors":{"light":""}}"#).unwrap();

    let mut store = ConfigStore::new(storage);
    assert_eq!(store.load_from_storage(), LoadOutcome::Fallback);
    assert_eq!(store.config(), &default_config());
}

#[test]
fn test_load_storage_error_falls_back_to_default() {
    let mut store = ConfigStore::new(BrokenStorage::default());
    assert_eq!(store.load_from_storage(), LoadOutcome::Fallback);
    assert_eq!(store.config(), &default_config());
}

#[test]
fn test_file_storage_survives_restart() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;

    let mut store = ConfigStore::new(FileStorage::new(dir.path()));
    store.load_from_storage();
    store.apply_preset("Transparent");
    let expected = store.config().clone();
    drop(store.teardown());

    let mut reopened = ConfigStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.load_from_storage(), LoadOutcome::Restored);
    assert_eq!(reopened.config(), &expected);

    Ok(())
}

#[test]
fn test_fifty_one_updates_cap_history() {
    let mut store = ConfigStore::new(MemoryStorage::new());

    for i in 1..=51u64 {
        store.update(&ConfigPatch {
            observer: Some(ObserverPatch {
                throttle_delay: Some(i),
                ..Default::default()
            }),
            ..Default::default()
        });
    }

    assert_eq!(store.history().len(), HISTORY_LIMIT);

    while store.undo() {}

    // Seed (16) and update #1 were evicted; the oldest reachable is update #2
    assert_eq!(store.config().observer.throttle_delay, 2);
    assert!(!store.can_undo());
}
