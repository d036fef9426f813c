//! # Config Store
//!
//! Owns the live single-module [`Configuration`], its undo/redo history and
//! the storage it is persisted to.
//!
//! ## Lifecycle
//!
//! ```text
//! init(default) → load_from_storage → update* / undo / redo → teardown
//!                                         ↓
//!                           merge → history.record → persist
//! ```
//!
//! Every accepted mutation runs the same three steps in order: compute the
//! new configuration, record it in history, persist it. Persistence is best
//! effort; a failed write is logged and the in-memory state stays
//! authoritative.

use listskin_config::{
    check, default_config, merge, presets, ColorsPatch, ConfigPatch, Configuration,
    ObserverPatch, PathsPatch, Preset, SelectorsPatch,
};
use tracing::{debug, info, warn};

use crate::history::History;
use crate::storage::{KeyValueStore, CONFIG_STORAGE_KEY};
use crate::EditorError;

/// Result of seeding a store from persistent storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A valid saved configuration was adopted
    Restored,
    /// Nothing was saved; state left untouched
    Missing,
    /// The saved value was unreadable or invalid; the default is active
    Fallback,
}

/// Store for the single-module configuration
#[derive(Debug)]
pub struct ConfigStore<S: KeyValueStore> {
    config: Configuration,
    default_config: Configuration,
    history: History<Configuration>,
    presets: Vec<Preset>,
    storage: S,
    /// Increments on every accepted mutation
    version: u64,
}

impl<S: KeyValueStore> ConfigStore<S> {
    /// Create a store seeded with the built-in default
    pub fn new(storage: S) -> Self {
        Self::init(default_config(), storage)
    }

    /// Create a store seeded with `default_config`, which `reset_to_default` restores
    pub fn init(default_config: Configuration, storage: S) -> Self {
        Self {
            history: History::new(default_config.clone()),
            config: default_config.clone(),
            default_config,
            presets: presets(),
            storage,
            version: 0,
        }
    }

    /// Dispose of the store, handing back its storage
    pub fn teardown(self) -> S {
        debug!(version = self.version, "config store torn down");
        self.storage
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &History<Configuration> {
        &self.history
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable storage access (for embedding callers and tests)
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Merge a partial configuration into the current one
    pub fn update(&mut self, patch: &ConfigPatch) {
        let next = merge(&self.config, patch);
        self.commit(next);
    }

    pub fn update_colors(&mut self, patch: &ColorsPatch) {
        let mut next = self.config.clone();
        patch.apply_to(&mut next.colors);
        self.commit(next);
    }

    pub fn update_selectors(&mut self, patch: &SelectorsPatch) {
        let mut next = self.config.clone();
        patch.apply_to(&mut next.selectors);
        self.commit(next);
    }

    pub fn update_paths(&mut self, patch: &PathsPatch) {
        let mut next = self.config.clone();
        patch.apply_to(&mut next.paths);
        self.commit(next);
    }

    pub fn update_observer(&mut self, patch: &ObserverPatch) {
        let mut next = self.config.clone();
        patch.apply_to(&mut next.observer);
        self.commit(next);
    }

    pub fn reset_to_default(&mut self) {
        let next = self.default_config.clone();
        self.commit(next);
    }

    /// Replace the configuration with a preset. Returns false (and changes
    /// nothing) if no preset has exactly this name.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        let Some(preset) = self.presets.iter().find(|p| p.name == name) else {
            debug!(name, "preset not found");
            return false;
        };

        let next = preset.config.clone();
        self.commit(next);
        info!(name, "preset applied");
        true
    }

    /// Replace the configuration with imported JSON.
    ///
    /// Malformed JSON or an invalid configuration is rejected without touching
    /// the current state or history.
    pub fn import_config(&mut self, json: &str) -> Result<(), EditorError> {
        let config = Configuration::from_json(json).map_err(|e| {
            warn!(error = %e, "configuration import rejected");
            e
        })?;

        self.commit(config);
        info!(version = self.version, "configuration imported");
        Ok(())
    }

    /// Pretty-printed JSON of the current configuration
    pub fn export_config(&self) -> Result<String, EditorError> {
        self.config_json()
    }

    pub fn config_json(&self) -> Result<String, EditorError> {
        Ok(self.config.to_json()?)
    }

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.config = snapshot.clone();
        self.version += 1;
        self.persist();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.config = snapshot.clone();
        self.version += 1;
        self.persist();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Structural and non-empty checks on the current configuration
    pub fn is_config_valid(&self) -> bool {
        check(&self.config).is_empty()
    }

    /// Seed the initial state from storage.
    ///
    /// A valid saved configuration becomes the current state and the seed of
    /// a fresh history, without adding an entry. Anything unreadable falls
    /// back silently to the default.
    pub fn load_from_storage(&mut self) -> LoadOutcome {
        let saved = match self.storage.get(CONFIG_STORAGE_KEY) {
            Ok(Some(saved)) => saved,
            Ok(None) => return LoadOutcome::Missing,
            Err(e) => {
                warn!(error = %e, "failed to read saved configuration");
                self.seed(self.default_config.clone());
                return LoadOutcome::Fallback;
            }
        };

        match Configuration::from_json(&saved) {
            Ok(config) => {
                self.seed(config);
                info!("restored saved configuration");
                LoadOutcome::Restored
            }
            Err(e) => {
                warn!(error = %e, "saved configuration is invalid, using default");
                self.seed(self.default_config.clone());
                LoadOutcome::Fallback
            }
        }
    }

    fn seed(&mut self, config: Configuration) {
        self.history.reset(config.clone());
        self.config = config;
        self.version += 1;
    }

    fn commit(&mut self, config: Configuration) {
        self.config = config;
        self.history.record(&self.config);
        self.version += 1;
        self.persist();
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize configuration");
                return;
            }
        };

        if let Err(e) = self.storage.set(CONFIG_STORAGE_KEY, &json) {
            warn!(error = %e, "failed to persist configuration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> ConfigStore<MemoryStorage> {
        ConfigStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_store_creation() {
        let store = store();
        assert_eq!(store.config(), &default_config());
        assert_eq!(store.version(), 0);
        assert_eq!(store.history().len(), 1);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert!(store.is_config_valid());
    }

    #[test]
    fn test_update_colors_records_and_persists() {
        let mut store = store();
        store.update_colors(&ColorsPatch {
            light: Some("red".to_string()),
            ..Default::default()
        });

        assert_eq!(store.config().colors.light, "red");
        assert_eq!(store.config().colors.dark, default_config().colors.dark);
        assert_eq!(store.history().len(), 2);
        assert!(store.can_undo());
        assert_eq!(store.version(), 1);

        let saved = store.storage().get(CONFIG_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(Configuration::from_json(&saved).unwrap(), *store.config());
    }

    #[test]
    fn test_update_accepts_invalid_values() {
        let mut store = store();
        store.update_selectors(&SelectorsPatch {
            root_element: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(store.history().len(), 2);
        assert!(!store.is_config_valid());
    }

    #[test]
    fn test_apply_unknown_preset_is_noop() {
        let mut store = store();
        assert!(!store.apply_preset("Does Not Exist"));
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.version(), 0);
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_apply_preset_by_exact_name() {
        let mut store = store();
        assert!(!store.apply_preset("performance"));
        assert!(store.apply_preset("Performance"));
        assert_eq!(store.config().observer.throttle_delay, 100);
        assert_eq!(store.history().len(), 2);
    }

    #[test]
    fn test_reset_to_injected_default() {
        let mut custom = default_config();
        custom.debug = true;

        let mut store = ConfigStore::init(custom.clone(), MemoryStorage::new());
        store.update(&ConfigPatch {
            debug: Some(false),
            ..Default::default()
        });
        store.reset_to_default();

        assert_eq!(store.config(), &custom);
        assert_eq!(store.history().len(), 3);
    }
}
