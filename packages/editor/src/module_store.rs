//! # Module Store
//!
//! Store for the modular configuration: independently toggleable
//! beautification modules plus global output options.
//!
//! The module listing ([`ModuleInfo`]) is derived from the sub-configs'
//! `enabled` flags every time it is read, so the listing and the
//! configuration cannot disagree after any operation. The store also tracks
//! which module is selected for editing and keeps that selection pointing at
//! an enabled module whenever the configuration is replaced wholesale.

use listskin_config::{
    GlobalPatch, ModuleConfig, ModuleConfigPatch, ModuleConfiguration, ModuleId, ModuleInfo,
    MODULE_DEFINITIONS,
};
use tracing::{debug, info, warn};

use crate::config_store::LoadOutcome;
use crate::history::History;
use crate::storage::{KeyValueStore, MODULES_STORAGE_KEY};
use crate::EditorError;

#[derive(Debug)]
pub struct ModuleStore<S: KeyValueStore> {
    config: ModuleConfiguration,
    default_config: ModuleConfiguration,
    /// Module currently shown in the editor
    selected: Option<ModuleId>,
    history: History<ModuleConfiguration>,
    storage: S,
    version: u64,
}

impl<S: KeyValueStore> ModuleStore<S> {
    pub fn new(storage: S) -> Self {
        Self::init(ModuleConfiguration::default(), storage)
    }

    pub fn init(default_config: ModuleConfiguration, storage: S) -> Self {
        let selected = first_enabled(&default_config, None);
        Self {
            history: History::new(default_config.clone()),
            config: default_config.clone(),
            default_config,
            selected,
            storage,
            version: 0,
        }
    }

    pub fn teardown(self) -> S {
        debug!(version = self.version, "module store torn down");
        self.storage
    }

    pub fn config(&self) -> &ModuleConfiguration {
        &self.config
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &History<ModuleConfiguration> {
        &self.history
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Every registered module, in registry order
    pub fn modules(&self) -> Vec<ModuleInfo> {
        self.config.module_infos()
    }

    pub fn enabled_modules(&self) -> Vec<ModuleInfo> {
        self.modules().into_iter().filter(|m| m.enabled).collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled_modules().len()
    }

    pub fn selected_module(&self) -> Option<ModuleId> {
        self.selected
    }

    /// Select a module for editing (not recorded in history)
    pub fn select_module(&mut self, id: ModuleId) {
        self.selected = Some(id);
    }

    pub fn current_module(&self) -> Option<ModuleInfo> {
        let selected = self.selected?;
        self.modules().into_iter().find(|m| m.id == selected)
    }

    pub fn current_module_config(&self) -> Option<&ModuleConfig> {
        self.config.get(self.selected?)
    }

    /// Enable or disable a module.
    ///
    /// Disabling the selected module moves the selection to the next enabled
    /// module, or clears it if none is left.
    pub fn toggle_module(&mut self, id: ModuleId, enabled: bool) {
        let mut next = self.config.clone();
        next.modules
            .entry(id)
            .or_insert_with(|| ModuleConfig::default_for(id))
            .set_enabled(enabled);

        if !enabled && self.selected == Some(id) {
            self.selected = first_enabled(&next, Some(id));
        }

        self.commit(next);
        debug!(module = %id, enabled, "module toggled");
    }

    pub fn enable_all_modules(&mut self) {
        let mut next = self.config.clone();
        for def in MODULE_DEFINITIONS {
            next.modules
                .entry(def.id)
                .or_insert_with(|| ModuleConfig::default_for(def.id))
                .set_enabled(true);
        }
        self.commit(next);
    }

    pub fn disable_all_modules(&mut self) {
        let mut next = self.config.clone();
        for module in next.modules.values_mut() {
            module.set_enabled(false);
        }
        self.selected = None;
        self.commit(next);
    }

    /// Shallow-merge a partial sub-config into an existing module.
    ///
    /// Returns false without recording anything if the module is absent from
    /// the configuration or the patch belongs to another module.
    pub fn update_module_config(&mut self, id: ModuleId, patch: &ModuleConfigPatch) -> bool {
        if patch.id() != id {
            debug!(module = %id, patch = %patch.id(), "patch does not match module");
            return false;
        }

        let mut next = self.config.clone();
        let Some(module) = next.modules.get_mut(&id) else {
            debug!(module = %id, "module not configured");
            return false;
        };
        module.apply(patch);

        self.commit(next);
        self.sync_modules_from_config();
        true
    }

    pub fn update_global(&mut self, patch: &GlobalPatch) {
        let mut next = self.config.clone();
        patch.apply_to(&mut next.global);
        self.commit(next);
    }

    pub fn reset_to_default(&mut self) {
        let next = self.default_config.clone();
        self.selected = first_enabled(&next, None);
        self.commit(next);
    }

    /// Replace the configuration with imported JSON and select its first
    /// enabled module. Rejected input leaves state and history untouched.
    pub fn import_config(&mut self, json: &str) -> Result<(), EditorError> {
        let config = ModuleConfiguration::from_json(json).map_err(|e| {
            warn!(error = %e, "module configuration import rejected");
            e
        })?;

        self.selected = first_enabled(&config, None);
        self.commit(config);
        info!(enabled = self.enabled_count(), "module configuration imported");
        Ok(())
    }

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
        self.after_replace();
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.config = snapshot.clone();
        self.after_replace();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// At least one module enabled, and every enabled module's own
    /// sub-config agrees that it is enabled
    pub fn is_config_valid(&self) -> bool {
        let enabled = self.enabled_modules();
        !enabled.is_empty()
            && enabled
                .iter()
                .all(|info| self.config.get(info.id).map(ModuleConfig::enabled).unwrap_or(false))
    }

    /// Re-derive module state after the configuration was replaced wholesale.
    ///
    /// The listing is always derived, so only the selection needs fixing: a
    /// selected module that is no longer enabled gives way to the first
    /// enabled one, or to no selection.
    pub fn sync_modules_from_config(&mut self) {
        if let Some(selected) = self.selected {
            if !self.config.is_enabled(selected) {
                self.selected = first_enabled(&self.config, None);
            }
        }
    }

    /// Seed the initial state from storage; see [`crate::ConfigStore::load_from_storage`]
    pub fn load_from_storage(&mut self) -> LoadOutcome {
        let saved = match self.storage.get(MODULES_STORAGE_KEY) {
            Ok(Some(saved)) => saved,
            Ok(None) => return LoadOutcome::Missing,
            Err(e) => {
                warn!(error = %e, "failed to read saved module configuration");
                self.seed(self.default_config.clone());
                return LoadOutcome::Fallback;
            }
        };

        match ModuleConfiguration::from_json(&saved) {
            Ok(config) => {
                self.seed(config);
                info!("restored saved module configuration");
                LoadOutcome::Restored
            }
            Err(e) => {
                warn!(error = %e, "saved module configuration is invalid, using default");
                self.seed(self.default_config.clone());
                LoadOutcome::Fallback
            }
        }
    }

    fn seed(&mut self, config: ModuleConfiguration) {
        self.history.reset(config.clone());
        self.config = config;
        self.version += 1;
        self.sync_modules_from_config();
    }

    fn after_replace(&mut self) {
        self.version += 1;
        self.sync_modules_from_config();
        self.persist();
    }

    fn commit(&mut self, config: ModuleConfiguration) {
        self.config = config;
        self.history.record(&self.config);
        self.version += 1;
        self.persist();
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize module configuration");
                return;
            }
        };

        if let Err(e) = self.storage.set(MODULES_STORAGE_KEY, &json) {
            warn!(error = %e, "failed to persist module configuration");
        }
    }
}

/// First enabled module in registry order, skipping `except`
fn first_enabled(config: &ModuleConfiguration, except: Option<ModuleId>) -> Option<ModuleId> {
    MODULE_DEFINITIONS
        .iter()
        .map(|def| def.id)
        .find(|id| Some(*id) != except && config.is_enabled(*id))
}
