//! Opening the persisted stores for a working directory

use std::path::Path;

use anyhow::Result;
use listskin_editor::{ConfigStore, FileStorage, LoadOutcome, ModuleStore};
use tracing::debug;

use crate::config::Config;

pub fn open_config_store(cwd: &Path) -> Result<ConfigStore<FileStorage>> {
    let config = Config::load(cwd)?;
    let mut store = ConfigStore::new(FileStorage::new(config.state_path(cwd)));
    report(store.load_from_storage(), "configuration");
    Ok(store)
}

pub fn open_module_store(cwd: &Path) -> Result<ModuleStore<FileStorage>> {
    let config = Config::load(cwd)?;
    let mut store = ModuleStore::new(FileStorage::new(config.state_path(cwd)));
    report(store.load_from_storage(), "module configuration");
    Ok(store)
}

fn report(outcome: LoadOutcome, what: &str) {
    debug!(?outcome, what, "loaded state");
}

#[cfg(test)]
mod tests {
    use super::*;
    use listskin_config::ColorsPatch;

    #[test]
    fn test_state_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = open_config_store(dir.path()).unwrap();
        store.update_colors(&ColorsPatch {
            dark: Some("black".to_string()),
            ..Default::default()
        });

        let reopened = open_config_store(dir.path()).unwrap();
        assert_eq!(reopened.config().colors.dark, "black");
        assert!(dir.path().join(".listskin").is_dir());
    }

    #[test]
    fn test_module_state_is_separate() {
        let dir = tempfile::tempdir().unwrap();

        let mut modules = open_module_store(dir.path()).unwrap();
        modules.disable_all_modules();

        let config = open_config_store(dir.path()).unwrap();
        assert!(config.is_config_valid());
        assert_eq!(open_module_store(dir.path()).unwrap().enabled_count(), 0);
    }
}
