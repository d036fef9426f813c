use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "listskin.config.json";

/// Listskin tool configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted editor state
    #[serde(default = "default_state_dir")]
    pub state_dir: String,

    /// Directory generated snippets are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_state_dir() -> String {
    ".listskin".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn state_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.state_dir)
    }

    pub fn out_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
            out_dir: default_out_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{ "stateDir": "state", "outDir": "public/snippets" }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.state_dir, "state");
        assert_eq!(config.out_dir, "public/snippets");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "outDir": "out" }"#).unwrap();
        assert_eq!(config.state_dir, ".listskin");
        assert_eq!(config.out_dir, "out");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.out_path(dir.path()), dir.path().join("dist"));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
