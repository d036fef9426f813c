//! Error types for the editor

use listskin_config::ConfigError;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl EditorError {
    /// True if an import failed because the text was not JSON at all
    pub fn is_parse_error(&self) -> bool {
        matches!(self, EditorError::Config(ConfigError::Parse(_)))
    }

    /// Validation messages, if the failure was a rejected configuration
    pub fn reasons(&self) -> Vec<String> {
        match self {
            EditorError::Config(e) => e.reasons(),
            EditorError::Storage(e) => vec![e.to_string()],
        }
    }
}
