//! Error types for configuration parsing

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl ConfigError {
    /// Human-readable reasons, one per violated rule
    pub fn reasons(&self) -> Vec<String> {
        match self {
            ConfigError::Parse(e) => vec![e.to_string()],
            ConfigError::Invalid(reasons) => reasons.clone(),
        }
    }
}
