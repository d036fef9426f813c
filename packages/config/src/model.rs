//! Single-module configuration schema.
//!
//! Field names serialize in camelCase so exported JSON keeps the shape the
//! generated runtime script and previously exported files expect.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;
use crate::validator::{validate, Validation};

/// Background colors applied by the runtime, per theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Background color for the light theme
    pub light: String,

    /// Background color for the dark theme
    pub dark: String,

    /// Computed colors starting with this prefix are left untouched
    #[serde(default)]
    pub specific_prefix: String,
}

/// CSS selectors the runtime targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorConfig {
    /// Root selector of the light theme
    pub light_theme: String,

    /// Root selector of the dark theme
    pub dark_theme: String,

    /// Elements matching any of these are never restyled
    pub ignored: Vec<String>,

    /// Element the DOM observer is attached to
    pub root_element: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathConfig {
    /// Route prefixes that are never restyled
    pub excluded: Vec<String>,
}

/// DOM observation tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverConfig {
    #[serde(default = "default_true")]
    pub child_list: bool,

    #[serde(default = "default_true")]
    pub subtree: bool,

    /// Milliseconds between two restyling passes
    #[serde(deserialize_with = "deserialize_millis")]
    pub throttle_delay: u64,
}

fn default_true() -> bool {
    true
}

/// Any non-negative JSON number, rounded half away from zero to whole
/// milliseconds
pub(crate) fn deserialize_millis<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    millis(&number).ok_or_else(|| D::Error::custom("throttleDelay must be a non-negative number"))
}

pub(crate) fn deserialize_optional_millis<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Number>::deserialize(deserializer)? {
        Some(number) => millis(&number)
            .map(Some)
            .ok_or_else(|| D::Error::custom("throttleDelay must be a non-negative number")),
        None => Ok(None),
    }
}

pub(crate) fn millis(number: &serde_json::Number) -> Option<u64> {
    if let Some(ms) = number.as_u64() {
        return Some(ms);
    }
    match number.as_f64() {
        Some(ms) if ms.is_finite() && ms >= 0.0 => Some(ms.round() as u64),
        _ => None,
    }
}

/// Complete beautifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub colors: ThemeColors,
    pub selectors: SelectorConfig,
    pub paths: PathConfig,
    pub observer: ObserverConfig,
    #[serde(default)]
    pub debug: bool,
}

impl Configuration {
    /// Parse and validate a JSON document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(text)?;

        match validate(&value) {
            Validation::Valid(config) => Ok(config),
            Validation::Invalid(reasons) => Err(ConfigError::Invalid(reasons)),
        }
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        crate::defaults::default_config()
    }
}

/// Named, read-only starting point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub config: Configuration,
}
