//! # Beautification Modules
//!
//! Schema for the modular configuration variant: a set of independently
//! toggleable modules, each carrying its own sub-configuration, plus global
//! output options.
//!
//! The `enabled` flag inside each sub-configuration is the only stored copy.
//! [`ModuleInfo`] values are derived from it on demand, so a module listing
//! can never disagree with the configuration it was built from.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::validator::Validation;

/// Identifier of a beautification module.
///
/// Declaration order is registry order: modules are listed and rendered in
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleId {
    BackgroundImage,
}

impl ModuleId {
    pub const ALL: [ModuleId; 1] = [ModuleId::BackgroundImage];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::BackgroundImage => "backgroundImage",
        }
    }

    pub fn definition(&self) -> &'static ModuleDefinition {
        MODULE_DEFINITIONS
            .iter()
            .find(|def| def.id == *self)
            .unwrap_or(&MODULE_DEFINITIONS[0])
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = String;

    /// Accepts the serialized name or its kebab-case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backgroundImage" | "background-image" => Ok(ModuleId::BackgroundImage),
            other => Err(format!("Unknown module: {}", other)),
        }
    }
}

/// Static registry entry describing a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDefinition {
    pub id: ModuleId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

pub const MODULE_DEFINITIONS: &[ModuleDefinition] = &[ModuleDefinition {
    id: ModuleId::BackgroundImage,
    name: "Background Image",
    description: "Page background image with separate light and dark theme variants",
    icon: "Picture",
    category: "Visual Effects",
}];

/// Registry entry plus the current enabled state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    pub id: ModuleId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub enabled: bool,
}

impl ModuleInfo {
    pub fn new(def: &ModuleDefinition, enabled: bool) -> Self {
        Self {
            id: def.id,
            name: def.name.to_string(),
            description: def.description.to_string(),
            icon: def.icon.to_string(),
            category: def.category.to_string(),
            enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImageConfig {
    pub enabled: bool,
    /// Image URL for the light theme (empty = unset)
    #[serde(default)]
    pub light_image: String,
    /// Image URL for the dark theme (empty = unset)
    #[serde(default)]
    pub dark_image: String,
}

impl Default for BackgroundImageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            light_image: "https://source.unsplash.com/1920x1080/?nature".to_string(),
            dark_image: "https://source.unsplash.com/1920x1080/?night".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundImagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_image: Option<String>,
}

/// Per-module sub-configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ModuleConfig {
    BackgroundImage(BackgroundImageConfig),
}

/// Partial sub-configuration, shallow-merged by [`ModuleConfig::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleConfigPatch {
    BackgroundImage(BackgroundImagePatch),
}

impl ModuleConfigPatch {
    pub fn id(&self) -> ModuleId {
        match self {
            ModuleConfigPatch::BackgroundImage(_) => ModuleId::BackgroundImage,
        }
    }

    pub fn enabled(&self) -> Option<bool> {
        match self {
            ModuleConfigPatch::BackgroundImage(patch) => patch.enabled,
        }
    }

    /// Decode a JSON partial for the given module
    pub fn from_value(id: ModuleId, value: Value) -> Result<Self, serde_json::Error> {
        match id {
            ModuleId::BackgroundImage => {
                serde_json::from_value(value).map(ModuleConfigPatch::BackgroundImage)
            }
        }
    }
}

impl ModuleConfig {
    /// Default sub-configuration of a module
    pub fn default_for(id: ModuleId) -> Self {
        match id {
            ModuleId::BackgroundImage => ModuleConfig::BackgroundImage(BackgroundImageConfig::default()),
        }
    }

    /// Decode the sub-configuration stored under `id`
    pub fn from_value(id: ModuleId, value: Value) -> Result<Self, serde_json::Error> {
        match id {
            ModuleId::BackgroundImage => serde_json::from_value(value).map(ModuleConfig::BackgroundImage),
        }
    }

    pub fn id(&self) -> ModuleId {
        match self {
            ModuleConfig::BackgroundImage(_) => ModuleId::BackgroundImage,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            ModuleConfig::BackgroundImage(config) => config.enabled,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            ModuleConfig::BackgroundImage(config) => config.enabled = enabled,
        }
    }

    /// Shallow-merge a patch. Returns false if the patch targets another module.
    pub fn apply(&mut self, patch: &ModuleConfigPatch) -> bool {
        match (self, patch) {
            (ModuleConfig::BackgroundImage(config), ModuleConfigPatch::BackgroundImage(patch)) => {
                if let Some(enabled) = patch.enabled {
                    config.enabled = enabled;
                }
                if let Some(light) = &patch.light_image {
                    config.light_image = light.clone();
                }
                if let Some(dark) = &patch.dark_image {
                    config.dark_image = dark.clone();
                }
                true
            }
        }
    }

    pub fn as_background_image(&self) -> Option<&BackgroundImageConfig> {
        match self {
            ModuleConfig::BackgroundImage(config) => Some(config),
        }
    }
}

/// Output options shared by every module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    #[serde(default = "default_true")]
    pub generate_comments: bool,
    #[serde(default)]
    pub minify_output: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            generate_comments: true,
            minify_output: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minify_output: Option<bool>,
}

impl GlobalPatch {
    pub fn apply_to(&self, global: &mut GlobalConfig) {
        if let Some(comments) = self.generate_comments {
            global.generate_comments = comments;
        }
        if let Some(minify) = self.minify_output {
            global.minify_output = minify;
        }
    }
}

/// Modular configuration: module sub-configs keyed by id, plus global options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfiguration {
    #[serde(deserialize_with = "deserialize_modules")]
    pub modules: BTreeMap<ModuleId, ModuleConfig>,
    pub global: GlobalConfig,
}

/// Decode each sub-configuration according to the id it is stored under
fn deserialize_modules<'de, D>(deserializer: D) -> Result<BTreeMap<ModuleId, ModuleConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = BTreeMap::<ModuleId, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(id, value)| {
            ModuleConfig::from_value(id, value)
                .map(|config| (id, config))
                .map_err(|e| D::Error::custom(format!("module {}: {}", id, e)))
        })
        .collect()
}

impl Default for ModuleConfiguration {
    fn default() -> Self {
        let modules = ModuleId::ALL
            .iter()
            .map(|id| (*id, ModuleConfig::default_for(*id)))
            .collect();

        Self {
            modules,
            global: GlobalConfig::default(),
        }
    }
}

impl ModuleConfiguration {
    /// Parse and validate a JSON document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;

        match validate_module_configuration(&value) {
            Validation::Valid(config) => Ok(config),
            Validation::Invalid(reasons) => Err(ConfigError::Invalid(reasons)),
        }
    }

    /// Pretty JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, id: ModuleId) -> Option<&ModuleConfig> {
        self.modules.get(&id)
    }

    pub fn is_enabled(&self, id: ModuleId) -> bool {
        self.get(id).map(ModuleConfig::enabled).unwrap_or(false)
    }

    /// Enabled module ids, in registry order
    pub fn enabled_ids(&self) -> Vec<ModuleId> {
        self.modules
            .iter()
            .filter(|(_, config)| config.enabled())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Registry listing with enabled state derived from the sub-configs
    pub fn module_infos(&self) -> Vec<ModuleInfo> {
        MODULE_DEFINITIONS
            .iter()
            .map(|def| ModuleInfo::new(def, self.is_enabled(def.id)))
            .collect()
    }
}

/// Validate an untrusted value against the modular schema
pub fn validate_module_configuration(candidate: &Value) -> Validation<ModuleConfiguration> {
    let Some(root) = candidate.as_object() else {
        return Validation::Invalid(vec!["module configuration must be an object".to_string()]);
    };

    let mut errors = Vec::new();
    for field in ["modules", "global"] {
        match root.get(field) {
            Some(Value::Object(_)) => {}
            Some(_) => errors.push(format!("{} must be an object", field)),
            None => errors.push(format!("{} is missing", field)),
        }
    }

    if !errors.is_empty() {
        return Validation::Invalid(errors);
    }

    match serde_json::from_value::<ModuleConfiguration>(candidate.clone()) {
        Ok(config) => Validation::Valid(config),
        Err(e) => Validation::Invalid(vec![format!("module configuration does not match schema: {}", e)]),
    }
}
