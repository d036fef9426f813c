//! # Listskin Config
//!
//! Schema, defaults, validation and merge rules for listskin configurations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ config: schema + validator + merge          │
//! │  - Configuration (single-module variant)    │
//! │  - ModuleConfiguration (modular variant)    │
//! │  - Presets and module registry              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: stores, history, persistence        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler: configuration → head/body text    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use listskin_config::{merge, ColorsPatch, ConfigPatch, Configuration};
//!
//! let base = Configuration::default();
//! let patch = ConfigPatch {
//!     colors: Some(ColorsPatch {
//!         light: Some("red".to_string()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let merged = merge(&base, &patch);
//! assert_eq!(merged.colors.light, "red");
//! assert_eq!(merged.colors.dark, base.colors.dark);
//! ```

mod defaults;
mod error;
mod merge;
mod model;
mod modules;
mod validator;

pub use defaults::{default_config, presets, DEFAULT_PRESET_NAME};
pub use error::ConfigError;
pub use merge::{merge, ColorsPatch, ConfigPatch, ObserverPatch, PathsPatch, SelectorsPatch};
pub use model::{Configuration, ObserverConfig, PathConfig, Preset, SelectorConfig, ThemeColors};
pub use modules::{
    validate_module_configuration, BackgroundImageConfig, BackgroundImagePatch, GlobalConfig,
    GlobalPatch, ModuleConfig, ModuleConfigPatch, ModuleConfiguration, ModuleDefinition, ModuleId,
    ModuleInfo, MODULE_DEFINITIONS,
};
pub use validator::{check, is_valid, validate, Validation};
