//! # Listskin Editor
//!
//! Configuration state engine for listskin.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ caller (CLI, UI): edits                     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: ConfigStore / ModuleStore           │
//! │  - Merge partial updates                    │
//! │  - Record snapshots for undo/redo           │
//! │  - Persist to a key-value store             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler: configuration → head/body text    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Stores own their state**: configuration and history change only
//!    through store operations
//! 2. **Snapshots by value**: history never aliases the live configuration
//! 3. **Best-effort persistence**: storage failures are logged, never fatal
//! 4. **Reject up front**: invalid imports and unknown presets change nothing
//!
//! ## Usage
//!
//! ```rust
//! use listskin_config::ColorsPatch;
//! use listskin_editor::{ConfigStore, MemoryStorage};
//!
//! let mut store = ConfigStore::new(MemoryStorage::new());
//! store.load_from_storage();
//!
//! store.update_colors(&ColorsPatch {
//!     light: Some("red".to_string()),
//!     ..Default::default()
//! });
//! assert!(store.can_undo());
//!
//! store.undo();
//! assert_ne!(store.config().colors.light, "red");
//! ```

mod config_store;
mod errors;
mod history;
mod module_store;
mod storage;

pub use config_store::{ConfigStore, LoadOutcome};
pub use errors::EditorError;
pub use history::{History, HISTORY_LIMIT};
pub use module_store::ModuleStore;
pub use storage::{
    FileStorage, KeyValueStore, MemoryStorage, StorageError, CONFIG_STORAGE_KEY,
    MODULES_STORAGE_KEY,
};
