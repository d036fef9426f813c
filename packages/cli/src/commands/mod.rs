pub mod export;
pub mod generate;
pub mod import;
pub mod init;
pub mod module;
pub mod preset;
pub mod preview;
pub mod update;
pub mod validate;

pub use export::{export, ExportArgs};
pub use generate::{generate, GenerateArgs};
pub use import::{import, ImportArgs};
pub use init::{init, InitArgs};
pub use module::{module, ModuleCommand};
pub use preset::{preset, PresetCommand};
pub use preview::{preview, PreviewArgs};
pub use update::{update, UpdateArgs};
pub use validate::{validate, ValidateArgs};
