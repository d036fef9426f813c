//! # Listskin Compiler
//!
//! Renders configurations into the two injectable snippets (`head.html` and
//! `body.html`) pasted into the file-listing site's settings.
//!
//! ## Pipeline
//!
//! ```text
//! Configuration ──────→ render()         ─┐
//!                                          ├→ GeneratedFiles → stats()
//! ModuleConfiguration → render_modules() ─┘
//! ```
//!
//! Rendering is pure: the output depends only on the configuration and the
//! timestamp passed in, and the timestamp only appears inside comments.
//! Nothing is validated here; callers check with [`validate_config`] or
//! [`validate_module_config`] first.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use listskin_config::default_config;
//!
//! let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
//! let files = listskin_compiler::render(&default_config(), &at);
//!
//! assert!(files.head_content.contains("<style>"));
//! assert!(files.body_content.contains("<script type=\"module\">"));
//! assert_eq!(listskin_compiler::stats(&files).file_count, 2);
//! ```

mod body;
mod context;
mod escape;
mod head;
mod minifier;
mod modular;
mod preview;
mod stats;
mod summary;
mod validate;


use std::fmt;

use chrono::{DateTime, TimeZone};
use listskin_config::Configuration;
use tracing::debug;

pub use body::render_body;
pub use head::render_head;
pub use minifier::minify_css;
pub use modular::{
    generator_for, render_modules, BackgroundImageGenerator, ModularGeneratedFiles,
    ModuleGenerator,
};
pub use preview::{config_preview, module_config_preview};
pub use stats::{format_file_size, line_count, stats, FileStats};
pub use validate::{is_valid_url, validate_config, validate_module_config, ValidationReport};

/// File name of the head snippet
pub const HEAD_FILE_NAME: &str = "head.html";
/// File name of the body snippet
pub const BODY_FILE_NAME: &str = "body.html";

/// The two rendered snippets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub head_content: String,
    pub body_content: String,
}

/// Render the single-module configuration into head and body snippets
pub fn render<Tz>(config: &Configuration, generated_at: &DateTime<Tz>) -> GeneratedFiles
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let files = GeneratedFiles {
        head_content: render_head(config, generated_at),
        body_content: render_body(config, generated_at),
    };

    debug!(
        head_bytes = files.head_content.len(),
        body_bytes = files.body_content.len(),
        "rendered configuration"
    );

    files
}
