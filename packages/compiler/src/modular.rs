//! # Modular Rendering
//!
//! Each enabled module contributes one independent section, produced by its
//! [`ModuleGenerator`]. Sections are concatenated in registry order; disabled
//! modules contribute nothing.
//!
//! With `generateComments` every non-empty file is wrapped in a header and
//! footer comment and sections carry their own comments. With `minifyOutput`
//! each section is minified before it is joined.

use std::fmt;

use chrono::{DateTime, TimeZone};
use listskin_config::{ModuleConfig, ModuleConfiguration, ModuleId};
use tracing::debug;

use crate::context::Context;
use crate::escape::css_url;
use crate::minifier::minify_css;
use crate::stats::{stats, FileStats};
use crate::summary::format_timestamp;
use crate::validate::is_valid_url;
use crate::{GeneratedFiles, BODY_FILE_NAME, HEAD_FILE_NAME};

const RULE: &str = "===============================================================";

/// Output of [`render_modules`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularGeneratedFiles {
    pub files: GeneratedFiles,
    pub stats: FileStats,
    /// Enabled modules, in registry order
    pub enabled_modules: Vec<ModuleId>,
    pub module_count: usize,
}

/// Per-module section renderer
pub trait ModuleGenerator: Sync {
    fn id(&self) -> ModuleId;

    /// Head section for this module, or an empty string
    fn head_section(&self, config: &ModuleConfig, comments: bool) -> String;

    /// Body section for this module, or an empty string
    fn body_section(&self, _config: &ModuleConfig, _comments: bool) -> String {
        String::new()
    }

    /// Module-specific rule violations of an enabled module
    fn validate(&self, config: &ModuleConfig) -> Vec<String>;
}

pub fn generator_for(id: ModuleId) -> &'static dyn ModuleGenerator {
    match id {
        ModuleId::BackgroundImage => &BackgroundImageGenerator,
    }
}

/// Theme-specific page backgrounds through `--light-bg-image` /
/// `--dark-bg-image` custom properties
pub struct BackgroundImageGenerator;

const BACKGROUND_LAYOUT: &str = r#"background-repeat: no-repeat;
background-size: cover;
background-attachment: fixed;
background-position: center;"#;

impl ModuleGenerator for BackgroundImageGenerator {
    fn id(&self) -> ModuleId {
        ModuleId::BackgroundImage
    }

    fn head_section(&self, config: &ModuleConfig, comments: bool) -> String {
        let Some(bg) = config.as_background_image() else {
            return String::new();
        };

        let themes = [
            ("light", ".hope-ui-light", bg.light_image.as_str()),
            ("dark", ".hope-ui-dark", bg.dark_image.as_str()),
        ];
        let set: Vec<_> = themes.iter().filter(|(_, _, url)| !url.is_empty()).collect();
        if set.is_empty() {
            return String::new();
        }

        let mut ctx = Context::new("  ");
        ctx.add_line("<style>");
        ctx.indent();
        if comments {
            ctx.add_line("/* Background image module */");
        }

        ctx.add_line("body {");
        ctx.indent();
        for (theme, _, url) in &set {
            ctx.add_line(&format!("--{}-bg-image: url('{}');", theme, css_url(url)));
        }
        ctx.dedent();
        ctx.add_line("}");

        for (theme, selector, _) in &set {
            ctx.blank_line();
            if comments {
                ctx.add_line(&format!("/* {} theme background */", capitalize(theme)));
            }
            ctx.add_line(&format!("{} {{", selector));
            ctx.indent();
            ctx.add_line(&format!("background-image: var(--{}-bg-image);", theme));
            ctx.add_lines(BACKGROUND_LAYOUT);
            ctx.dedent();
            ctx.add_line("}");
        }

        ctx.dedent();
        ctx.add("</style>");
        ctx.get_output()
    }

    fn validate(&self, config: &ModuleConfig) -> Vec<String> {
        let Some(bg) = config.as_background_image() else {
            return Vec::new();
        };
        let name = self.id().definition().name;
        let mut errors = Vec::new();

        if bg.light_image.is_empty() && bg.dark_image.is_empty() {
            errors.push(format!("{}: set at least one of the light or dark theme images", name));
        }
        if !bg.light_image.is_empty() && !is_valid_url(&bg.light_image) {
            errors.push(format!("{}: light theme image URL is not a valid absolute URL", name));
        }
        if !bg.dark_image.is_empty() && !is_valid_url(&bg.dark_image) {
            errors.push(format!("{}: dark theme image URL is not a valid absolute URL", name));
        }

        errors
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the modular configuration into head and body snippets
pub fn render_modules<Tz>(
    config: &ModuleConfiguration,
    generated_at: &DateTime<Tz>,
) -> ModularGeneratedFiles
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let comments = config.global.generate_comments;
    let minify = config.global.minify_output;
    let enabled_modules = config.enabled_ids();

    let mut head_sections = Vec::new();
    let mut body_sections = Vec::new();

    for id in &enabled_modules {
        let Some(module) = config.get(*id) else {
            continue;
        };
        let generator = generator_for(*id);

        for (sections, section) in [
            (&mut head_sections, generator.head_section(module, comments)),
            (&mut body_sections, generator.body_section(module, comments)),
        ] {
            if section.is_empty() {
                continue;
            }
            sections.push(if minify { minify_css(&section) } else { section });
        }
    }

    let mut head_content = head_sections.join("\n\n");
    let mut body_content = body_sections.join("\n\n");

    if comments {
        head_content = wrap(head_content, HEAD_FILE_NAME, config, generated_at);
        body_content = wrap(body_content, BODY_FILE_NAME, config, generated_at);
    }

    let files = GeneratedFiles {
        head_content,
        body_content,
    };
    let stats = stats(&files);

    debug!(
        modules = enabled_modules.len(),
        head_bytes = stats.head_bytes,
        body_bytes = stats.body_bytes,
        minify,
        "rendered module configuration"
    );

    ModularGeneratedFiles {
        files,
        stats,
        module_count: enabled_modules.len(),
        enabled_modules,
    }
}

fn wrap<Tz>(
    content: String,
    file_name: &str,
    config: &ModuleConfiguration,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if content.is_empty() {
        return content;
    }

    let mut out = file_header(file_name, config, generated_at);
    out.push_str(&content);
    out.push_str(&file_footer());
    out
}

fn file_header<Tz>(file_name: &str, config: &ModuleConfiguration, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let yes_no = |flag: bool| if flag { "yes" } else { "no" };

    let mut ctx = Context::new("  ");
    ctx.add_line("<!--");
    ctx.add_line(RULE);
    ctx.add_line(&format!("Listskin - {}", file_name));
    ctx.add_line(&format!("Generated at: {}", format_timestamp(generated_at)));
    ctx.add_line(RULE);
    ctx.blank_line();

    ctx.add_line("Enabled modules:");
    ctx.indent();
    for id in config.enabled_ids() {
        ctx.add_line(&format!("✓ {}", id.definition().name));
    }
    ctx.dedent();
    ctx.blank_line();

    ctx.add_line("Settings:");
    ctx.indent();
    ctx.add_line(&format!("- Minified output: {}", yes_no(config.global.minify_output)));
    ctx.add_line(&format!("- Generated comments: {}", yes_no(config.global.generate_comments)));
    ctx.dedent();
    ctx.blank_line();

    ctx.add_line("This file is generated. Do not edit it by hand.");
    ctx.add_line(RULE);
    ctx.add_line("-->");
    ctx.blank_line();
    ctx.get_output()
}

fn file_footer() -> String {
    let mut ctx = Context::new("  ");
    ctx.blank_line();
    ctx.add_line("<!--");
    ctx.add_line(RULE);
    ctx.add_line("End of file - listskin");
    ctx.add_line(RULE);
    ctx.add("-->");
    ctx.get_output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use listskin_config::BackgroundImageConfig;

    fn background(light: &str, dark: &str) -> ModuleConfig {
        ModuleConfig::BackgroundImage(BackgroundImageConfig {
            enabled: true,
            light_image: light.to_string(),
            dark_image: dark.to_string(),
        })
    }

    #[test]
    fn test_section_with_both_images() {
        let section = BackgroundImageGenerator.head_section(
            &background("https://a.example/l.jpg", "https://a.example/d.jpg"),
            false,
        );
        println!("{}", section);

        assert!(section.starts_with("<style>\n  body {\n"));
        assert!(section.contains("    --light-bg-image: url('https://a.example/l.jpg');"));
        assert!(section.contains("    --dark-bg-image: url('https://a.example/d.jpg');"));
        assert!(section.contains("  .hope-ui-dark {\n    background-image: var(--dark-bg-image);"));
        assert!(section.ends_with("</style>"));
        assert!(!section.contains("/*"));
    }

    #[test]
    fn test_section_omits_unset_image() {
        let section =
            BackgroundImageGenerator.head_section(&background("https://a.example/l.jpg", ""), false);

        assert!(section.contains("--light-bg-image"));
        assert!(!section.contains("--dark-bg-image"));
        assert!(!section.contains(".hope-ui-dark"));
    }

    #[test]
    fn test_section_empty_without_images() {
        assert!(BackgroundImageGenerator.head_section(&background("", ""), true).is_empty());
    }

    #[test]
    fn test_section_comments() {
        let section =
            BackgroundImageGenerator.head_section(&background("", "https://a.example/d.jpg"), true);
        assert!(section.contains("/* Background image module */"));
        assert!(section.contains("/* Dark theme background */"));
    }

    #[test]
    fn test_no_body_section() {
        assert!(BackgroundImageGenerator
            .body_section(&background("https://a.example/l.jpg", ""), true)
            .is_empty());
    }
}
