use crate::state::open_module_store;
use anyhow::{anyhow, Result};
use clap::{Subcommand, ValueEnum};
use colored::Colorize;
use listskin_config::{BackgroundImagePatch, GlobalPatch, ModuleConfigPatch, ModuleId};
use std::path::Path;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Debug, Subcommand)]
pub enum ModuleCommand {
    /// List modules and their state
    List,

    /// Enable or disable a module
    Toggle {
        /// Module id, e.g. backgroundImage
        id: ModuleId,
        #[arg(value_enum)]
        state: Switch,
    },

    /// Change a module's settings
    Set {
        /// Module id, e.g. backgroundImage
        id: ModuleId,

        /// Light theme image URL (empty string unsets it)
        #[arg(long)]
        light: Option<String>,

        /// Dark theme image URL (empty string unsets it)
        #[arg(long)]
        dark: Option<String>,
    },

    /// Change output options shared by all modules
    Global {
        /// Wrap output in generated comments
        #[arg(long)]
        comments: Option<bool>,

        /// Minify generated CSS
        #[arg(long)]
        minify: Option<bool>,
    },
}

pub fn module(command: ModuleCommand, cwd: &Path) -> Result<()> {
    let mut store = open_module_store(cwd)?;

    match command {
        ModuleCommand::List => {
            for info in store.modules() {
                let marker = if info.enabled { "✓".green() } else { "✗".red() };
                println!(
                    "{} {} ({}) - {} [{}]",
                    marker,
                    info.name.bold(),
                    info.id,
                    info.description,
                    info.category.dimmed()
                );
            }
            println!();
            println!("{} of {} modules enabled", store.enabled_count(), store.modules().len());
        }
        ModuleCommand::Toggle { id, state } => {
            let enabled = matches!(state, Switch::On);
            store.toggle_module(id, enabled);
            println!(
                "{} {} {}",
                "✓".green(),
                id.definition().name.bold(),
                if enabled { "enabled" } else { "disabled" }
            );
        }
        ModuleCommand::Set { id, light, dark } => {
            let patch = match id {
                ModuleId::BackgroundImage => ModuleConfigPatch::BackgroundImage(BackgroundImagePatch {
                    enabled: None,
                    light_image: light,
                    dark_image: dark,
                }),
            };
            if !store.update_module_config(id, &patch) {
                return Err(anyhow!("Module {} is not configured; toggle it on first", id));
            }
            println!("{} Updated {}", "✓".green(), id.definition().name.bold());
        }
        ModuleCommand::Global { comments, minify } => {
            store.update_global(&GlobalPatch {
                generate_comments: comments,
                minify_output: minify,
            });
            println!("{} Updated global options", "✓".green());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_set() {
        let dir = tempfile::tempdir().unwrap();

        module(
            ModuleCommand::Set {
                id: ModuleId::BackgroundImage,
                light: Some("https://example.com/l.jpg".to_string()),
                dark: Some(String::new()),
            },
            dir.path(),
        )
        .unwrap();
        module(
            ModuleCommand::Toggle {
                id: ModuleId::BackgroundImage,
                state: Switch::Off,
            },
            dir.path(),
        )
        .unwrap();

        let store = open_module_store(dir.path()).unwrap();
        let bg = store
            .config()
            .get(ModuleId::BackgroundImage)
            .and_then(|m| m.as_background_image())
            .unwrap();
        assert!(!bg.enabled);
        assert_eq!(bg.light_image, "https://example.com/l.jpg");
        assert_eq!(bg.dark_image, "");
    }

    #[test]
    fn test_global_options() {
        let dir = tempfile::tempdir().unwrap();
        module(
            ModuleCommand::Global {
                comments: Some(false),
                minify: None,
            },
            dir.path(),
        )
        .unwrap();

        let store = open_module_store(dir.path()).unwrap();
        assert!(!store.config().global.generate_comments);
        assert!(!store.config().global.minify_output);
    }
}
