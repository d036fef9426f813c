use crate::state::open_config_store;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::Path;

#[derive(Debug, Subcommand)]
pub enum PresetCommand {
    /// List the built-in presets
    List,

    /// Replace the configuration with a preset
    Apply {
        /// Exact preset name, e.g. "High Contrast"
        name: String,
    },
}

pub fn preset(command: PresetCommand, cwd: &Path) -> Result<()> {
    let mut store = open_config_store(cwd)?;

    match command {
        PresetCommand::List => {
            for preset in store.presets() {
                let marker = if &preset.config == store.config() {
                    "●".green()
                } else {
                    "○".dimmed()
                };
                println!("{} {} - {}", marker, preset.name.bold(), preset.description);
            }
            Ok(())
        }
        PresetCommand::Apply { name } => {
            if !store.apply_preset(&name) {
                return Err(anyhow!("Unknown preset: {}", name));
            }
            println!("{} Applied preset {}", "✓".green(), name.bold());
            Ok(())
        }
    }
}
