use crate::state::{open_config_store, open_module_store};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use listskin_compiler::{validate_config, validate_module_config};
use std::path::Path;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Validate the modular configuration
    #[arg(short, long)]
    pub modular: bool,
}

pub fn validate(args: ValidateArgs, cwd: &Path) -> Result<()> {
    let report = if args.modular {
        validate_module_config(open_module_store(cwd)?.config())
    } else {
        validate_config(open_config_store(cwd)?.config())
    };

    if report.valid {
        println!("{} Configuration is valid", "✓".green());
        return Ok(());
    }

    for error in &report.errors {
        println!("  {} {}", "✗".red(), error);
    }
    Err(anyhow!("Found {} problems", report.errors.len()))
}
