use crate::state::{open_config_store, open_module_store};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use listskin_editor::EditorError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file previously produced by `listskin export`
    pub file: PathBuf,

    /// Import into the modular configuration
    #[arg(short, long)]
    pub modular: bool,
}

pub fn import(args: ImportArgs, cwd: &Path) -> Result<()> {
    let text = fs::read_to_string(cwd.join(&args.file))?;

    let result = if args.modular {
        open_module_store(cwd)?.import_config(&text)
    } else {
        open_config_store(cwd)?.import_config(&text)
    };

    match result {
        Ok(()) => {
            println!("{} Imported {}", "✓".green(), args.file.display());
            Ok(())
        }
        Err(err) => Err(rejected(err)),
    }
}

fn rejected(err: EditorError) -> anyhow::Error {
    if err.is_parse_error() {
        return anyhow!("Not valid JSON: {}", err);
    }

    for reason in err.reasons() {
        eprintln!("  {} {}", "✗".red(), reason);
    }
    anyhow!("Configuration rejected; nothing was changed")
}
