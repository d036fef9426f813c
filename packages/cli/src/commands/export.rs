use crate::state::{open_config_store, open_module_store};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export the modular configuration
    #[arg(short, long)]
    pub modular: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let json = if args.modular {
        open_module_store(cwd)?.export_config()?
    } else {
        open_config_store(cwd)?.export_config()?
    };

    match args.output {
        Some(path) => {
            let path = cwd.join(path);
            fs::write(&path, &json)?;
            eprintln!("{} Exported to {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
