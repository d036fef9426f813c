use crate::state::{open_config_store, open_module_store};
use anyhow::Result;
use clap::Args;
use listskin_compiler::{config_preview, module_config_preview};
use std::path::Path;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Preview the modular configuration
    #[arg(short, long)]
    pub modular: bool,
}

pub fn preview(args: PreviewArgs, cwd: &Path) -> Result<()> {
    let text = if args.modular {
        module_config_preview(open_module_store(cwd)?.config())
    } else {
        config_preview(open_config_store(cwd)?.config())
    };

    println!("{}", text);
    Ok(())
}
