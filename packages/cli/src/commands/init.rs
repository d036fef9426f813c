use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::state::{open_config_store, open_module_store};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use listskin_editor::{KeyValueStore, CONFIG_STORAGE_KEY, MODULES_STORAGE_KEY};
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// State directory
    #[arg(short, long, default_value = ".listskin")]
    pub state_dir: String,

    /// Output directory for generated snippets
    #[arg(short, long, default_value = "dist")]
    pub out_dir: String,

    /// Force overwrite existing config and state
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing listskin project...".bright_blue().bold());

    let config = Config {
        state_dir: args.state_dir.clone(),
        out_dir: args.out_dir.clone(),
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let mut store = open_config_store(cwd)?;
    if args.force || store.storage().get(CONFIG_STORAGE_KEY)?.is_none() {
        store.reset_to_default();
        println!("  {} Saved default configuration", "✓".green());
    }

    let mut modules = open_module_store(cwd)?;
    if args.force || modules.storage().get(MODULES_STORAGE_KEY)?.is_none() {
        modules.reset_to_default();
        println!("  {} Saved default module configuration", "✓".green());
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: listskin preview");
    println!("  2. Adjust with: listskin update '{{\"colors\":{{\"light\":\"...\"}}}}'");
    println!("  3. Run: listskin generate, then paste {}/head.html and body.html", args.out_dir);

    Ok(())
}
