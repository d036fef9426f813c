mod commands;
mod config;
mod state;

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    export, generate, import, init, module, preset, preview, update, validate, ExportArgs,
    GenerateArgs, ImportArgs, InitArgs, ModuleCommand, PresetCommand, PreviewArgs, UpdateArgs,
    ValidateArgs,
};
use tracing::Level;

/// Listskin - theme generator for file-listing sites
#[derive(Parser, Debug)]
#[command(name = "listskin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a listskin project in the current directory
    Init(InitArgs),

    /// Render head.html and body.html
    Generate(GenerateArgs),

    /// Show a summary of the configuration
    Preview(PreviewArgs),

    /// Check the configuration
    Validate(ValidateArgs),

    /// Print the configuration as JSON
    Export(ExportArgs),

    /// Replace the configuration with a JSON file
    Import(ImportArgs),

    /// Merge a partial JSON configuration
    Update(UpdateArgs),

    /// Built-in presets
    Preset {
        #[command(subcommand)]
        command: PresetCommand,
    },

    /// Beautification modules
    Module {
        #[command(subcommand)]
        command: ModuleCommand,
    },
}

fn run(command: Command, cwd: &Path) -> Result<()> {
    match command {
        Command::Init(args) => init(args, cwd),
        Command::Generate(args) => generate(args, cwd),
        Command::Preview(args) => preview(args, cwd),
        Command::Validate(args) => validate(args, cwd),
        Command::Export(args) => export(args, cwd),
        Command::Import(args) => import(args, cwd),
        Command::Update(args) => update(args, cwd),
        Command::Preset { command } => preset(command, cwd),
        Command::Module { command } => module(command, cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| run(cli.command, &cwd));

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
