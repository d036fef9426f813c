use crate::config::Config;
use crate::state::{open_config_store, open_module_store};
use anyhow::{anyhow, Result};
use chrono::Local;
use clap::Args;
use colored::Colorize;
use listskin_compiler::{
    render, render_modules, stats, validate_config, validate_module_config, FileStats,
    GeneratedFiles, ValidationReport, BODY_FILE_NAME, HEAD_FILE_NAME,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Render the modular configuration
    #[arg(short, long)]
    pub modular: bool,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn generate(args: GenerateArgs, cwd: &Path) -> Result<()> {
    let now = Local::now();

    let (files, stats) = if args.modular {
        let store = open_module_store(cwd)?;
        ensure_valid(validate_module_config(store.config()))?;
        let output = render_modules(store.config(), &now);
        (output.files, output.stats)
    } else {
        let store = open_config_store(cwd)?;
        ensure_valid(validate_config(store.config()))?;
        let files = render(store.config(), &now);
        let stats = stats(&files);
        (files, stats)
    };

    if args.stdout {
        println!("<!-- {} -->", HEAD_FILE_NAME);
        println!("{}", files.head_content);
        println!();
        println!("<!-- {} -->", BODY_FILE_NAME);
        println!("{}", files.body_content);
        return Ok(());
    }

    println!("{}", "🔨 Generating snippets...".bright_blue().bold());

    let out_dir = match &args.out_dir {
        Some(dir) => cwd.join(dir),
        None => Config::load(cwd)?.out_path(cwd),
    };
    let written = write_files(&files, &out_dir)?;

    for (path, size) in written.iter().zip([&stats.head_size, &stats.body_size]) {
        println!("  {} {} ({})", "✓".green(), path.display(), size);
    }

    println!();
    print_stats(&stats);

    Ok(())
}

fn ensure_valid(report: ValidationReport) -> Result<()> {
    if report.valid {
        return Ok(());
    }

    for error in &report.errors {
        eprintln!("  {} {}", "✗".red(), error);
    }
    Err(anyhow!(
        "Configuration is invalid ({} problems); nothing was generated",
        report.errors.len()
    ))
}

fn write_files(files: &GeneratedFiles, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let head_path = out_dir.join(HEAD_FILE_NAME);
    let body_path = out_dir.join(BODY_FILE_NAME);
    fs::write(&head_path, &files.head_content)?;
    fs::write(&body_path, &files.body_content)?;

    Ok(vec![head_path, body_path])
}

fn print_stats(stats: &FileStats) {
    println!(
        "{} Generated {} files, {} ({} lines)",
        "✅".green(),
        stats.file_count,
        stats.total_size,
        stats.total_lines
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();

        generate(
            GenerateArgs {
                modular: false,
                stdout: false,
                out_dir: Some("out".to_string()),
            },
            dir.path(),
        )
        .unwrap();

        let head = fs::read_to_string(dir.path().join("out").join(HEAD_FILE_NAME)).unwrap();
        let body = fs::read_to_string(dir.path().join("out").join(BODY_FILE_NAME)).unwrap();
        assert!(head.contains("<style>"));
        assert!(body.contains("const DEFAULT_CONFIG"));
    }

    #[test]
    fn test_generate_refuses_invalid_module_config() {
        let dir = tempfile::tempdir().unwrap();
        open_module_store(dir.path()).unwrap().disable_all_modules();

        let result = generate(
            GenerateArgs {
                modular: true,
                stdout: false,
                out_dir: None,
            },
            dir.path(),
        );

        assert!(result.is_err());
        assert!(!dir.path().join("dist").exists());
    }
}
