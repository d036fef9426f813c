use crate::state::open_config_store;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use listskin_config::ConfigPatch;
use std::path::Path;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Partial configuration as JSON, e.g. '{"observer":{"throttleDelay":32}}'
    pub patch: String,
}

pub fn update(args: UpdateArgs, cwd: &Path) -> Result<()> {
    let patch: ConfigPatch =
        serde_json::from_str(&args.patch).context("Patch is not a valid partial configuration")?;

    if patch.is_empty() {
        println!("{} Nothing to update", "⚠️".yellow());
        return Ok(());
    }

    let mut store = open_config_store(cwd)?;
    store.update(&patch);
    println!("{} Configuration updated", "✓".green());

    if !store.is_config_valid() {
        println!(
            "{} The configuration is now invalid; run {} for details",
            "⚠️".yellow(),
            "listskin validate".bright_white()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_merges_patch() {
        let dir = tempfile::tempdir().unwrap();

        update(
            UpdateArgs {
                patch: r#"{"paths":{"excluded":[]},"debug":true}"#.to_string(),
            },
            dir.path(),
        )
        .unwrap();

        let store = open_config_store(dir.path()).unwrap();
        assert!(store.config().paths.excluded.is_empty());
        assert!(store.config().debug);
        assert_eq!(store.config().observer.throttle_delay, 16);
    }

    #[test]
    fn test_update_rejects_bad_patch() {
        let dir = tempfile::tempdir().unwrap();
        let result = update(
            UpdateArgs {
                patch: r#"{"observer":{"throttleDelay":"fast"}}"#.to_string(),
            },
            dir.path(),
        );
        assert!(result.is_err());
    }
}
