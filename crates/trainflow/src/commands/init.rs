//! `trainflow init` -- create `.trainflow/config.yaml` in the current directory.

use anyhow::{Context, Result, bail};
use trainflow_config::config::{CONFIG_FILE_NAME, TrainflowConfig, save_config};
use trainflow_config::project_dir::ensure_config_dir;

use crate::cli::InitArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `trainflow init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let config_dir = ensure_config_dir(&cwd)
        .with_context(|| format!("failed to create .trainflow in {}", cwd.display()))?;
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        bail!(
            "{} already exists\nHint: use --force to reset it to defaults",
            config_path.display()
        );
    }

    save_config(&config_dir, &TrainflowConfig::default())
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    if ctx.json {
        output_json(&serde_json::json!({ "path": config_path.display().to_string() }));
    } else if !ctx.quiet {
        println!("Initialized trainflow config at {}", config_path.display());
    }
    Ok(())
}
