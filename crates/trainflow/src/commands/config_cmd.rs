//! `trainflow config` -- read and update configuration.
//!
//! `get` and `list` show effective values (file plus environment); `set`
//! edits `.trainflow/config.yaml` only.

use anyhow::{Context, Result};
use trainflow_config::config::{ConfigError, KEYS, set_config_value};

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `trainflow config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    match &args.command {
        ConfigCommands::Get(get_args) => {
            let value = ctx.config()?.get(&get_args.key)?;
            if ctx.json {
                output_json(&serde_json::json!({
                    "key": get_args.key,
                    "value": value,
                }));
            } else {
                println!("{}", value.unwrap_or_default());
            }
        }

        ConfigCommands::Set(set_args) => {
            let config_dir = ctx
                .config_dir
                .as_deref()
                .ok_or(ConfigError::ConfigDirNotFound)?;

            // Only the named key is rewritten: environment overrides are not
            // persisted and a file that fails to load can still be repaired.
            set_config_value(config_dir, &set_args.key, &set_args.value)
                .with_context(|| format!("failed to update config in {}", config_dir.display()))?;

            if ctx.json {
                output_json(&serde_json::json!({
                    "key": set_args.key,
                    "value": set_args.value,
                }));
            } else if !ctx.quiet {
                println!("Set {} = {}", set_args.key, set_args.value);
            }
        }

        ConfigCommands::List => {
            let config = ctx.config()?;
            if ctx.json {
                output_json(config);
            } else {
                for key in KEYS {
                    let value = config.get(key)?.unwrap_or_default();
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    Ok(())
}
