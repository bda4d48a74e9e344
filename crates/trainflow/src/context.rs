//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: global flags,
//! the discovered `.trainflow/` directory, and the effective configuration.
//! A configuration that fails to load does not stop commands that never read
//! it (`init`, `config set`, `version`, `completion`); the others report the
//! error through [`RuntimeContext::config`].

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use tracing::{debug, warn};
use trainflow_config::config::{TrainflowConfig, load_effective_config};
use trainflow_config::project_dir::find_config_dir;
use trainflow_zwo::WriteOptions;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Resolved `.trainflow/` directory, if one exists.
    pub config_dir: Option<PathBuf>,

    /// Effective configuration (defaults, file, environment), or the
    /// rendered load error.
    config: std::result::Result<TrainflowConfig, String>,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// The config directory comes from `--config-dir` / `TRAINFLOW_DIR`, or
    /// is discovered by walking up from the current directory. Without one,
    /// only defaults and environment overrides apply.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        let config_dir = match &global.config_dir {
            Some(dir) => Some(dir.clone()),
            None => env::current_dir().ok().and_then(|cwd| find_config_dir(&cwd)),
        };

        let config = load_effective_config(config_dir.as_deref()).map_err(|e| {
            let source = match &config_dir {
                Some(dir) => format!("failed to load config from {}", dir.display()),
                None => "failed to load config from environment".to_string(),
            };
            let message = format!("{:#}", anyhow::Error::new(e).context(source));
            warn!(error = %message, "falling back to default configuration");
            message
        });

        let json = global.json || config.as_ref().is_ok_and(|c| c.json);
        debug!(config_dir = ?config_dir, json, "resolved runtime context");

        Self {
            config_dir,
            config,
            json,
            quiet: global.quiet,
        }
    }

    /// Context over an already loaded configuration.
    #[cfg(test)]
    pub fn with_config(config: TrainflowConfig) -> Self {
        Self {
            config_dir: None,
            json: config.json,
            config: Ok(config),
            quiet: true,
        }
    }

    /// The effective configuration.
    ///
    /// # Errors
    ///
    /// Fails if the config file or a `TRAINFLOW_*` variable held an invalid
    /// value.
    pub fn config(&self) -> Result<&TrainflowConfig> {
        self.config.as_ref().map_err(|message| {
            anyhow!(
                "{}\nHint: repair it with 'trainflow config set <key> <value>' or 'trainflow init --force'",
                message
            )
        })
    }

    /// Writer settings derived from the configuration.
    pub fn write_options(&self) -> Result<WriteOptions> {
        let config = self.config()?;
        Ok(WriteOptions {
            indent: config.indent,
            xml_declaration: config.xml_declaration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_for(dir: &std::path::Path) -> GlobalArgs {
        GlobalArgs {
            config_dir: Some(dir.to_path_buf()),
            json: false,
            verbose: false,
            quiet: true,
        }
    }

    #[test]
    fn explicit_config_dir_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.yaml"),
            "indent: 2\nxml-declaration: true\njson: true\n",
        )
        .unwrap();

        let ctx = RuntimeContext::from_global_args(&global_for(dir.path()));
        assert!(ctx.json);
        assert!(ctx.quiet);
        assert_eq!(
            ctx.write_options().unwrap(),
            WriteOptions {
                indent: 2,
                xml_declaration: true
            }
        );
    }

    #[test]
    fn invalid_config_is_deferred_to_readers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "indent: wide\njson: true\n").unwrap();

        let ctx = RuntimeContext::from_global_args(&global_for(dir.path()));
        assert_eq!(ctx.config_dir.as_deref(), Some(dir.path()));
        assert!(!ctx.json);

        let err = ctx.write_options().unwrap_err().to_string();
        assert!(err.contains("failed to load config from"), "{err}");
        assert!(err.contains("trainflow config set"), "{err}");
    }
}
