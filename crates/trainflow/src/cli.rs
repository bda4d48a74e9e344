//! Clap CLI definitions for the `trainflow` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// trainflow -- structured workout file toolkit.
///
/// Inspect, validate, normalize and create `.zwo` interval workout files.
#[derive(Parser, Debug)]
#[command(
    name = "trainflow",
    about = "Structured workout file toolkit",
    long_about = "Inspect, validate, normalize and create .zwo interval workout files.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Configuration directory (default: auto-discover .trainflow/).
    #[arg(long, global = true, env = "TRAINFLOW_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a workout file's metadata and step tree.
    #[command(alias = "view")]
    Show(ShowArgs),

    /// Validate one or more workout files.
    Check(CheckArgs),

    /// Parse and re-serialize a workout file in canonical form.
    Fmt(FmtArgs),

    /// Create a new workout file from a skeleton.
    New(NewArgs),

    /// Initialize a .trainflow configuration directory here.
    Init(InitArgs),

    /// Manage configuration (get/set/list).
    Config(ConfigArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

/// Arguments for `trainflow show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Workout file to show.
    pub file: PathBuf,
}

/// Arguments for `trainflow check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Workout files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for `trainflow fmt`.
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Workout file to format.
    pub file: PathBuf,

    /// Rewrite the file in place.
    #[arg(short = 'w', long, conflicts_with = "output")]
    pub write: bool,

    /// Write to this file or directory instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `trainflow new`.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Name of the workout file (also used for its single workout).
    pub name: String,

    /// Author (default: `author` from config).
    #[arg(long)]
    pub author: Option<String>,

    /// Description.
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Sport type (default: `sport-type` from config).
    #[arg(long)]
    pub sport: Option<String>,

    /// Tag to add; repeatable, added after the configured default tags.
    #[arg(short = 't', long = "tag")]
    pub tags: Vec<String>,

    /// Destination file or directory (default: `output-dir` from config,
    /// then the current directory).
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `trainflow init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file with defaults.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `trainflow config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective value of a key.
    Get(ConfigGetArgs),
    /// Set a key in .trainflow/config.yaml.
    Set(ConfigSetArgs),
    /// List all effective values.
    List,
}

/// Arguments for `trainflow config get`.
#[derive(Args, Debug)]
pub struct ConfigGetArgs {
    /// Configuration key (e.g. `indent`).
    pub key: String,
}

/// Arguments for `trainflow config set`.
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Configuration key (e.g. `author`).
    pub key: String,
    /// New value; empty clears optional keys.
    pub value: String,
}

/// Arguments for `trainflow completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fmt_write_conflicts_with_output() {
        let result = Cli::try_parse_from(["trainflow", "fmt", "a.zwo", "-w", "-o", "b.zwo"]);
        assert!(result.is_err());
    }

    #[test]
    fn new_collects_repeated_tags() {
        let cli = Cli::try_parse_from(["trainflow", "new", "Plan", "-t", "a", "--tag", "b"]).unwrap();
        match cli.command {
            Some(Commands::New(args)) => assert_eq!(args.tags, vec!["a", "b"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn completion_takes_shell_name() {
        let cli = Cli::try_parse_from(["trainflow", "completion", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completion(CompletionArgs { shell: Shell::Zsh }))
        ));
        assert!(Cli::try_parse_from(["trainflow", "completion", "tcsh"]).is_err());
    }
}
