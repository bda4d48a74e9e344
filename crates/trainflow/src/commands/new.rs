//! `trainflow new` -- create a workout file from a skeleton.
//!
//! The skeleton holds a single workout named after the file: a warmup, a
//! steady-state block and a cooldown, all as fractions of FTP.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use trainflow_config::config::TrainflowConfig;
use trainflow_zwo::writer::file_slug;
use trainflow_zwo::{IntervalStep, Step, Target, Workout, WorkoutFile};

use crate::cli::NewArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Build the skeleton file described by `args`, filling gaps from config.
pub fn build_skeleton(config: &TrainflowConfig, args: &NewArgs) -> WorkoutFile {
    let mut file = WorkoutFile::new(args.name.trim());
    file.author = args
        .author
        .clone()
        .or_else(|| config.author.clone())
        .filter(|a| !a.trim().is_empty());
    file.description = args.description.clone();
    file.sport_type = args
        .sport
        .clone()
        .unwrap_or_else(|| config.sport_type.clone());

    for tag in config.default_tags().iter().chain(args.tags.iter()) {
        file.add_tag(tag);
    }

    file.workouts.push(Workout::new(
        file.name.clone(),
        vec![
            Step::Warmup(IntervalStep::new(600, Target::power(0.5))),
            Step::SteadyState(IntervalStep::new(1200, Target::power(0.75))),
            Step::Cooldown(IntervalStep::new(300, Target::power(0.5))),
        ],
    ));
    file
}

/// Execute the `trainflow new` command.
pub fn run(ctx: &RuntimeContext, args: &NewArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        bail!("workout name cannot be empty");
    }
    let config = ctx.config()?;
    let file = build_skeleton(config, args);

    let destination = match (&args.output, &config.output_dir) {
        (Some(output), _) => output.clone(),
        (None, Some(dir)) => dir.clone(),
        (None, None) => std::env::current_dir().context("failed to get current directory")?,
    };

    let target = if destination.is_dir() {
        destination.join(format!("{}.zwo", file_slug(&file.name)))
    } else {
        destination.clone()
    };
    if target.exists() && !args.force {
        bail!(
            "{} already exists\nHint: use --force to overwrite it",
            target.display()
        );
    }
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let path: PathBuf = trainflow_zwo::save_with(&file, &target, &ctx.write_options()?)
        .with_context(|| format!("failed to write {}", target.display()))?;

    if ctx.json {
        output_json(&serde_json::json!({
            "path": path.display().to_string(),
            "name": file.name,
        }));
    } else if !ctx.quiet {
        println!("Created {}", path.display());
    }
    Ok(())
}
