//! `trainflow fmt` -- normalize a workout file.
//!
//! Parsing repairs bare ampersands and canonicalizes tag spellings
//! (`Freeride` becomes `FreeRide`); serializing applies the configured
//! indentation and declaration settings.

use anyhow::{Context, Result};

use crate::cli::FmtArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `trainflow fmt` command.
pub fn run(ctx: &RuntimeContext, args: &FmtArgs) -> Result<()> {
    let file = trainflow_zwo::load(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let options = ctx.write_options()?;

    let destination = match (&args.output, args.write) {
        (Some(output), _) => output.clone(),
        (None, true) => args.file.clone(),
        (None, false) => {
            let xml = trainflow_zwo::serialize_with(&file, &options)
                .with_context(|| format!("cannot format {}", args.file.display()))?;
            print!("{}", xml);
            return Ok(());
        }
    };

    let path = trainflow_zwo::save_with(&file, &destination, &options)
        .with_context(|| format!("failed to write {}", destination.display()))?;

    if ctx.json {
        output_json(&serde_json::json!({
            "path": path.display().to_string(),
            "workouts": file.workouts.len(),
        }));
    } else if !ctx.quiet {
        println!("Formatted {} -> {}", args.file.display(), path.display());
    }
    Ok(())
}
