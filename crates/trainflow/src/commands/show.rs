//! `trainflow show` -- print a workout file's metadata and step tree.

use anyhow::{Context, Result};

use crate::cli::ShowArgs;
use crate::context::RuntimeContext;
use crate::output::{format_file_detail, output_json};

/// Execute the `trainflow show` command.
pub fn run(ctx: &RuntimeContext, args: &ShowArgs) -> Result<()> {
    let file = trainflow_zwo::load(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    if ctx.json {
        output_json(&file);
    } else {
        print!("{}", format_file_detail(&file));
    }
    Ok(())
}
