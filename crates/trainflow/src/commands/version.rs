//! `trainflow version` -- print the tool version and the workout format it
//! reads and writes.

use anyhow::Result;
use trainflow_zwo::parser::ROOT_TAG;

use crate::context::RuntimeContext;
use crate::output::output_json;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File extension handled by `show`, `check`, `fmt` and `new`.
const FORMAT: &str = "zwo";

/// Execute the `trainflow version` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let platform = format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH);

    if ctx.json {
        output_json(&serde_json::json!({
            "version": VERSION,
            "format": FORMAT,
            "root_element": ROOT_TAG,
            "platform": platform,
        }));
    } else {
        println!("trainflow version {} (.{} <{}>) {}", VERSION, FORMAT, ROOT_TAG, platform);
    }
    Ok(())
}
