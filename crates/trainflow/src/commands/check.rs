//! `trainflow check` -- validate workout files.
//!
//! A file is valid when it parses. Every parsed model also serializes: pair
//! resolution gives both ends of a ramp the same kind, and heart-rate
//! targets are never read.

use std::path::Path;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::cli::CheckArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Outcome for a single file.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub path: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workouts: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validate one file without failing the whole run.
pub fn check_file(path: &Path) -> CheckReport {
    match trainflow_zwo::load(path).map(|file| file.workouts.len()) {
        Ok(workouts) => CheckReport {
            path: path.display().to_string(),
            ok: true,
            workouts: Some(workouts),
            error: None,
        },
        Err(e) => CheckReport {
            path: path.display().to_string(),
            ok: false,
            workouts: None,
            error: Some(e.to_string()),
        },
    }
}

/// Execute the `trainflow check` command.
pub fn run(ctx: &RuntimeContext, args: &CheckArgs) -> Result<()> {
    let reports: Vec<CheckReport> = args.files.iter().map(|p| check_file(p)).collect();
    let failed = reports.iter().filter(|r| !r.ok).count();

    if ctx.json {
        output_json(&reports);
    } else {
        for report in &reports {
            match (&report.error, report.workouts) {
                (Some(error), _) => eprintln!("FAIL {}: {}", report.path, error),
                (None, Some(n)) if !ctx.quiet => {
                    println!("ok   {} ({} workouts)", report.path, n)
                }
                _ => {}
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files failed validation", failed, reports.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_success_and_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.zwo");
        let bad = dir.path().join("bad.zwo");
        std::fs::write(
            &good,
            r#"<workout_file><name>g</name><workout name="a"><Rest Duration="60" Power="0.5"/></workout></workout_file>"#,
        )
        .unwrap();
        std::fs::write(&bad, "<badroot/>").unwrap();

        let ok = check_file(&good);
        assert!(ok.ok);
        assert_eq!(ok.workouts, Some(1));

        let failed = check_file(&bad);
        assert!(!failed.ok);
        assert!(failed.error.unwrap().contains("workout_file"));
    }
}
