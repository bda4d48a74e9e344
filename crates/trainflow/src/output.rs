//! Output formatting helpers for the `trainflow` CLI.
//!
//! Provides JSON output and the human-readable step tree used by `show`.

use std::io::{self, Write};

use serde::Serialize;
use trainflow_zwo::{Step, Target, TargetKind, Workout, WorkoutFile};

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Format seconds as `1h05m`, `12m30s` or `45s`.
pub fn format_duration(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    match (h, m, s) {
        (0, 0, s) => format!("{}s", s),
        (0, m, 0) => format!("{}m", m),
        (0, m, s) => format!("{}m{:02}s", m, s),
        (h, m, _) => format!("{}h{:02}m", h, m),
    }
}

/// Format a target as `75% FTP`, `220 W`, `pace 2.5 m/s` or `145 bpm`.
pub fn format_target(target: &Target) -> String {
    let units = target
        .units
        .as_deref()
        .map(|u| format!(" {}", u))
        .unwrap_or_default();
    match target.kind {
        TargetKind::Power if target.is_fraction_of_ftp => {
            format!("{}% FTP", (target.value * 100.0).round())
        }
        TargetKind::Power => format!("{} W{}", target.value, units),
        TargetKind::Pace => format!("pace {}{}", target.value, units),
        TargetKind::HeartRate => format!("{} bpm{}", target.value, units),
    }
}

/// One line describing a step (repeat blocks describe only their header).
pub fn format_step_line(step: &Step) -> String {
    let (duration, cadence, text, intensity) = match step {
        Step::Repeat(block) => {
            return format!(
                "Repeat x{} ({} total)",
                block.repeat_count,
                format_duration(step.duration_seconds())
            );
        }
        Step::Warmup(s) | Step::SteadyState(s) | Step::Cooldown(s) | Step::Rest(s) => (
            s.duration_seconds,
            s.cadence_rpm,
            s.text.as_deref(),
            format!("@ {}", format_target(&s.target)),
        ),
        Step::Ramp(s) => (
            s.duration_seconds,
            s.cadence_rpm,
            s.text.as_deref(),
            format!(
                "{} -> {}",
                format_target(&s.target_start),
                format_target(&s.target_end)
            ),
        ),
        Step::FreeRide(s) => (
            s.duration_seconds,
            s.cadence_rpm,
            s.text.as_deref(),
            s.target
                .as_ref()
                .map(|t| format!("@ {}", format_target(t)))
                .unwrap_or_else(|| "free".to_string()),
        ),
    };

    let mut line = format!(
        "{} {} {}",
        step.tag_name(),
        format_duration(u64::from(duration)),
        intensity
    );
    if let Some(rpm) = cadence {
        line.push_str(&format!(" ({} rpm)", rpm));
    }
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        line.push_str(&format!(" \"{}\"", text));
    }
    line
}

/// Render the step tree of a workout, two spaces per nesting level.
pub fn format_workout_tree(workout: &Workout) -> String {
    let mut out = String::new();
    push_steps(&mut out, &workout.steps, 2);
    out
}

fn push_steps(out: &mut String, steps: &[Step], depth: usize) {
    for step in steps {
        out.push_str(&" ".repeat(depth * 2));
        out.push_str(&format_step_line(step));
        out.push('\n');
        if let Step::Repeat(block) = step {
            push_steps(out, &block.steps, depth + 1);
        }
    }
}

/// Multi-line summary of a workout file.
pub fn format_file_detail(file: &WorkoutFile) -> String {
    let mut out = format!("Name: {}\n", file.name);
    if let Some(author) = &file.author {
        out.push_str(&format!("Author: {}\n", author));
    }
    if let Some(description) = &file.description {
        out.push_str(&format!("Description: {}\n", description));
    }
    out.push_str(&format!("Sport: {}\n", file.sport_type));
    if !file.tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", file.tags.join(", ")));
    }
    out.push_str(&format!("Workouts ({}):\n", file.workouts.len()));
    for workout in &file.workouts {
        let steps: usize = workout.steps.iter().map(Step::step_count).sum();
        out.push_str(&format!(
            "  {} ({}, {} steps)\n",
            workout.name,
            format_duration(workout.duration_seconds()),
            steps
        ));
        out.push_str(&format_workout_tree(workout));
    }
    out
}
