//! Workout data model: targets, steps, repeat groups, workouts and files.
//!
//! The model is plain data. Ramp targets of different kinds can be built
//! freely; consistency is checked when a tree is parsed or serialized.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name given to a file whose `<name>` element is absent.
pub const DEFAULT_FILE_NAME: &str = "Untitled";

/// Name given to a `<workout>` without a `name` attribute.
pub const DEFAULT_WORKOUT_NAME: &str = "Untitled Workout";

/// Sport type used when `<sportType>` is absent.
pub const DEFAULT_SPORT_TYPE: &str = "bike";

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_sport_type() -> String {
    DEFAULT_SPORT_TYPE.to_string()
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// What a target measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Power,
    Pace,
    HeartRate,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Power => "power",
            TargetKind::Pace => "pace",
            TargetKind::HeartRate => "heart_rate",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single numeric intensity target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub kind: TargetKind,
    pub value: f64,

    /// Set for power targets at or below 1.0, which read as a fraction of
    /// the athlete's FTP rather than absolute watts.
    pub is_fraction_of_ftp: bool,

    /// Free-form units hint (e.g. `m/s` for pace).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl Target {
    /// Build a target, deriving the FTP-fraction flag from kind and value.
    pub fn new(kind: TargetKind, value: f64) -> Self {
        Self {
            kind,
            value,
            is_fraction_of_ftp: kind == TargetKind::Power && value <= 1.0,
            units: None,
        }
    }

    pub fn power(value: f64) -> Self {
        Self::new(TargetKind::Power, value)
    }

    pub fn pace(value: f64) -> Self {
        Self::new(TargetKind::Pace, value)
    }

    pub fn heart_rate(value: f64) -> Self {
        Self::new(TargetKind::HeartRate, value)
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// A timed step with one target: the shape shared by warmup, steady state,
/// cooldown and rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalStep {
    pub duration_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_rpm: Option<u32>,
    /// On-screen text overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub target: Target,
}

impl IntervalStep {
    pub fn new(duration_seconds: u32, target: Target) -> Self {
        Self {
            duration_seconds,
            cadence_rpm: None,
            text: None,
            target,
        }
    }

    pub fn with_cadence(mut self, rpm: u32) -> Self {
        self.cadence_rpm = Some(rpm);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A linear transition from `target_start` to `target_end`.
///
/// Both ends are expected to share a [`TargetKind`]; the writer rejects a
/// ramp where they differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampStep {
    pub duration_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_rpm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub target_start: Target,
    pub target_end: Target,
}

impl RampStep {
    pub fn new(duration_seconds: u32, target_start: Target, target_end: Target) -> Self {
        Self {
            duration_seconds,
            cadence_rpm: None,
            text: None,
            target_start,
            target_end,
        }
    }

    pub fn with_cadence(mut self, rpm: u32) -> Self {
        self.cadence_rpm = Some(rpm);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Unstructured riding. No target means unconstrained effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeRideStep {
    pub duration_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_rpm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

impl FreeRideStep {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration_seconds,
            cadence_rpm: None,
            text: None,
            target: None,
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_cadence(mut self, rpm: u32) -> Self {
        self.cadence_rpm = Some(rpm);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A group of steps performed `repeat_count` times. Children may be repeat
/// blocks themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatBlock {
    pub repeat_count: u32,
    pub steps: Vec<Step>,
}

impl RepeatBlock {
    pub fn new(repeat_count: u32, steps: Vec<Step>) -> Self {
        Self {
            repeat_count,
            steps,
        }
    }
}

/// One element of a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    Warmup(IntervalStep),
    SteadyState(IntervalStep),
    Cooldown(IntervalStep),
    Rest(IntervalStep),
    Ramp(RampStep),
    FreeRide(FreeRideStep),
    Repeat(RepeatBlock),
}

impl Step {
    /// Element name used for this step in the markup.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Step::Warmup(_) => "Warmup",
            Step::SteadyState(_) => "SteadyState",
            Step::Cooldown(_) => "Cooldown",
            Step::Rest(_) => "Rest",
            Step::Ramp(_) => "Ramp",
            Step::FreeRide(_) => "FreeRide",
            Step::Repeat(_) => "Repeat",
        }
    }

    /// Wall-clock length in seconds, with repeat blocks expanded. Saturates
    /// at `u64::MAX` for absurd repeat counts.
    pub fn duration_seconds(&self) -> u64 {
        match self {
            Step::Warmup(s) | Step::SteadyState(s) | Step::Cooldown(s) | Step::Rest(s) => {
                u64::from(s.duration_seconds)
            }
            Step::Ramp(s) => u64::from(s.duration_seconds),
            Step::FreeRide(s) => u64::from(s.duration_seconds),
            Step::Repeat(block) => {
                let once = block
                    .steps
                    .iter()
                    .map(Step::duration_seconds)
                    .fold(0, u64::saturating_add);
                once.saturating_mul(u64::from(block.repeat_count))
            }
        }
    }

    /// Number of timed steps this expands to once repeats are unrolled.
    pub fn step_count(&self) -> usize {
        match self {
            Step::Repeat(block) => {
                let once = block
                    .steps
                    .iter()
                    .map(Step::step_count)
                    .fold(0, usize::saturating_add);
                let count = usize::try_from(block.repeat_count).unwrap_or(usize::MAX);
                once.saturating_mul(count)
            }
            _ => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Workouts and files
// ---------------------------------------------------------------------------

/// A named session: an ordered list of top-level steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Workout {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Total length in seconds; saturates at `u64::MAX`.
    pub fn duration_seconds(&self) -> u64 {
        self.steps
            .iter()
            .map(Step::duration_seconds)
            .fold(0, u64::saturating_add)
    }
}

/// Root of a workout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default = "default_file_name")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default = "default_sport_type")]
    pub sport_type: String,

    /// Free-text tags in insertion order. Use [`WorkoutFile::add_tag`] to
    /// keep them trimmed and unique.
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub workouts: Vec<Workout>,
}

impl Default for WorkoutFile {
    fn default() -> Self {
        Self {
            author: None,
            name: default_file_name(),
            description: None,
            sport_type: default_sport_type(),
            tags: Vec::new(),
            workouts: Vec::new(),
        }
    }
}

impl WorkoutFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a tag after trimming it. Empty and already-present tags are
    /// ignored; returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Timed steps across all workouts, with repeats unrolled.
    pub fn total_steps(&self) -> usize {
        self.workouts
            .iter()
            .flat_map(|w| w.steps.iter())
            .map(Step::step_count)
            .fold(0, usize::saturating_add)
    }
}
