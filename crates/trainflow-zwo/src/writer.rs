//! Serialize a [`WorkoutFile`] back to `.zwo` markup.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::FormatError;
use crate::parser::ROOT_TAG;
use crate::types::{RampStep, Step, Target, TargetKind, Workout, WorkoutFile};

/// Cosmetic output settings. None of them affect what a parser reads back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level; 0 puts every element on its own line
    /// without indentation.
    pub indent: usize,

    /// Prefix the document with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            xml_declaration: false,
        }
    }
}

type Attrs = Vec<(&'static str, String)>;

/// Serialize with default [`WriteOptions`].
///
/// # Errors
///
/// Returns [`FormatError::RampKindMismatch`] if any ramp, at any depth, mixes
/// target kinds or uses heart-rate targets.
pub fn serialize(file: &WorkoutFile) -> Result<String, FormatError> {
    serialize_with(file, &WriteOptions::default())
}

/// Serialize with explicit [`WriteOptions`].
pub fn serialize_with(file: &WorkoutFile, options: &WriteOptions) -> Result<String, FormatError> {
    debug!(workouts = file.workouts.len(), "serializing workout file");
    let mut w = XmlWriter::new(options.indent);
    if options.xml_declaration {
        w.out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    w.open(ROOT_TAG, &[]);
    if let Some(author) = file.author.as_deref().filter(|a| !a.is_empty()) {
        w.text_element("author", author);
    }
    w.text_element("name", &file.name);
    if let Some(description) = file.description.as_deref().filter(|d| !d.is_empty()) {
        w.text_element("description", description);
    }
    w.text_element("sportType", &file.sport_type);
    if !file.tags.is_empty() {
        w.text_element("tags", &file.tags.join(", "));
    }

    for workout in &file.workouts {
        write_workout(&mut w, workout)?;
    }
    w.close(ROOT_TAG);

    Ok(w.out)
}

/// Serialize with default options and write the result to `destination`.
pub fn save(file: &WorkoutFile, destination: &Path) -> Result<PathBuf, FormatError> {
    save_with(file, destination, &WriteOptions::default())
}

/// Serialize and write to `destination`, returning the path written.
///
/// When `destination` is an existing directory the file is placed inside it
/// as `<slug>.zwo`, the slug derived from the file name. Nothing is written
/// if serialization fails.
pub fn save_with(
    file: &WorkoutFile,
    destination: &Path,
    options: &WriteOptions,
) -> Result<PathBuf, FormatError> {
    let xml = serialize_with(file, options)
        .inspect_err(|e| warn!(error = %e, "refusing to save invalid workout file"))?;

    let path = if destination.is_dir() {
        destination.join(format!("{}.zwo", file_slug(&file.name)))
    } else {
        destination.to_path_buf()
    };
    std::fs::write(&path, xml)
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "failed to write workout file"))?;

    info!(path = %path.display(), workouts = file.workouts.len(), "saved workout file");
    Ok(path)
}

/// Lowercase ASCII file stem for a workout name: runs of anything that is
/// not alphanumeric collapse to a single `-`.
pub fn file_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug.to_string()
    }
}

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

fn write_workout(w: &mut XmlWriter, workout: &Workout) -> Result<(), FormatError> {
    let attrs = vec![("name", workout.name.clone())];
    if workout.steps.is_empty() {
        w.empty("workout", &attrs);
        return Ok(());
    }
    w.open("workout", &attrs);
    for step in &workout.steps {
        write_step(w, step)?;
    }
    w.close("workout");
    Ok(())
}

fn write_step(w: &mut XmlWriter, step: &Step) -> Result<(), FormatError> {
    let tag = step.tag_name();
    let attrs = match step {
        Step::Repeat(block) => {
            let attrs = vec![("Repeat", block.repeat_count.to_string())];
            if block.steps.is_empty() {
                w.empty(tag, &attrs);
                return Ok(());
            }
            w.open(tag, &attrs);
            for child in &block.steps {
                write_step(w, child)?;
            }
            w.close(tag);
            return Ok(());
        }
        Step::Warmup(s) | Step::SteadyState(s) | Step::Cooldown(s) | Step::Rest(s) => {
            let mut attrs = common_attrs(s.duration_seconds, s.cadence_rpm, s.text.as_deref());
            attrs.extend(target_attrs(&s.target));
            attrs
        }
        Step::Ramp(s) => ramp_attrs(s)?,
        Step::FreeRide(s) => {
            let mut attrs = common_attrs(s.duration_seconds, s.cadence_rpm, s.text.as_deref());
            if let Some(target) = &s.target {
                attrs.extend(target_attrs(target));
            }
            attrs
        }
    };
    w.empty(tag, &attrs);
    Ok(())
}

fn common_attrs(duration_seconds: u32, cadence_rpm: Option<u32>, text: Option<&str>) -> Attrs {
    let mut attrs = vec![("Duration", duration_seconds.to_string())];
    if let Some(cadence) = cadence_rpm {
        attrs.push(("Cadence", cadence.to_string()));
    }
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        attrs.push(("Text", text.to_string()));
    }
    attrs
}

/// Single-target attributes. Heart-rate targets have no attribute of their
/// own in the format and are written as `Power`.
fn target_attrs(target: &Target) -> Attrs {
    let name = match target.kind {
        TargetKind::Power | TargetKind::HeartRate => "Power",
        TargetKind::Pace => "Pace",
    };
    let mut attrs = vec![(name, format_value(target.value))];
    if let Some(units) = &target.units {
        attrs.push(("units", units.clone()));
    }
    attrs
}

fn ramp_attrs(ramp: &RampStep) -> Result<Attrs, FormatError> {
    let (low, high) = match (ramp.target_start.kind, ramp.target_end.kind) {
        (TargetKind::Power, TargetKind::Power) => ("PowerLow", "PowerHigh"),
        (TargetKind::Pace, TargetKind::Pace) => ("PaceLow", "PaceHigh"),
        (start, end) => return Err(FormatError::RampKindMismatch { start, end }),
    };

    let mut attrs = common_attrs(
        ramp.duration_seconds,
        ramp.cadence_rpm,
        ramp.text.as_deref(),
    );
    attrs.push((low, format_value(ramp.target_start.value)));
    attrs.push((high, format_value(ramp.target_end.value)));
    if let Some(units) = &ramp.target_start.units {
        attrs.push(("units", units.clone()));
    }
    Ok(attrs)
}

fn format_value(value: f64) -> String {
    value.to_string()
}

// ---------------------------------------------------------------------------
// Markup emitter
// ---------------------------------------------------------------------------

struct XmlWriter {
    out: String,
    indent: usize,
    depth: usize,
}

impl XmlWriter {
    fn new(indent: usize) -> Self {
        Self {
            out: String::new(),
            indent,
            depth: 0,
        }
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.start_tag(tag, attrs);
        self.out.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth = self.depth.saturating_sub(1);
        self.pad();
        let _ = writeln!(self.out, "</{tag}>");
    }

    fn empty(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.start_tag(tag, attrs);
        self.out.push_str("/>\n");
    }

    fn text_element(&mut self, tag: &str, text: &str) {
        self.pad();
        let _ = writeln!(self.out, "<{tag}>{}</{tag}>", escape_text(text));
    }

    fn start_tag(&mut self, tag: &str, attrs: &[(&str, String)]) {
        self.pad();
        let _ = write!(self.out, "<{tag}");
        for (name, value) in attrs {
            let _ = write!(self.out, " {name}=\"{}\"", escape_attr(value));
        }
    }

    fn pad(&mut self) {
        for _ in 0..self.depth * self.indent {
            self.out.push(' ');
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\r', "&#13;")
}

/// Attribute values are whitespace-normalized on read, so line breaks and
/// tabs must go out as character references.
fn escape_attr(s: &str) -> String {
    escape_text(s)
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
        .replace('\t', "&#9;")
}
