//! Parse `.zwo` markup into a [`WorkoutFile`].

use std::path::Path;
use std::str::FromStr;

use roxmltree::{Document, Node};
use tracing::{debug, info, warn};

use crate::error::FormatError;
use crate::sanitize::escape_bare_ampersands;
use crate::types::{
    DEFAULT_FILE_NAME, DEFAULT_SPORT_TYPE, DEFAULT_WORKOUT_NAME, FreeRideStep, IntervalStep,
    RampStep, RepeatBlock, Step, Target, TargetKind, Workout, WorkoutFile,
};

/// Tag of the document root.
pub const ROOT_TAG: &str = "workout_file";

/// How an attribute name is matched against the element's attributes.
#[derive(Debug, Clone, Copy)]
enum NameMatch {
    Exact,
    /// Exact spelling first, then any ASCII case variant.
    IgnoreCase,
}

/// Attributes that carry a single-ended target, in lookup order.
const TARGET_ATTRIBUTES: [(&str, TargetKind, NameMatch); 2] = [
    ("Power", TargetKind::Power, NameMatch::Exact),
    ("Pace", TargetKind::Pace, NameMatch::IgnoreCase),
];

/// Low/high attribute pairs accepted on `<Ramp>`, in lookup order.
const RAMP_ATTRIBUTES: [(&str, &str); 2] = [("PowerLow", "PowerHigh"), ("PaceLow", "PaceHigh")];

/// Parse a complete workout document.
///
/// Bare ampersands are escaped first (see
/// [`escape_bare_ampersands`](crate::sanitize::escape_bare_ampersands)). The
/// whole document must be valid for a file to be returned.
pub fn parse(input: &str) -> Result<WorkoutFile, FormatError> {
    let sanitized = escape_bare_ampersands(input);
    let doc = Document::parse(&sanitized).map_err(|e| FormatError::Xml(e.to_string()))?;

    let root = doc.root_element();
    if !root.has_tag_name(ROOT_TAG) {
        return Err(FormatError::WrongRoot {
            found: tag_of(&root),
        });
    }

    let mut file = WorkoutFile {
        author: child_text(&root, "author"),
        name: child_text(&root, "name").unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
        description: child_text(&root, "description"),
        sport_type: child_text(&root, "sportType")
            .unwrap_or_else(|| DEFAULT_SPORT_TYPE.to_string()),
        tags: Vec::new(),
        workouts: Vec::new(),
    };

    if let Some(tags) = child_text(&root, "tags") {
        for tag in tags.split(',') {
            file.add_tag(tag);
        }
    }

    for workout in root.children().filter(|n| n.has_tag_name("workout")) {
        let name = workout
            .attribute("name")
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_WORKOUT_NAME);
        let steps = parse_steps(&workout)?;
        file.workouts.push(Workout::new(name, steps));
    }

    Ok(file)
}

/// Read and parse a workout file from disk.
pub fn load(path: &Path) -> Result<WorkoutFile, FormatError> {
    debug!(path = %path.display(), "parsing workout file");
    let result = std::fs::read_to_string(path)
        .map_err(FormatError::from)
        .and_then(|content| parse(&content));

    match &result {
        Ok(file) => info!(
            path = %path.display(),
            workouts = file.workouts.len(),
            tags = file.tags.len(),
            "parsed workout file"
        ),
        Err(e) => warn!(path = %path.display(), error = %e, "failed to parse workout file"),
    }
    result
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

fn parse_steps(parent: &Node<'_, '_>) -> Result<Vec<Step>, FormatError> {
    parent
        .children()
        .filter(|n| n.is_element())
        .map(|child| parse_step(&child))
        .collect()
}

fn parse_step(node: &Node<'_, '_>) -> Result<Step, FormatError> {
    let tag = node.tag_name().name();

    if tag == "Repeat" {
        let repeat_count: u32 = required_number(node, "Repeat")?;
        if repeat_count == 0 {
            return Err(invalid(node, "Repeat", "0"));
        }
        return Ok(Step::Repeat(RepeatBlock::new(
            repeat_count,
            parse_steps(node)?,
        )));
    }

    let variant: fn(IntervalStep) -> Step = match tag {
        "Warmup" => Step::Warmup,
        "SteadyState" => Step::SteadyState,
        "Cooldown" => Step::Cooldown,
        "Rest" => Step::Rest,
        "Ramp" => return parse_ramp(node).map(Step::Ramp),
        "FreeRide" | "Freeride" => return parse_free_ride(node).map(Step::FreeRide),
        _ => {
            return Err(FormatError::UnsupportedStep {
                tag: tag.to_string(),
            });
        }
    };

    let step = IntervalStep {
        duration_seconds: required_number(node, "Duration")?,
        cadence_rpm: optional_number(node, "Cadence")?,
        text: node.attribute("Text").map(str::to_string),
        target: resolve_target(node)?,
    };
    Ok(variant(step))
}

fn parse_ramp(node: &Node<'_, '_>) -> Result<RampStep, FormatError> {
    let duration_seconds = required_number(node, "Duration")?;
    let cadence_rpm = optional_number(node, "Cadence")?;

    let mut last_err = None;
    for (low, high) in RAMP_ATTRIBUTES {
        match resolve_target_pair(node, low, high) {
            Ok((target_start, target_end)) => {
                return Ok(RampStep {
                    duration_seconds,
                    cadence_rpm,
                    text: node.attribute("Text").map(str::to_string),
                    target_start,
                    target_end,
                });
            }
            Err(e @ FormatError::IncompleteTargetPair { .. }) => last_err = Some(e),
            Err(e) => return Err(e),
        }
    }
    Err(last_err.unwrap_or_else(|| FormatError::MissingTarget {
        element: tag_of(node),
    }))
}

fn parse_free_ride(node: &Node<'_, '_>) -> Result<FreeRideStep, FormatError> {
    let has_target = TARGET_ATTRIBUTES
        .iter()
        .any(|(name, _, how)| lookup(node, name, *how).is_some());

    Ok(FreeRideStep {
        duration_seconds: required_number(node, "Duration")?,
        cadence_rpm: optional_number(node, "Cadence")?,
        text: node.attribute("Text").map(str::to_string),
        target: if has_target {
            Some(resolve_target(node)?)
        } else {
            None
        },
    })
}

// ---------------------------------------------------------------------------
// Targets
// ---------------------------------------------------------------------------

/// Resolve the single target of a step from the first matching entry of
/// [`TARGET_ATTRIBUTES`].
fn resolve_target(node: &Node<'_, '_>) -> Result<Target, FormatError> {
    for (name, kind, how) in TARGET_ATTRIBUTES {
        if let Some(raw) = lookup(node, name, how) {
            return build_target(node, kind, name, raw);
        }
    }
    Err(FormatError::MissingTarget {
        element: tag_of(node),
    })
}

/// Resolve a low/high pair. Each key is tried in its exact spelling, then
/// lowercased. The kind follows the key names: anything mentioning `Power`
/// is a power target, everything else pace.
fn resolve_target_pair(
    node: &Node<'_, '_>,
    low: &'static str,
    high: &'static str,
) -> Result<(Target, Target), FormatError> {
    let pair = |key: &str| {
        present(node.attribute(key))
            .or_else(|| present(node.attribute(key.to_ascii_lowercase().as_str())))
    };

    let (Some(low_raw), Some(high_raw)) = (pair(low), pair(high)) else {
        return Err(FormatError::IncompleteTargetPair {
            low,
            high,
            element: tag_of(node),
        });
    };

    let kind = if low.contains("Power") || high.contains("Power") {
        TargetKind::Power
    } else {
        TargetKind::Pace
    };
    Ok((
        build_target(node, kind, low, low_raw)?,
        build_target(node, kind, high, high_raw)?,
    ))
}

fn build_target(
    node: &Node<'_, '_>,
    kind: TargetKind,
    attribute: &'static str,
    raw: &str,
) -> Result<Target, FormatError> {
    let value: f64 = raw
        .trim()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| invalid(node, attribute, raw))?;

    let mut target = Target::new(kind, value);
    target.units = node.attribute("units").map(str::to_string);
    Ok(target)
}

// ---------------------------------------------------------------------------
// Attribute helpers
// ---------------------------------------------------------------------------

/// Target attribute value under `name`. An empty value counts as absent so
/// that the next candidate is tried.
fn lookup<'a>(node: &Node<'a, '_>, name: &str, how: NameMatch) -> Option<&'a str> {
    match how {
        NameMatch::Exact => present(node.attribute(name)),
        NameMatch::IgnoreCase => present(node.attribute(name)).or_else(|| {
            node.attributes()
                .filter(|a| a.name().eq_ignore_ascii_case(name))
                .map(|a| a.value())
                .find(|v| !v.is_empty())
        }),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn required_number<T: FromStr>(
    node: &Node<'_, '_>,
    attribute: &'static str,
) -> Result<T, FormatError> {
    let raw = node
        .attribute(attribute)
        .ok_or_else(|| FormatError::MissingAttribute {
            attribute,
            element: tag_of(node),
        })?;
    raw.trim()
        .parse()
        .map_err(|_| invalid(node, attribute, raw))
}

fn optional_number<T: FromStr>(
    node: &Node<'_, '_>,
    attribute: &'static str,
) -> Result<Option<T>, FormatError> {
    match node.attribute(attribute) {
        Some(_) => required_number(node, attribute).map(Some),
        None => Ok(None),
    }
}

fn invalid(node: &Node<'_, '_>, attribute: &'static str, raw: &str) -> FormatError {
    FormatError::InvalidAttribute {
        attribute,
        element: tag_of(node),
        value: raw.to_string(),
    }
}

/// Trimmed text of the first direct child named `tag`; empty counts as absent.
fn child_text(parent: &Node<'_, '_>, tag: &str) -> Option<String> {
    parent
        .children()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn tag_of(node: &Node<'_, '_>) -> String {
    node.tag_name().name().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = include_str!("../testdata/sample_program.zwo");

    fn single_workout(steps: &str) -> String {
        format!("<workout_file><name>t</name><workout name=\"wo\">{steps}</workout></workout_file>")
    }

    fn parse_steps_of(steps: &str) -> Vec<Step> {
        let mut file = parse(&single_workout(steps)).unwrap();
        file.workouts.remove(0).steps
    }

    #[test]
    fn maximal_repeat_counts_parse_and_total_without_overflow() {
        let file = parse(&single_workout(
            r#"<Repeat Repeat="4294967295">
                 <Repeat Repeat="4294967295">
                   <Repeat Repeat="4294967295">
                     <SteadyState Duration="4294967295" Power="0.9"/>
                   </Repeat>
                 </Repeat>
               </Repeat>"#,
        ))
        .unwrap();
        assert_eq!(file.workouts[0].duration_seconds(), u64::MAX);
        assert_eq!(file.total_steps(), usize::MAX);
    }

    #[test]
    fn sample_metadata() {
        let wf = parse(SAMPLE).unwrap();
        assert_eq!(wf.author.as_deref(), Some("Coach Trainflow"));
        assert_eq!(wf.name, "Settimana tipo - Base & Forza");
        assert_eq!(wf.sport_type, "bike");
        assert_eq!(wf.tags, vec!["base", "forza", "vo2max"]);
        assert_eq!(wf.workouts.len(), 4);
    }

    #[test]
    fn sample_workouts_have_expected_step_shapes() {
        let wf = parse(SAMPLE).unwrap();
        let tags = |i: usize| -> Vec<&str> {
            wf.workouts[i].steps.iter().map(Step::tag_name).collect()
        };

        assert_eq!(wf.workouts[0].name, "Lunedì – Recupero e mobilità (30’)");
        assert_eq!(tags(0), vec!["Warmup", "SteadyState", "Cooldown"]);

        assert_eq!(
            wf.workouts[1].name,
            "Martedì – Torque + Sprint (Forza & Esplosività)"
        );
        assert_eq!(tags(1), vec!["Warmup", "Repeat", "Repeat", "Cooldown"]);

        assert_eq!(tags(3), vec!["Warmup", "Repeat", "Cooldown"]);
    }

    #[test]
    fn sample_nested_repeat_and_ramp() {
        let wf = parse(SAMPLE).unwrap();
        let tuesday = &wf.workouts[1];

        let Step::Repeat(torque) = &tuesday.steps[1] else {
            panic!("expected repeat block, got {:?}", tuesday.steps[1]);
        };
        assert_eq!(torque.repeat_count, 3);
        let Step::SteadyState(effort) = &torque.steps[0] else {
            panic!("expected steady state");
        };
        assert_eq!(effort.cadence_rpm, Some(55));
        assert_eq!(effort.text.as_deref(), Some("Torque: rapporto duro"));
        assert!(matches!(torque.steps[1], Step::Rest(_)));

        let Step::Repeat(sprints) = &tuesday.steps[2] else {
            panic!("expected repeat block");
        };
        assert_eq!(sprints.repeat_count, 6);
        let Step::Ramp(ramp) = &sprints.steps[0] else {
            panic!("expected ramp");
        };
        assert_eq!(ramp.target_start.kind, TargetKind::Power);
        assert_eq!(ramp.target_start.value, 363.0);
        assert_eq!(ramp.target_end.value, 495.0);
        assert!(!ramp.target_end.is_fraction_of_ftp);
    }

    #[test]
    fn sample_deep_nesting_and_freeride_spelling() {
        let wf = parse(SAMPLE).unwrap();
        let Step::Repeat(outer) = &wf.workouts[3].steps[1] else {
            panic!("expected repeat block");
        };
        assert_eq!(outer.repeat_count, 2);
        let Step::Repeat(inner) = &outer.steps[0] else {
            panic!("expected nested repeat block");
        };
        assert_eq!(inner.repeat_count, 8);
        assert_eq!(inner.steps.len(), 2);
        assert!(matches!(&outer.steps[1], Step::FreeRide(f) if f.target.is_none()));
    }

    #[test]
    fn repeat_keeps_children_in_order() {
        let steps = parse_steps_of(
            r#"<Repeat Repeat="3">
                 <SteadyState Duration="60" Power="1.1"/>
                 <Rest Duration="30" Power="0.5"/>
               </Repeat>"#,
        );
        let Step::Repeat(block) = &steps[0] else {
            panic!("expected repeat block");
        };
        assert_eq!(block.repeat_count, 3);
        assert_eq!(block.steps.len(), 2);
        assert_eq!(block.steps[0].tag_name(), "SteadyState");
        assert_eq!(block.steps[1].tag_name(), "Rest");
    }

    #[test]
    fn power_fraction_inference() {
        let steps = parse_steps_of(
            r#"<SteadyState Duration="60" Power="0.75"/>
               <SteadyState Duration="60" Power="220"/>
               <SteadyState Duration="60" Power="1.0"/>"#,
        );
        let fractions: Vec<bool> = steps
            .iter()
            .map(|s| match s {
                Step::SteadyState(s) => s.target.is_fraction_of_ftp,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(fractions, vec![true, false, true]);
    }

    #[test]
    fn pace_targets_and_free_ride() {
        let steps = parse_steps_of(
            r#"<SteadyState Duration="300" Pace="2.5"/>
               <Ramp Duration="100" PaceLow="2.5" PaceHigh="3.0"/>
               <FreeRide Duration="200"/>"#,
        );

        let Step::SteadyState(steady) = &steps[0] else {
            panic!("expected steady state");
        };
        assert_eq!(steady.target.kind, TargetKind::Pace);
        assert_eq!(steady.target.value, 2.5);
        assert!(!steady.target.is_fraction_of_ftp);

        let Step::Ramp(ramp) = &steps[1] else {
            panic!("expected ramp");
        };
        assert_eq!(ramp.target_start.kind, TargetKind::Pace);
        assert_eq!(ramp.target_end.kind, TargetKind::Pace);
        assert_eq!(ramp.target_end.value, 3.0);

        let Step::FreeRide(free) = &steps[2] else {
            panic!("expected free ride");
        };
        assert_eq!(free.duration_seconds, 200);
        assert!(free.target.is_none());
    }

    #[test]
    fn power_wins_over_pace_and_pace_matches_any_case() {
        let steps = parse_steps_of(
            r#"<Rest Duration="60" Power="0.4" Pace="3.0"/>
               <Rest Duration="60" pace="4.0"/>
               <Rest Duration="60" PACE="4.5" units="m/s"/>"#,
        );
        let targets: Vec<&Target> = steps
            .iter()
            .map(|s| match s {
                Step::Rest(r) => &r.target,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(targets[0].kind, TargetKind::Power);
        assert_eq!(targets[1].kind, TargetKind::Pace);
        assert_eq!(targets[1].value, 4.0);
        assert_eq!(targets[2].value, 4.5);
        assert_eq!(targets[2].units.as_deref(), Some("m/s"));
    }

    #[test]
    fn ramp_accepts_lowercase_keys_and_falls_back_to_pace() {
        let steps = parse_steps_of(
            r#"<Ramp Duration="60" powerlow="0.5" powerhigh="0.9"/>
               <Ramp Duration="60" PowerLow="0.5" PaceLow="2.0" PaceHigh="2.5"/>"#,
        );
        let Step::Ramp(lower) = &steps[0] else {
            panic!("expected ramp");
        };
        assert_eq!(lower.target_start.kind, TargetKind::Power);
        assert_eq!(lower.target_end.value, 0.9);

        // Incomplete power pair: the complete pace pair is used instead.
        let Step::Ramp(fallback) = &steps[1] else {
            panic!("expected ramp");
        };
        assert_eq!(fallback.target_start.kind, TargetKind::Pace);
        assert_eq!(fallback.target_start.value, 2.0);
    }

    #[test]
    fn empty_target_values_count_as_absent() {
        let steps = parse_steps_of(
            r#"<Ramp Duration="60" PowerLow="" PowerHigh="0.9" PaceLow="2.0" PaceHigh="2.5"/>
               <SteadyState Duration="60" Power="" Pace="3.1"/>
               <FreeRide Duration="60" Power=""/>"#,
        );
        let Step::Ramp(ramp) = &steps[0] else {
            panic!("expected ramp");
        };
        assert_eq!(ramp.target_start.kind, TargetKind::Pace);
        assert_eq!(ramp.target_end.value, 2.5);

        let Step::SteadyState(steady) = &steps[1] else {
            panic!("expected steady state");
        };
        assert_eq!(steady.target.kind, TargetKind::Pace);
        assert_eq!(steady.target.value, 3.1);

        let Step::FreeRide(free) = &steps[2] else {
            panic!("expected free ride");
        };
        assert_eq!(free.target, None);

        let err = parse(&single_workout(r#"<Warmup Duration="60" Power=""/>"#)).unwrap_err();
        assert!(matches!(err, FormatError::MissingTarget { .. }), "{err}");
    }

    #[test]
    fn ramp_without_complete_pair_fails() {
        let err = parse(&single_workout(r#"<Ramp Duration="60" PowerLow="0.5"/>"#)).unwrap_err();
        assert!(
            matches!(
                err,
                FormatError::IncompleteTargetPair { low: "PaceLow", high: "PaceHigh", .. }
            ),
            "{err}"
        );
    }

    #[test]
    fn free_ride_with_target_and_cadence() {
        let steps = parse_steps_of(
            r#"<Freeride Duration="600" Cadence="85" Power="0.6" Text="Spin"/>"#,
        );
        let Step::FreeRide(free) = &steps[0] else {
            panic!("expected free ride");
        };
        assert_eq!(free.cadence_rpm, Some(85));
        assert_eq!(free.text.as_deref(), Some("Spin"));
        assert_eq!(free.target.as_ref().map(|t| t.value), Some(0.6));
    }

    #[test]
    fn bare_ampersand_is_preserved_as_text() {
        let xml = r#"<workout_file>
            <name>Torque & Sprint</name>
            <description>Hills & more</description>
            <workout name="Forza & Esplosività">
                <SteadyState Duration="60" Power="0.8" Text="Push & hold"/>
            </workout>
        </workout_file>"#;
        let wf = parse(xml).unwrap();
        assert_eq!(wf.name, "Torque & Sprint");
        assert_eq!(wf.description.as_deref(), Some("Hills & more"));
        assert_eq!(wf.workouts[0].name, "Forza & Esplosività");
        let Step::SteadyState(step) = &wf.workouts[0].steps[0] else {
            panic!("expected steady state");
        };
        assert_eq!(step.text.as_deref(), Some("Push & hold"));
    }

    #[test]
    fn metadata_defaults() {
        let wf = parse("<workout_file><workout/></workout_file>").unwrap();
        assert_eq!(wf.name, "Untitled");
        assert_eq!(wf.sport_type, "bike");
        assert!(wf.author.is_none());
        assert!(wf.description.is_none());
        assert!(wf.tags.is_empty());
        assert_eq!(wf.workouts[0].name, "Untitled Workout");
        assert!(wf.workouts[0].steps.is_empty());
    }

    #[test]
    fn comments_and_whitespace_between_steps_are_ignored() {
        let steps = parse_steps_of(
            "\n  <!-- warm up -->\n  <Warmup Duration=\"300\" Power=\"0.5\"/>\n",
        );
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn missing_duration_fails() {
        let err = parse(&single_workout(r#"<SteadyState Power="200"/>"#)).unwrap_err();
        assert!(
            matches!(
                &err,
                FormatError::MissingAttribute { attribute: "Duration", element }
                    if element == "SteadyState"
            ),
            "{err}"
        );
    }

    #[test]
    fn missing_repeat_count_fails() {
        let err = parse(&single_workout(r#"<Repeat><Rest Duration="5" Power="0.5"/></Repeat>"#))
            .unwrap_err();
        assert!(matches!(
            err,
            FormatError::MissingAttribute { attribute: "Repeat", .. }
        ));
    }

    #[test]
    fn zero_repeat_count_fails() {
        let err = parse(&single_workout(r#"<Repeat Repeat="0"/>"#)).unwrap_err();
        assert!(matches!(
            err,
            FormatError::InvalidAttribute { attribute: "Repeat", .. }
        ));
    }

    #[test]
    fn missing_target_fails() {
        let err = parse(&single_workout(r#"<Cooldown Duration="60"/>"#)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing target attribute (Power or Pace) on <Cooldown>"
        );
    }

    #[test]
    fn unknown_tag_fails() {
        let err = parse(&single_workout(r#"<Unknown Duration="60" Power="100"/>"#)).unwrap_err();
        assert!(matches!(&err, FormatError::UnsupportedStep { tag } if tag == "Unknown"));
    }

    #[test]
    fn nested_unknown_tag_fails() {
        let err = parse(&single_workout(
            r#"<Repeat Repeat="2"><Sprint Duration="10" Power="2"/></Repeat>"#,
        ))
        .unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedStep { .. }));
    }

    #[test]
    fn wrong_root_fails() {
        let err = parse("<badroot></badroot>").unwrap_err();
        assert!(matches!(&err, FormatError::WrongRoot { found } if found == "badroot"));
    }

    #[test]
    fn malformed_markup_fails() {
        let err = parse("<workout_file><name>x</workout_file>").unwrap_err();
        assert!(matches!(err, FormatError::Xml(_)));
    }

    #[test]
    fn non_numeric_values_fail() {
        for steps in [
            r#"<Warmup Duration="ten" Power="0.5"/>"#,
            r#"<Warmup Duration="60" Power="high"/>"#,
            r#"<Warmup Duration="60" Cadence="fast" Power="0.5"/>"#,
            r#"<Warmup Duration="60" Power="NaN"/>"#,
        ] {
            let err = parse(&single_workout(steps)).unwrap_err();
            assert!(
                matches!(err, FormatError::InvalidAttribute { .. }),
                "{steps}: {err}"
            );
        }
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.zwo");
        std::fs::write(&path, SAMPLE).unwrap();

        let wf = load(&path).unwrap();
        assert_eq!(wf.workouts.len(), 4);

        let err = load(&dir.path().join("missing.zwo")).unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }
}
