//! Error type shared by the parser and the writer.

use crate::types::TargetKind;

/// Everything that can go wrong while reading or writing a workout file.
///
/// Parse failures carry the offending element's tag name and, where one
/// applies, the attribute that was missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The document is not well-formed markup.
    #[error("malformed markup: {0}")]
    Xml(String),

    #[error("root element must be <workout_file>, found <{found}>")]
    WrongRoot { found: String },

    #[error("unsupported step type <{tag}>")]
    UnsupportedStep { tag: String },

    #[error("missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        attribute: &'static str,
        element: String,
    },

    #[error("invalid value '{value}' for attribute '{attribute}' on <{element}>")]
    InvalidAttribute {
        attribute: &'static str,
        element: String,
        value: String,
    },

    /// A single-target step has neither a `Power` nor a `Pace` attribute.
    #[error("missing target attribute (Power or Pace) on <{element}>")]
    MissingTarget { element: String },

    /// Only one end (or neither) of a low/high attribute pair is present.
    #[error("missing required attribute '{low}' or '{high}' on <{element}>")]
    IncompleteTargetPair {
        low: &'static str,
        high: &'static str,
        element: String,
    },

    /// A ramp whose two ends are not both power or both pace.
    #[error("ramp targets must share kind (power or pace), got {start} and {end}")]
    RampKindMismatch { start: TargetKind, end: TargetKind },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
