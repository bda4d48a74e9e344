//! Structured workout files for the trainflow toolkit.
//!
//! A `.zwo` document describes one or more interval sessions: warmup, steady
//! state, cooldown, rest, ramp and free-ride steps, optionally grouped in
//! (nested) repeat blocks, each with a power or pace target. This crate holds
//! the in-memory model, a tolerant parser, and a validating writer.

pub mod error;
pub mod parser;
pub mod sanitize;
pub mod types;
pub mod writer;

pub use error::FormatError;
pub use parser::{load, parse};
pub use types::{
    FreeRideStep, IntervalStep, RampStep, RepeatBlock, Step, Target, TargetKind, Workout,
    WorkoutFile,
};
pub use writer::{WriteOptions, save, save_with, serialize, serialize_with};
