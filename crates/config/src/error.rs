//! Error types for typed environment lookups.
//!
//! Responsibilities:
//! - Define the malformed-value conditions raised by the typed accessors.
//! - Name the target type of a failed conversion for readable messages.
//!
//! Does NOT handle:
//! - Absent variables. Those resolve to the caller's default and are not errors.
//! - Overlay scan failures, which are silent by contract (see `overlay`).
//!
//! Invariants:
//! - Every variant carries the variable name and the offending raw text.
//! - These errors are meant to be fatal; callers terminate via `OrExit`.

use std::fmt;
use thiserror::Error;

/// Target type of a conversion, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Integer,
    Float,
    Duration,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float64",
            ValueKind::Duration => "duration",
        };
        f.write_str(name)
    }
}

/// A variable is present but its value cannot be converted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("Environment variable {key} is not a valid {kind}: {value:?} ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        kind: ValueKind,
        reason: String,
    },

    #[error("Environment variable {key} array contains an invalid {kind}: {element:?} ({reason})")]
    InvalidElement {
        key: String,
        element: String,
        kind: ValueKind,
        reason: String,
    },

    #[error("Environment variable {key} contains invalid map entry: {entry:?}")]
    InvalidMapEntry { key: String, entry: String },
}

impl EnvError {
    /// Name of the variable that failed to convert.
    pub fn key(&self) -> &str {
        match self {
            EnvError::InvalidValue { key, .. }
            | EnvError::InvalidElement { key, .. }
            | EnvError::InvalidMapEntry { key, .. } => key,
        }
    }
}
