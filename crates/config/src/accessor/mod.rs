//! Typed lookups over the process environment and the file overlay.
//!
//! Responsibilities:
//! - Resolve a key through the process environment, then the overlay.
//! - Convert the raw value to the requested type or shape.
//! - Return the caller's default, untouched, when the key is unresolved.
//!
//! Does NOT handle:
//! - Loading overlay files (see `overlay`).
//! - Terminating the process. Malformed values surface as `EnvError`; the entry
//!   point decides to exit (see `OrExit`).
//!
//! Invariants:
//! - Precedence is process environment, then overlay, then default.
//! - The string accessor returns an empty resolved value as-is; every other
//!   accessor treats an empty value as unresolved.
//! - A present but malformed value is an error, never the default.
//! - Collection accessors are all-or-nothing: the first bad element fails the call.
//! - Typed list elements are parsed as split, without trimming, like scalars.
//!   Only string lists and map keys/values are trimmed.
//! - Reading has no side effects and no caching.

mod convert;
mod global;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use serde::Serialize;

use crate::duration::parse_duration;
use crate::error::{EnvError, ValueKind};
use crate::overlay::{self, EnvOverlay};
use crate::process;

pub use convert::{parse_bool, split_all, split_pair};
pub use global::{
    get_env_array_duration, get_env_array_int, get_env_array_string, get_env_bool,
    get_env_duration, get_env_float64, get_env_int, get_env_map_string_string, get_env_string,
};

static NO_OVERLAY: LazyLock<EnvOverlay> = LazyLock::new(EnvOverlay::empty);

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueSource {
    /// The real process environment.
    Process,
    /// An overlay file.
    Overlay { file: PathBuf },
}

/// A raw value together with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub value: String,
    pub source: ValueSource,
}

/// Typed accessor handle over one overlay.
///
/// `Environment::global()` uses the process-wide overlay; `Environment::new`
/// accepts any overlay, which keeps lookups testable without global state.
#[derive(Debug, Clone, Copy)]
pub struct Environment<'a> {
    overlay: &'a EnvOverlay,
}

impl<'a> Environment<'a> {
    /// Accessors over an explicit overlay.
    pub fn new(overlay: &'a EnvOverlay) -> Self {
        Self { overlay }
    }

    /// Accessors over the process-wide overlay (scanned on first use).
    pub fn global() -> Environment<'static> {
        Environment::new(overlay::global())
    }

    /// Accessors over the process environment alone.
    pub fn process_only() -> Environment<'static> {
        Environment::new(&NO_OVERLAY)
    }

    /// The overlay consulted after the process environment.
    pub fn overlay(&self) -> &'a EnvOverlay {
        self.overlay
    }

    /// Resolve `key` and report which layer answered.
    pub fn resolve(&self, key: &str) -> Option<Resolved> {
        if let Some(value) = process::lookup(key) {
            return Some(Resolved {
                value,
                source: ValueSource::Process,
            });
        }
        self.overlay.entry(key).map(|entry| Resolved {
            value: entry.value.clone(),
            source: ValueSource::Overlay {
                file: entry.file.clone(),
            },
        })
    }

    /// Raw value of `key`, possibly empty.
    pub fn raw(&self, key: &str) -> Option<String> {
        if let Some(value) = process::lookup(key) {
            return Some(value);
        }
        self.overlay.get(key).map(str::to_string)
    }

    /// Raw value of `key`, treating an empty value as unresolved.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.raw(key).filter(|value| !value.is_empty())
    }

    fn scalar<T, E, F>(&self, key: &str, kind: ValueKind, default: T, parse: F) -> Result<T, EnvError>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        let Some(value) = self.non_empty(key) else {
            return Ok(default);
        };
        parse(&value).map_err(|reason| EnvError::InvalidValue {
            key: key.to_string(),
            reason: reason.to_string(),
            value,
            kind,
        })
    }

    fn elements<T, E, F>(
        &self,
        key: &str,
        delimiter: &str,
        kind: ValueKind,
        default: Vec<T>,
        parse: F,
    ) -> Result<Vec<T>, EnvError>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        let Some(value) = self.non_empty(key) else {
            return Ok(default);
        };
        convert::split_all(&value, delimiter)
            .into_iter()
            .map(|element| {
                parse(element).map_err(|reason| EnvError::InvalidElement {
                    key: key.to_string(),
                    element: element.to_string(),
                    kind,
                    reason: reason.to_string(),
                })
            })
            .collect()
    }

    /// String value; an empty resolved value is returned as-is. Never fails.
    pub fn string(&self, key: &str, default: impl Into<String>) -> String {
        self.raw(key).unwrap_or_else(|| default.into())
    }

    /// Boolean: `1`, `t`, `true`, `0`, `f`, `false` in the spellings [`parse_bool`] accepts.
    pub fn bool(&self, key: &str, default: bool) -> Result<bool, EnvError> {
        self.scalar(key, ValueKind::Bool, default, parse_bool)
    }

    /// Base-10 signed integer.
    pub fn int(&self, key: &str, default: i64) -> Result<i64, EnvError> {
        self.scalar(key, ValueKind::Integer, default, str::parse::<i64>)
    }

    /// 64-bit float in decimal or exponent notation.
    pub fn float(&self, key: &str, default: f64) -> Result<f64, EnvError> {
        self.scalar(key, ValueKind::Float, default, str::parse::<f64>)
    }

    /// Compound duration such as `90s` or `2h30m` (see [`parse_duration`]).
    pub fn duration(&self, key: &str, default: Duration) -> Result<Duration, EnvError> {
        self.scalar(key, ValueKind::Duration, default, parse_duration)
    }

    /// Delimited list of trimmed strings. Never fails.
    pub fn strings(&self, key: &str, delimiter: &str, default: Vec<String>) -> Vec<String> {
        match self.non_empty(key) {
            Some(value) => convert::split_all(&value, delimiter)
                .into_iter()
                .map(|element| element.trim().to_string())
                .collect(),
            None => default,
        }
    }

    /// Delimited list of base-10 integers; the first bad element fails the call.
    pub fn ints(&self, key: &str, delimiter: &str, default: Vec<i64>) -> Result<Vec<i64>, EnvError> {
        self.elements(key, delimiter, ValueKind::Integer, default, str::parse::<i64>)
    }

    /// Delimited list of durations; the first bad element fails the call.
    pub fn durations(
        &self,
        key: &str,
        delimiter: &str,
        default: Vec<Duration>,
    ) -> Result<Vec<Duration>, EnvError> {
        self.elements(key, delimiter, ValueKind::Duration, default, parse_duration)
    }

    /// Map of `key<pair>value` entries separated by `entry_delimiter`.
    ///
    /// Each entry splits at the first `pair_delimiter`; keys and values are
    /// trimmed, and a repeated key keeps its last value.
    pub fn map(
        &self,
        key: &str,
        entry_delimiter: &str,
        pair_delimiter: &str,
        default: HashMap<String, String>,
    ) -> Result<HashMap<String, String>, EnvError> {
        let Some(value) = self.non_empty(key) else {
            return Ok(default);
        };

        let mut map = HashMap::new();
        for entry in convert::split_all(&value, entry_delimiter) {
            let (name, item) =
                convert::split_pair(entry, pair_delimiter).ok_or_else(|| EnvError::InvalidMapEntry {
                    key: key.to_string(),
                    entry: entry.to_string(),
                })?;
            map.insert(name.trim().to_string(), item.trim().to_string());
        }
        Ok(map)
    }
}
