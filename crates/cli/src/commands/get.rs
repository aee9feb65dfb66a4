//! `envkit get`: resolve one variable and print its typed value.
//!
//! Responsibilities:
//! - Interpret `--default` text as a typed default, split and parsed exactly like
//!   a variable holding the same text.
//! - Run the matching typed accessor and render the result.
//!
//! Invariants:
//! - A malformed variable is returned as `EnvError` (exit 78), never replaced by the default.
//! - A malformed `--default` is a usage error, reported before any lookup.
//! - Text output is the bare value so scripts can capture it.

use anyhow::Result;
use envkit_config::{
    Environment, ValueSource, parse_bool, parse_duration, split_all, split_pair,
};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display};
use std::time::Duration;

use crate::args::{OutputFormat, ValueType};
use crate::error::CliError;

/// A converted value of any supported type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Duration(#[serde(serialize_with = "duration_text")] Duration),
    Strings(Vec<String>),
    Ints(Vec<i64>),
    Durations(#[serde(serialize_with = "durations_text")] Vec<Duration>),
    Map(BTreeMap<String, String>),
}

fn duration_text<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:?}"))
}

fn durations_text<S: Serializer>(values: &[Duration], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|value| format!("{value:?}")))
}

impl Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(value) => f.write_str(value),
            TypedValue::Bool(value) => write!(f, "{value}"),
            TypedValue::Int(value) => write!(f, "{value}"),
            TypedValue::Float(value) => write!(f, "{value}"),
            TypedValue::Duration(value) => write!(f, "{value:?}"),
            TypedValue::Strings(values) => write_lines(f, values.iter()),
            TypedValue::Ints(values) => write_lines(f, values.iter()),
            TypedValue::Durations(values) => {
                write_lines(f, values.iter().map(|value| format!("{value:?}")))
            }
            TypedValue::Map(map) => {
                write_lines(f, map.iter().map(|(key, value)| format!("{key}={value}")))
            }
        }
    }
}

fn write_lines<I, T>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: Iterator<Item = T>,
    T: Display,
{
    for (index, item) in items.enumerate() {
        if index > 0 {
            f.write_str("\n")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// JSON shape of a lookup result.
#[derive(Debug, Serialize)]
struct Lookup<'a> {
    key: &'a str,
    #[serde(rename = "type")]
    value_type: String,
    value: &'a TypedValue,
    /// `None` when the default was used.
    source: Option<ValueSource>,
}

/// Parse `--default` text with `parse`, or use `fallback` when no default was given.
fn typed_default<T, E, F>(
    text: Option<&str>,
    value_type: ValueType,
    fallback: T,
    parse: F,
) -> Result<T, CliError>
where
    E: Display,
    F: Fn(&str) -> Result<T, E>,
{
    let Some(text) = text else {
        return Ok(fallback);
    };
    parse(text).map_err(|reason| CliError::InvalidDefault {
        value: text.to_string(),
        value_type,
        reason: reason.to_string(),
    })
}

/// Parse each element as split, without trimming, like the typed list accessors.
fn parse_list<T, E, F>(text: &str, delimiter: &str, parse: F) -> Result<Vec<T>, E>
where
    F: Fn(&str) -> Result<T, E>,
{
    split_all(text, delimiter).into_iter().map(parse).collect()
}

fn parse_map(
    text: &str,
    delimiter: &str,
    pair_delimiter: &str,
) -> Result<HashMap<String, String>, String> {
    split_all(text, delimiter)
        .into_iter()
        .map(|entry| {
            split_pair(entry, pair_delimiter)
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| format!("entry {entry:?} has no {pair_delimiter:?}"))
        })
        .collect()
}

/// Look up `key` as `value_type`, falling back to the parsed `--default`.
pub fn resolve_typed(
    env: Environment<'_>,
    key: &str,
    value_type: ValueType,
    delimiter: &str,
    pair_delimiter: &str,
    default: Option<&str>,
) -> Result<TypedValue> {
    let value = match value_type {
        ValueType::String => TypedValue::String(env.string(key, default.unwrap_or_default())),
        ValueType::Bool => {
            let fallback = typed_default(default, value_type, false, parse_bool)?;
            TypedValue::Bool(env.bool(key, fallback)?)
        }
        ValueType::Int => {
            let fallback = typed_default(default, value_type, 0, str::parse::<i64>)?;
            TypedValue::Int(env.int(key, fallback)?)
        }
        ValueType::Float => {
            let fallback = typed_default(default, value_type, 0.0, str::parse::<f64>)?;
            TypedValue::Float(env.float(key, fallback)?)
        }
        ValueType::Duration => {
            let fallback = typed_default(default, value_type, Duration::ZERO, parse_duration)?;
            TypedValue::Duration(env.duration(key, fallback)?)
        }
        ValueType::Strings => {
            let fallback: Vec<String> = default
                .map(|text| {
                    split_all(text, delimiter)
                        .into_iter()
                        .map(|element| element.trim().to_string())
                        .collect()
                })
                .unwrap_or_default();
            TypedValue::Strings(env.strings(key, delimiter, fallback))
        }
        ValueType::Ints => {
            let fallback = typed_default(default, value_type, Vec::new(), |text| {
                parse_list(text, delimiter, str::parse::<i64>)
            })?;
            TypedValue::Ints(env.ints(key, delimiter, fallback)?)
        }
        ValueType::Durations => {
            let fallback = typed_default(default, value_type, Vec::new(), |text| {
                parse_list(text, delimiter, parse_duration)
            })?;
            TypedValue::Durations(env.durations(key, delimiter, fallback)?)
        }
        ValueType::Map => {
            let fallback = typed_default(default, value_type, HashMap::new(), |text| {
                parse_map(text, delimiter, pair_delimiter)
            })?;
            let map = env.map(key, delimiter, pair_delimiter, fallback)?;
            TypedValue::Map(map.into_iter().collect())
        }
    };
    Ok(value)
}

/// Which layer answered, or `None` when the default was used.
fn value_source(env: Environment<'_>, key: &str, value_type: ValueType) -> Option<ValueSource> {
    env.resolve(key)
        .filter(|resolved| value_type == ValueType::String || !resolved.value.is_empty())
        .map(|resolved| resolved.source)
}

pub fn run(
    env: Environment<'_>,
    key: &str,
    value_type: ValueType,
    delimiter: &str,
    pair_delimiter: &str,
    default: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let value = resolve_typed(env, key, value_type, delimiter, pair_delimiter, default)?;
    let source = value_source(env, key, value_type);
    tracing::debug!(key, %value_type, ?source, "resolved variable");

    match output {
        OutputFormat::Text => {
            let text = value.to_string();
            if !text.is_empty() {
                println!("{text}");
            }
        }
        OutputFormat::Json => {
            let lookup = Lookup {
                key,
                value_type: value_type.to_string(),
                value: &value,
                source,
            };
            println!("{}", serde_json::to_string_pretty(&lookup)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExitCode, ExitCodeExt};
    use envkit_config::EnvOverlay;

    // Keys below are never set in the process environment.
    fn empty() -> EnvOverlay {
        EnvOverlay::empty()
    }

    #[test]
    fn test_defaults_are_typed() {
        let overlay = empty();
        let env = Environment::new(&overlay);
        let key = "_ENVKIT_CLI_UNSET";

        assert_eq!(
            resolve_typed(env, key, ValueType::Int, ",", ":", Some("-5")).unwrap(),
            TypedValue::Int(-5)
        );
        assert_eq!(
            resolve_typed(env, key, ValueType::Durations, ",", ":", Some("1s,2m")).unwrap(),
            TypedValue::Durations(vec![Duration::from_secs(1), Duration::from_secs(120)])
        );
        assert_eq!(
            resolve_typed(env, key, ValueType::Map, ",", "=", Some("a=1,b=2")).unwrap(),
            TypedValue::Map(BTreeMap::from([
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]))
        );
        assert_eq!(
            resolve_typed(env, key, ValueType::String, ",", ":", None).unwrap(),
            TypedValue::String(String::new())
        );
    }

    #[test]
    fn test_malformed_default_is_usage_error() {
        let overlay = empty();
        let env = Environment::new(&overlay);

        let err = resolve_typed(env, "_ENVKIT_CLI_UNSET", ValueType::Bool, ",", ":", Some("maybe"))
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::UsageError);

        let err = resolve_typed(env, "_ENVKIT_CLI_UNSET", ValueType::Map, ",", ":", Some("novalue"))
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::UsageError);
    }

    #[test]
    fn test_default_text_converts_like_a_variable() {
        let overlay = empty();
        let env = Environment::new(&overlay);
        let key = "_ENVKIT_CLI_UNSET";

        let err = resolve_typed(env, key, ValueType::Ints, ",", ":", Some("1, 2")).unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::UsageError);

        assert_eq!(
            resolve_typed(env, key, ValueType::Ints, "", ":", Some("123")).unwrap(),
            TypedValue::Ints(vec![1, 2, 3])
        );
        assert_eq!(
            resolve_typed(env, key, ValueType::Map, ",", "", Some("ab,cd")).unwrap(),
            TypedValue::Map(BTreeMap::from([
                ("a".to_string(), "b".to_string()),
                ("c".to_string(), "d".to_string()),
            ]))
        );
        assert_eq!(
            resolve_typed(env, key, ValueType::Strings, ",", ":", Some("x, y")).unwrap(),
            TypedValue::Strings(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_display_renders_one_item_per_line() {
        let value = TypedValue::Map(BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]));
        assert_eq!(value.to_string(), "a=1\nb=2");
        assert_eq!(
            TypedValue::Durations(vec![Duration::from_millis(1500)]).to_string(),
            "1.5s"
        );
    }

    #[test]
    fn test_json_renders_durations_as_text() {
        let json = serde_json::to_value(TypedValue::Duration(Duration::from_secs(90))).unwrap();
        assert_eq!(json, serde_json::json!("90s"));
        let json = serde_json::to_value(TypedValue::Ints(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!([1, 2]));
    }
}
