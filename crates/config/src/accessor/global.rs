//! Free-function accessors over the process-wide overlay.
//!
//! Each function is `Environment::global()` plus the matching method. The first
//! call from any of them triggers the one-time overlay scan.

use std::collections::HashMap;
use std::time::Duration;

use super::Environment;
use crate::error::EnvError;

/// String value of `key`, or `default` when unset. An empty value is returned as-is.
pub fn get_env_string(key: &str, default: impl Into<String>) -> String {
    Environment::global().string(key, default)
}

/// Delimited list of trimmed strings, or `default` when unset or empty.
pub fn get_env_array_string(key: &str, delimiter: &str, default: Vec<String>) -> Vec<String> {
    Environment::global().strings(key, delimiter, default)
}

/// Base-10 integer value of `key`, or `default` when unset or empty.
pub fn get_env_int(key: &str, default: i64) -> Result<i64, EnvError> {
    Environment::global().int(key, default)
}

/// Duration value of `key` such as `90s` or `2h30m`, or `default` when unset or empty.
pub fn get_env_duration(key: &str, default: Duration) -> Result<Duration, EnvError> {
    Environment::global().duration(key, default)
}

/// Boolean value of `key`, or `default` when unset or empty.
pub fn get_env_bool(key: &str, default: bool) -> Result<bool, EnvError> {
    Environment::global().bool(key, default)
}

/// Float value of `key`, or `default` when unset or empty.
pub fn get_env_float64(key: &str, default: f64) -> Result<f64, EnvError> {
    Environment::global().float(key, default)
}

/// Fails on the first element that is not a base-10 integer.
pub fn get_env_array_int(key: &str, delimiter: &str, default: Vec<i64>) -> Result<Vec<i64>, EnvError> {
    Environment::global().ints(key, delimiter, default)
}

/// Fails on the first element that is not a valid duration.
pub fn get_env_array_duration(
    key: &str,
    delimiter: &str,
    default: Vec<Duration>,
) -> Result<Vec<Duration>, EnvError> {
    Environment::global().durations(key, delimiter, default)
}

/// Fails if any entry lacks `pair_delimiter`.
pub fn get_env_map_string_string(
    key: &str,
    entry_delimiter: &str,
    pair_delimiter: &str,
    default: HashMap<String, String>,
) -> Result<HashMap<String, String>, EnvError> {
    Environment::global().map(key, entry_delimiter, pair_delimiter, default)
}
