//! Compound duration parsing.
//!
//! Responsibilities:
//! - Parse `<number><unit>` sequences such as `90s`, `1.5h` or `2h30m` into a `Duration`.
//! - Report malformed input through `DurationError` without panicking.
//!
//! Does NOT handle:
//! - Calendar units (days, weeks, months). Only `ns`, `us`/`µs`/`μs`, `ms`, `s`, `m`, `h`.
//! - Formatting durations back to text.
//!
//! Invariants:
//! - A bare `0` (optionally signed) is the only unit-less input accepted.
//! - Negative non-zero durations are rejected; `std::time::Duration` is unsigned.
//! - The total never exceeds `i64::MAX` nanoseconds.
//! - Fraction digits below nanosecond precision are truncated, not rounded.

use std::time::Duration;
use thiserror::Error;

use crate::constants::MAX_DURATION_NANOS;

/// Fraction digits kept per component; more cannot change a nanosecond count.
const MAX_FRACTION_DIGITS: usize = 20;

/// Unit suffixes and their length in nanoseconds.
const UNITS: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000), // U+00B5 micro sign
    ("μs", 1_000), // U+03BC Greek small letter mu
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 3_600 * 1_000_000_000),
];

/// Errors produced by [`parse_duration`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("duration is empty")]
    Empty,

    #[error("expected a number at byte {position}")]
    InvalidNumber { position: usize },

    #[error("missing unit after number (valid units: ns, us, µs, ms, s, m, h)")]
    MissingUnit,

    #[error("unknown unit {0:?} (valid units: ns, us, µs, ms, s, m, h)")]
    UnknownUnit(String),

    #[error("duration exceeds the maximum of {} nanoseconds", i64::MAX)]
    Overflow,

    #[error("negative durations are not supported")]
    Negative,
}

/// Parse a compound duration expression.
///
/// ```
/// use std::time::Duration;
/// use envkit_config::parse_duration;
///
/// assert_eq!(parse_duration("1m").unwrap(), Duration::from_secs(60));
/// assert_eq!(parse_duration("2h30m").unwrap(), Duration::from_secs(9_000));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1_500));
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let (negative, body) = match input.as_bytes().first() {
        None => return Err(DurationError::Empty),
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        Some(_) => (false, input),
    };

    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(DurationError::InvalidNumber {
            position: input.len(),
        });
    }

    let mut total: u128 = 0;
    let mut rest = body;
    while !rest.is_empty() {
        let position = input.len() - rest.len();

        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let int_digits = &rest[..int_len];
        rest = &rest[int_len..];

        let mut frac_digits = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            frac_digits = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
        }
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationError::InvalidNumber { position });
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_len];
        rest = &rest[unit_len..];
        if unit.is_empty() {
            return Err(DurationError::MissingUnit);
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        total = total
            .checked_add(component_nanos(int_digits, frac_digits, scale)?)
            .filter(|nanos| *nanos <= MAX_DURATION_NANOS)
            .ok_or(DurationError::Overflow)?;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative);
    }

    // Bounded by i64::MAX above, so the cast is lossless.
    Ok(Duration::from_nanos(total as u64))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, nanos)| *nanos)
}

/// Nanoseconds contributed by one `<int>.<frac><unit>` component.
fn component_nanos(int_digits: &str, frac_digits: &str, scale: u128) -> Result<u128, DurationError> {
    let whole = digits_value(int_digits)
        .and_then(|value| value.checked_mul(scale))
        .filter(|nanos| *nanos <= MAX_DURATION_NANOS)
        .ok_or(DurationError::Overflow)?;

    let kept = &frac_digits[..frac_digits.len().min(MAX_FRACTION_DIGITS)];
    if kept.is_empty() {
        return Ok(whole);
    }
    // Both factors are bounded (10^20 * 3.6e12), so this cannot overflow u128.
    let fraction = digits_value(kept).ok_or(DurationError::Overflow)? * scale
        / 10u128.pow(kept.len() as u32);

    Ok(whole + fraction)
}

fn digits_value(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
    })
}
