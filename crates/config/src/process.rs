//! Read-only access to the real process environment.
//!
//! Invariants:
//! - Nothing here ever writes to the process environment.
//! - Keys that cannot exist in an environment block (empty, containing `=` or NUL)
//!   are reported as unset instead of reaching the OS lookup.
//! - Non-UTF-8 values are decoded lossily.

use std::ffi::OsString;

fn lookup_os(key: &str) -> Option<OsString> {
    if key.is_empty() || key.contains(['=', '\0']) {
        return None;
    }
    std::env::var_os(key)
}

/// Value of `key` in the process environment, if defined (possibly empty).
pub(crate) fn lookup(key: &str) -> Option<String> {
    lookup_os(key).map(|value| value.to_string_lossy().into_owned())
}

/// Whether `key` is defined in the process environment, even as an empty string.
pub(crate) fn is_defined(key: &str) -> bool {
    lookup_os(key).is_some()
}
