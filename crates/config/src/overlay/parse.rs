//! Line grammar for `*.env` overlay files.
//!
//! A line is either ignored (blank, or a `#` comment after trimming) or split at
//! its first `=` into a trimmed key and a trimmed value. There is no quoting,
//! escaping, or multi-line support; a line without `=` is skipped.

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR};

/// Parse one line of an overlay file into a `(key, value)` pair.
///
/// Returns `None` for blank lines, comments, and lines without a separator.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }

    let (key, value) = line.split_once(KEY_VALUE_SEPARATOR)?;
    Some((key.trim(), value.trim()))
}

/// Iterate over every `(key, value)` pair in file content, in line order.
pub(crate) fn parse_content(content: &str) -> impl Iterator<Item = (&str, &str)> {
    content.lines().filter_map(parse_line)
}
