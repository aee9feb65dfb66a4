//! String-to-type conversions and delimiter splitting shared by the accessors.

/// Parse boolean text in the conventional spellings.
///
/// Accepts `1 t T true TRUE True` and `0 f F false FALSE False`; mixed casing
/// such as `tRuE` is rejected.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err("expected one of 1, t, true, 0, f, false".to_string()),
    }
}

/// Split `raw` on every occurrence of `delimiter`, keeping empty pieces.
///
/// An empty delimiter splits into individual characters.
pub fn split_all<'v>(raw: &'v str, delimiter: &str) -> Vec<&'v str> {
    if delimiter.is_empty() {
        return raw
            .char_indices()
            .map(|(start, c)| &raw[start..start + c.len_utf8()])
            .collect();
    }
    raw.split(delimiter).collect()
}

/// Split `entry` at the first occurrence of `delimiter`.
///
/// An empty delimiter splits after the first character, and only when at least
/// one character follows it.
pub fn split_pair<'v>(entry: &'v str, delimiter: &str) -> Option<(&'v str, &'v str)> {
    if delimiter.is_empty() {
        let first = entry.chars().next()?;
        let (head, tail) = entry.split_at(first.len_utf8());
        return (!tail.is_empty()).then_some((head, tail));
    }
    entry.split_once(delimiter)
}
