//! Presence checks for request fields.
//!
//! A field counts as present only when it exists and is non-empty. Whitespace
//! is not trimmed: `" "` is a valid username.

/// Returns the value if it is present and non-empty.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Returns both values only when both are present.
pub fn both_present<'a>(a: Option<&'a str>, b: Option<&'a str>) -> Option<(&'a str, &'a str)> {
    Some((present(a)?, present(b)?))
}
