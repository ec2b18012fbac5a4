/// Returns up to `len` bytes of `s` starting at `start`.
///
/// Out of range requests are clamped to the end of `s`, and a range that
/// would split a multi-byte character yields an empty slice.
pub(crate) fn substr(s: &str, start: usize, len: usize) -> &str {
    let end = start.saturating_add(len).min(s.len());
    if start > end {
        return "";
    }

    s.get(start..end).unwrap_or("")
}

/// Returns the remainder of `s` starting at `start`, or an empty slice.
pub(crate) fn tail(s: &str, start: usize) -> &str {
    s.get(start..).unwrap_or("")
}

/// Finds `pat` in `s` at or after byte offset `from`.
pub(crate) fn find_from(s: &str, pat: char, from: usize) -> Option<usize> {
    s.get(from..)?.find(pat).map(|i| i + from)
}
