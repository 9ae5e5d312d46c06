//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters.
///
/// Counts `char`s rather than bytes so Japanese provider messages are cut
/// at the same visible length as ASCII ones.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
