//! String utilities for the domain layer.

/// Shortens file contents for a single-line log message.
///
/// Line breaks are collapsed to spaces and the result is cut to at most
/// `max_chars` characters, ending in `...` when anything was dropped.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
