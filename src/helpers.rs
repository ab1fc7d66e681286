use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use crate::compat::Cow;

/// Fast check if the input contains tabs or newlines
pub fn has_tabs_or_newlines(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Preprocess raw input: trim leading/trailing C0 controls and spaces,
/// then remove every interior TAB/LF/CR. Returns the cleaned input and
/// whether anything was removed (a non-fatal validation error).
pub fn trim_and_remove_whitespace(input: &str) -> (Cow<'_, str>, bool) {
    let bytes = input.as_bytes();

    let start = bytes
        .iter()
        .position(|&b| !is_c0_control_or_space(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_c0_control_or_space(b))
        .map_or(0, |pos| pos + 1);

    if start >= end {
        return (Cow::Borrowed(""), !input.is_empty());
    }

    let trimmed = &input[start..end];
    let edges_trimmed = trimmed.len() != input.len();

    if !has_tabs_or_newlines(trimmed) {
        return (Cow::Borrowed(trimmed), edges_trimmed);
    }

    let cleaned: crate::compat::String = trimmed
        .chars()
        .filter(|&c| !(c.is_ascii() && is_ascii_tab_or_newline(c as u8)))
        .collect();
    (Cow::Owned(cleaned), true)
}
