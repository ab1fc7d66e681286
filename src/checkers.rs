/// Check if a hostname ends in a number and must therefore be parsed as IPv4.
/// Looks at the last dot-separated part (ignoring one trailing dot): all
/// ASCII digits, or a `0x`/`0X` hex literal.
pub fn ends_in_a_number(input: &str) -> bool {
    let input = input.strip_suffix('.').unwrap_or(input);

    let Some(last_part) = input.rsplit('.').next() else {
        return false;
    };
    if last_part.is_empty() {
        return false;
    }

    if last_part.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    if let Some(hex_part) = last_part
        .strip_prefix("0x")
        .or_else(|| last_part.strip_prefix("0X"))
    {
        // Bare "0x" counts: it parses as zero
        return hex_part.is_empty() || hex_part.bytes().all(|b| b.is_ascii_hexdigit());
    }

    false
}

/// Check if `bytes` is exactly a Windows drive letter: ALPHA then `:` or `|`
pub fn is_windows_drive_letter(bytes: &[u8]) -> bool {
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

/// Check if `bytes` starts with a Windows drive letter at positions 0..1
pub fn starts_with_windows_drive_letter(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

/// Check if a path segment is a normalized Windows drive letter (`c:` form)
pub fn is_normalized_windows_drive_letter(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
