use crate::compat::String;
use crate::error::{ParseError, Result};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if any label of the domain is Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Convert a percent-decoded domain to its ASCII form.
///
/// The contract: the result is ASCII-only and lowercase, with legality of
/// individual characters left to the caller's forbidden-host check. Pure
/// ASCII domains without Punycode labels take the fast path and are only
/// case-folded; everything else goes through the UTS-46 backend.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    if domain.is_ascii() && !has_punycode(domain) {
        return Ok(domain.to_ascii_lowercase());
    }

    let ascii = idna::domain_to_ascii(domain).map_err(|_| ParseError::IdnaError)?;
    if ascii.is_empty() {
        return Err(ParseError::IdnaError);
    }
    Ok(ascii)
}
