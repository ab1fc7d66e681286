//! IPv4 host parsing for special-scheme URLs.
//!
//! A hostname whose final part is numeric commits to these rules: up to
//! four dot-separated numbers, each decimal, octal (extra leading zero),
//! or hex (`0x` prefix), with the last number spanning all remaining
//! bytes of the address.
use crate::compat::{String, Vec, format};
use crate::error::{ParseError, Result};

/// Parse one address part. The radix comes from the prefix: `0x`/`0X` is
/// hex, a further leading zero is octal, anything else decimal. A bare
/// prefix counts as zero.
fn parse_number(part: &str) -> Result<u64> {
    let (digits, radix) = if let Some(hex) = part
        .strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))
    {
        (hex, 16)
    } else if part.len() >= 2 && part.starts_with('0') {
        (&part[1..], 8)
    } else {
        (part, 10)
    };

    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, radix).map_err(|_| ParseError::InvalidHost)
}

/// Parse a dotted IPv4 address into its 32-bit value
pub fn parse_ipv4(input: &str) -> Result<u32> {
    let mut parts: Vec<&str> = input.split('.').collect();

    // one trailing dot is dropped
    if parts.len() > 1 && parts.last() == Some(&"") {
        parts.pop();
    }
    if parts.len() > 4 || parts.iter().any(|part| part.is_empty()) {
        return Err(ParseError::InvalidHost);
    }

    let mut numbers = Vec::with_capacity(parts.len());
    for part in parts {
        numbers.push(parse_number(part)?);
    }

    let (&last, rest) = numbers.split_last().ok_or(ParseError::InvalidHost)?;

    // every number but the last is one octet
    if rest.iter().any(|&number| number > 255) {
        return Err(ParseError::InvalidHost);
    }
    // the last number fills the remaining octets and must fit them
    if last >= 1u64 << (8 * (4 - rest.len() as u32)) {
        return Err(ParseError::InvalidHost);
    }

    let mut address = last;
    for (index, &number) in rest.iter().enumerate() {
        address += number << (8 * (3 - index));
    }
    Ok(address as u32)
}

/// Serialize an IPv4 address as dotted decimal, network byte order
pub fn serialize_ipv4(address: u32) -> String {
    let octets = address.to_be_bytes();
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::unreadable_literal)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_decimal() {
        assert_eq!(parse_ipv4("192.168.1.1").unwrap(), 0xC0A80101);
        assert_eq!(parse_ipv4("127.0.0.1").unwrap(), 0x7F000001);
        assert_eq!(parse_ipv4("127.0.0.1.").unwrap(), 0x7F000001);
        assert_eq!(parse_ipv4("0.0.0.0").unwrap(), 0);
    }

    #[test]
    fn test_radix_detection() {
        assert_eq!(parse_ipv4("0xC0A80101").unwrap(), 0xC0A80101);
        assert_eq!(parse_ipv4("192.0x00A80001").unwrap(), 0xC0A80001);
        assert_eq!(parse_ipv4("0300.0250.01.01").unwrap(), 0xC0A80101);
        assert_eq!(parse_ipv4("017700000001").unwrap(), 0x7F000001);
        // bare prefixes count as zero
        assert_eq!(parse_ipv4("0x").unwrap(), 0);
        assert_eq!(parse_ipv4("0").unwrap(), 0);
        assert_eq!(parse_ipv4("00").unwrap(), 0);
    }

    #[test]
    fn test_last_number_spans_remaining_octets() {
        assert_eq!(parse_ipv4("127.1").unwrap(), 0x7F000001);
        assert_eq!(parse_ipv4("2130706433").unwrap(), 0x7F000001);
        assert_eq!(parse_ipv4("192.168.257").unwrap(), 0xC0A80101);
        assert_eq!(parse_ipv4("0x7f.1").unwrap(), 0x7F000001);
    }

    #[test]
    fn test_rejections() {
        assert!(parse_ipv4("").is_err());
        assert!(parse_ipv4(".").is_err());
        assert!(parse_ipv4("1.2.3.4.5").is_err()); // too many numbers
        assert!(parse_ipv4("1..3.4").is_err()); // empty part
        assert!(parse_ipv4("256.1.1.1").is_err()); // leading number over one octet
        assert!(parse_ipv4("1.1.1.256").is_err()); // last number over its span
        assert!(parse_ipv4("1.2.65536").is_err());
        assert!(parse_ipv4("4294967296").is_err()); // over the whole address
        assert!(parse_ipv4("08").is_err()); // bad octal digit
        assert!(parse_ipv4("0xg").is_err()); // bad hex digit
        assert!(parse_ipv4("1.2.3.x").is_err());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serialize_ipv4(0xC0A80101), "192.168.1.1");
        assert_eq!(serialize_ipv4(0x7F000001), "127.0.0.1");
        assert_eq!(serialize_ipv4(0), "0.0.0.0");
        assert_eq!(serialize_ipv4(u32::MAX), "255.255.255.255");
    }
}
