use crate::character_sets::{is_forbidden_domain_byte, is_forbidden_host_byte};
use crate::checkers::ends_in_a_number;
use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::unicode::idna::domain_to_ascii;
use crate::unicode::percent_encode::{
    COMPONENT_SET, percent_decode_bytes, percent_encode_preserving_escapes,
};

/// A parsed URL host.
///
/// `None` is a missing host (no authority), `Empty` the empty host that
/// `file:` and some authority forms produce. Special schemes store a
/// `Domain`, `Ipv4`, or `Ipv6`; non-special schemes store `Opaque`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    None,
    Empty,
    Domain(String),
    Ipv4(u32),
    Ipv6([u16; 8]),
    Opaque(String),
}

impl Default for Host {
    fn default() -> Self {
        Host::None
    }
}

impl Host {
    /// Check if a host is present (parsed from an authority)
    pub fn is_present(&self) -> bool {
        !matches!(self, Host::None)
    }

    /// Check if the host is the empty string
    pub fn is_empty(&self) -> bool {
        matches!(self, Host::Empty)
    }

    /// Serialize the host for output: IPv6 addresses are bracketed,
    /// `None` and `Empty` serialize to the empty string.
    pub fn serialize(&self) -> String {
        match self {
            Host::None | Host::Empty => String::new(),
            Host::Domain(domain) => domain.clone(),
            Host::Ipv4(address) => serialize_ipv4(*address),
            Host::Ipv6(pieces) => {
                let mut out = String::with_capacity(41);
                out.push('[');
                out.push_str(&serialize_ipv6(pieces));
                out.push(']');
                out
            }
            Host::Opaque(host) => host.clone(),
        }
    }
}

/// Parse a host string: brackets dispatch to IPv6, non-special schemes get
/// an opaque host, and everything else is percent-decoded, pushed through
/// `domain_to_ascii`, and stored as an IPv4 address or an ASCII domain.
pub fn parse_host(input: &str, is_not_special: bool) -> Result<Host> {
    if input.starts_with('[') {
        let Some(inner) = input.strip_suffix(']').map(|s| &s[1..]) else {
            return Err(ParseError::InvalidHost);
        };
        return parse_ipv6(inner).map(Host::Ipv6);
    }

    if is_not_special {
        return parse_opaque_host(input);
    }

    if input.is_empty() {
        return Ok(Host::Empty);
    }

    let decoded = percent_decode_bytes(input);
    let domain: Cow<'_, str> = match decoded {
        Cow::Borrowed(bytes) => {
            Cow::Borrowed(core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidHost)?)
        }
        Cow::Owned(bytes) => {
            Cow::Owned(String::from_utf8(bytes).map_err(|_| ParseError::InvalidHost)?)
        }
    };

    let ascii_domain = domain_to_ascii(&domain)?;

    if ascii_domain
        .bytes()
        .any(is_forbidden_domain_byte)
    {
        return Err(ParseError::InvalidHost);
    }

    if ends_in_a_number(&ascii_domain) {
        return parse_ipv4(&ascii_domain).map(Host::Ipv4);
    }

    Ok(Host::Domain(ascii_domain))
}

/// Parse an opaque host for a non-special scheme: forbid the strict host
/// set, then percent-encode under the component set. Existing `%HH`
/// sequences pass through so reparsing a serialized host is stable.
fn parse_opaque_host(input: &str) -> Result<Host> {
    if input.is_empty() {
        return Ok(Host::Empty);
    }

    if input.bytes().any(is_forbidden_host_byte) {
        return Err(ParseError::InvalidHost);
    }

    let mut output = String::with_capacity(input.len());
    percent_encode_preserving_escapes(&mut output, input.as_bytes(), COMPONENT_SET);
    Ok(Host::Opaque(output))
}

impl core::fmt::Display for Host {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}
