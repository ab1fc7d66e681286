//! Special-scheme classification.
//!
//! The six special schemes get authority parsing, default-port
//! suppression, and backslash-as-slash path handling; every other scheme
//! is non-special and has no default port. Lookups expect the
//! already-lowercased scheme the parser stores.

const SPECIAL_SCHEMES: &[(&str, Option<u16>)] = &[
    ("ftp", Some(21)),
    ("file", None),
    ("http", Some(80)),
    ("https", Some(443)),
    ("ws", Some(80)),
    ("wss", Some(443)),
];

fn special_entry(scheme: &str) -> Option<&'static (&'static str, Option<u16>)> {
    SPECIAL_SCHEMES.iter().find(|(name, _)| *name == scheme)
}

/// Check if a scheme is one of the special schemes
pub fn is_special_scheme(scheme: &str) -> bool {
    special_entry(scheme).is_some()
}

/// The default port of a scheme, if it has one
pub fn default_port(scheme: &str) -> Option<u16> {
    special_entry(scheme).and_then(|&(_, port)| port)
}

/// Check if a port is the default port of a scheme
pub fn is_default_port(scheme: &str, port: u16) -> bool {
    default_port(scheme) == Some(port)
}
