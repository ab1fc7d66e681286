/// Errors that can occur during URL parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Scheme does not match the URL scheme grammar, or is empty where required
    InvalidScheme,
    /// Host parsing failed: malformed IPv4/IPv6, forbidden character, or empty where required
    InvalidHost,
    /// Port is non-numeric or greater than 65535
    InvalidPort,
    /// Path is illegal in context
    InvalidPath,
    /// Query rejected while reparsing in override mode
    InvalidQuery,
    /// Fragment rejected while reparsing in override mode
    InvalidFragment,
    /// Relative input with no base URL to resolve against
    RelativeUrlWithoutBase,
    /// `domain_to_ascii` rejected the host
    IdnaError,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::InvalidPath => "Invalid path",
            Self::InvalidQuery => "Invalid query",
            Self::InvalidFragment => "Invalid fragment",
            Self::RelativeUrlWithoutBase => "Relative URL without base",
            Self::IdnaError => "IDNA processing error",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
