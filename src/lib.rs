#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod host;
mod ipv4;
mod ipv6;
mod parser;
mod record;
mod scheme;
mod unicode;
mod url;

// Public API
pub use error::ParseError;
pub use host::Host;
pub use url::Url;

pub type Result<T> = core::result::Result<T, ParseError>;
