use crate::compat::{Cow, String};
use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

// The percent-encode sets of the WHATWG URL spec, built by inclusion.
// https://url.spec.whatwg.org/#percent-encoded-bytes
// A byte is encoded iff it is in the set or >= 0x80.

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set: C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Query percent-encode set (non-special schemes): C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special-query percent-encode set: query + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Path percent-encode set: query + ?, \`, {, }
pub const PATH_SET: &AsciiSet = &QUERY_SET.add(b'?').add(b'`').add(b'{').add(b'}');

/// Userinfo percent-encode set: path + /, :, ;, =, @, [, \, ], ^, |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// Component percent-encode set: userinfo + $, %, &, +, ,
pub const COMPONENT_SET: &AsciiSet = &USERINFO_SET
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',');

/// Percent-encode a single byte under the given set, appending to `buffer`.
/// Hex digits are emitted uppercase.
pub fn percent_encode_byte_into(buffer: &mut String, byte: u8, encode_set: &'static AsciiSet) {
    for chunk in percent_encode(core::slice::from_ref(&byte), encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a byte slice under the given set, appending to `buffer`
pub fn percent_encode_into(buffer: &mut String, input: &[u8], encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode a byte slice under the given set, passing valid `%HH`
/// sequences through verbatim so already-encoded input is not re-encoded.
pub fn percent_encode_preserving_escapes(
    buffer: &mut String,
    input: &[u8],
    encode_set: &'static AsciiSet,
) {
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'%'
            && i + 2 < input.len()
            && input[i + 1].is_ascii_hexdigit()
            && input[i + 2].is_ascii_hexdigit()
        {
            buffer.push('%');
            buffer.push(input[i + 1] as char);
            buffer.push(input[i + 2] as char);
            i += 3;
        } else {
            percent_encode_byte_into(buffer, input[i], encode_set);
            i += 1;
        }
    }
}

/// Percent-decode a string to raw bytes. Decoding is total: a `%` not
/// followed by two hex digits passes through literally.
pub fn percent_decode_bytes(input: &str) -> Cow<'_, [u8]> {
    percent_encoding::percent_decode_str(input).into()
}

/// Percent-decode a string, replacing invalid UTF-8 with U+FFFD
pub fn percent_decode_lossy(input: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(input).decode_utf8_lossy()
}
