use super::state::State;
use crate::character_sets::is_url_code_point;
use crate::checkers::{is_windows_drive_letter, starts_with_windows_drive_letter};
use crate::compat::{String, ToString, Vec};
use crate::error::{ParseError, Result};
use crate::host::{Host, parse_host};
use crate::record::UrlRecord;
use crate::scheme::{is_default_port, is_special_scheme};
use crate::unicode::percent_encode::{
    C0_CONTROL_SET, FRAGMENT_SET, PATH_SET, QUERY_SET, SPECIAL_QUERY_SET, USERINFO_SET,
    percent_encode_byte_into,
};
use percent_encoding::AsciiSet;

/// What a state handler asks the driver to do with the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Move to the next byte
    Advance,
    /// Run the (new) state on the same byte without advancing
    Reprocess,
    /// Stop and return the record (override-mode exit)
    Done,
}

/// The state-machine driver.
///
/// Consumes the preprocessed input one byte at a time, with an EOF
/// sentinel (`None`) after the last byte. All writes go through a scratch
/// record that the caller commits only on success.
pub(crate) struct ParserContext<'a> {
    input: Vec<u8>,
    pointer: usize,
    base: Option<&'a UrlRecord>,
    url: UrlRecord,
    state: State,
    state_override: Option<State>,
    buffer: Vec<u8>,
    at_sign_seen: bool,
    inside_brackets: bool,
    password_token_seen: bool,
    validation_error: bool,
}

impl<'a> ParserContext<'a> {
    pub(crate) fn new(
        input: Vec<u8>,
        base: Option<&'a UrlRecord>,
        url: Option<UrlRecord>,
        state_override: Option<State>,
        validation_error: bool,
    ) -> Self {
        Self {
            input,
            pointer: 0,
            base,
            url: url.unwrap_or_default(),
            state: state_override.unwrap_or(State::SchemeStart),
            state_override,
            buffer: Vec::new(),
            at_sign_seen: false,
            inside_brackets: false,
            password_token_seen: false,
            validation_error,
        }
    }

    /// Run the machine to completion. Returns the record and the
    /// non-fatal validation-error flag.
    pub(crate) fn run(mut self) -> Result<(UrlRecord, bool)> {
        loop {
            let byte = self.input.get(self.pointer).copied();

            let action = match self.state {
                State::SchemeStart => self.parse_scheme_start(byte)?,
                State::Scheme => self.parse_scheme(byte)?,
                State::NoScheme => self.parse_no_scheme(byte)?,
                State::SpecialRelativeOrAuthority => {
                    self.parse_special_relative_or_authority(byte)
                }
                State::PathOrAuthority => self.parse_path_or_authority(byte),
                State::Relative => self.parse_relative(byte)?,
                State::RelativeSlash => self.parse_relative_slash(byte)?,
                State::SpecialAuthoritySlashes => self.parse_special_authority_slashes(byte),
                State::SpecialAuthorityIgnoreSlashes => {
                    self.parse_special_authority_ignore_slashes(byte)
                }
                State::Authority => self.parse_authority(byte)?,
                State::Host | State::Hostname => self.parse_hostname(byte)?,
                State::Port => self.parse_port(byte)?,
                State::File => self.parse_file(byte),
                State::FileSlash => self.parse_file_slash(byte),
                State::FileHost => self.parse_file_host(byte)?,
                State::PathStart => self.parse_path_start(byte),
                State::Path => self.parse_path(byte),
                State::OpaquePath => self.parse_opaque_path(byte),
                State::Query => self.parse_query(byte),
                State::Fragment => self.parse_fragment(byte),
            };

            match action {
                Action::Done => break,
                Action::Reprocess => continue,
                Action::Advance => {
                    if self.pointer >= self.input.len() {
                        break;
                    }
                    self.pointer += 1;
                }
            }
        }

        Ok((self.url, self.validation_error))
    }

    /// Check the bytes after the current one against a prefix (lookahead)
    fn remaining_starts_with(&self, prefix: &[u8]) -> bool {
        self.input
            .get(self.pointer + 1..)
            .is_some_and(|rest| rest.starts_with(prefix))
    }

    /// The input from the current byte onward
    fn remaining_from_here(&self) -> &[u8] {
        self.input.get(self.pointer..).unwrap_or(&[])
    }

    fn buffer_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }

    fn buffer_str(&self) -> Result<&str> {
        core::str::from_utf8(&self.buffer).map_err(|_| ParseError::InvalidHost)
    }

    /// Percent-encode a byte under `set` into the raw segment buffer
    fn encode_byte_into_buffer(&mut self, byte: u8, set: &'static AsciiSet) {
        for chunk in percent_encoding::percent_encode(core::slice::from_ref(&byte), set) {
            self.buffer.extend_from_slice(chunk.as_bytes());
        }
    }

    /// Non-fatal validation error when a raw byte is not a URL code point
    /// or an incomplete percent escape
    fn check_url_code_point(&mut self, byte: u8) {
        if !is_url_code_point(byte) && byte != b'%' {
            self.validation_error = true;
        } else if byte == b'%' {
            let valid_escape = self
                .input
                .get(self.pointer + 1)
                .is_some_and(u8::is_ascii_hexdigit)
                && self
                    .input
                    .get(self.pointer + 2)
                    .is_some_and(u8::is_ascii_hexdigit);
            if !valid_escape {
                self.validation_error = true;
            }
        }
    }

    fn parse_scheme_start(&mut self, c: Option<u8>) -> Result<Action> {
        match c {
            Some(b) if b.is_ascii_alphabetic() => {
                self.buffer.push(b.to_ascii_lowercase());
                self.state = State::Scheme;
                Ok(Action::Advance)
            }
            _ if self.state_override.is_none() => {
                self.state = State::NoScheme;
                self.pointer = 0;
                Ok(Action::Reprocess)
            }
            _ => {
                self.validation_error = true;
                Err(ParseError::InvalidScheme)
            }
        }
    }

    fn parse_scheme(&mut self, c: Option<u8>) -> Result<Action> {
        match c {
            Some(b) if b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.') => {
                self.buffer.push(b.to_ascii_lowercase());
                Ok(Action::Advance)
            }
            Some(b':') => {
                let new_scheme = self.buffer_string();

                if self.state_override.is_some() {
                    // a scheme override may not cross the special boundary
                    if self.url.is_special() != is_special_scheme(&new_scheme) {
                        return Err(ParseError::InvalidScheme);
                    }
                    // file cannot adopt credentials or a port
                    if (self.url.includes_credentials() || self.url.port.is_some())
                        && new_scheme == "file"
                    {
                        return Err(ParseError::InvalidScheme);
                    }
                    // a file URL with an empty host cannot switch away
                    if self.url.scheme == "file"
                        && (self.url.host.is_empty() || !self.url.host.is_present())
                    {
                        return Err(ParseError::InvalidScheme);
                    }
                }

                self.url.scheme = new_scheme;
                self.buffer.clear();

                if self.state_override.is_some() {
                    if self
                        .url
                        .port
                        .is_some_and(|port| is_default_port(&self.url.scheme, port))
                    {
                        self.url.port = None;
                    }
                    return Ok(Action::Done);
                }

                if self.url.scheme == "file" {
                    if !self.remaining_starts_with(b"//") {
                        self.validation_error = true;
                    }
                    self.state = State::File;
                } else if self.url.is_special()
                    && self.base.is_some_and(|base| base.scheme == self.url.scheme)
                {
                    self.state = State::SpecialRelativeOrAuthority;
                } else if self.url.is_special() {
                    self.state = State::SpecialAuthoritySlashes;
                } else if self.remaining_starts_with(b"/") {
                    self.state = State::PathOrAuthority;
                    self.pointer += 1;
                } else {
                    self.url.cannot_be_a_base_url = true;
                    self.url.path.push(String::new());
                    self.state = State::OpaquePath;
                }
                Ok(Action::Advance)
            }
            _ if self.state_override.is_none() => {
                self.buffer.clear();
                self.state = State::NoScheme;
                self.pointer = 0;
                Ok(Action::Reprocess)
            }
            _ => {
                self.validation_error = true;
                Err(ParseError::InvalidScheme)
            }
        }
    }

    fn parse_no_scheme(&mut self, c: Option<u8>) -> Result<Action> {
        let Some(base) = self.base else {
            self.validation_error = true;
            return Err(ParseError::RelativeUrlWithoutBase);
        };

        if base.cannot_be_a_base_url {
            if c != Some(b'#') {
                self.validation_error = true;
                return Err(ParseError::RelativeUrlWithoutBase);
            }
            self.url.scheme = base.scheme.clone();
            self.url.path = base.path.clone();
            self.url.query = base.query.clone();
            self.url.fragment = Some(String::new());
            self.url.cannot_be_a_base_url = true;
            self.state = State::Fragment;
            return Ok(Action::Advance);
        }

        self.state = if base.scheme == "file" {
            State::File
        } else {
            State::Relative
        };
        Ok(Action::Reprocess)
    }

    fn parse_special_relative_or_authority(&mut self, c: Option<u8>) -> Action {
        if c == Some(b'/') && self.remaining_starts_with(b"/") {
            self.pointer += 1;
            self.state = State::SpecialAuthorityIgnoreSlashes;
            Action::Advance
        } else {
            self.validation_error = true;
            self.state = State::Relative;
            Action::Reprocess
        }
    }

    fn parse_path_or_authority(&mut self, c: Option<u8>) -> Action {
        if c == Some(b'/') {
            self.state = State::Authority;
            Action::Advance
        } else {
            self.state = State::Path;
            Action::Reprocess
        }
    }

    fn parse_relative(&mut self, c: Option<u8>) -> Result<Action> {
        let Some(base) = self.base else {
            return Err(ParseError::RelativeUrlWithoutBase);
        };
        self.url.scheme = base.scheme.clone();

        match c {
            None => {
                self.url.username = base.username.clone();
                self.url.password = base.password.clone();
                self.url.host = base.host.clone();
                self.url.port = base.port;
                self.url.path = base.path.clone();
                self.url.query = base.query.clone();
                Ok(Action::Advance)
            }
            Some(b'/') => {
                self.state = State::RelativeSlash;
                Ok(Action::Advance)
            }
            Some(b'\\') if self.url.is_special() => {
                self.validation_error = true;
                self.state = State::RelativeSlash;
                Ok(Action::Advance)
            }
            Some(b'?') => {
                self.url.username = base.username.clone();
                self.url.password = base.password.clone();
                self.url.host = base.host.clone();
                self.url.port = base.port;
                self.url.path = base.path.clone();
                self.url.query = Some(String::new());
                self.state = State::Query;
                Ok(Action::Advance)
            }
            Some(b'#') => {
                self.url.username = base.username.clone();
                self.url.password = base.password.clone();
                self.url.host = base.host.clone();
                self.url.port = base.port;
                self.url.path = base.path.clone();
                self.url.query = base.query.clone();
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
                Ok(Action::Advance)
            }
            Some(_) => {
                self.url.username = base.username.clone();
                self.url.password = base.password.clone();
                self.url.host = base.host.clone();
                self.url.port = base.port;
                self.url.path = base.path.clone();
                self.url.shorten_path();
                self.state = State::Path;
                Ok(Action::Reprocess)
            }
        }
    }

    fn parse_relative_slash(&mut self, c: Option<u8>) -> Result<Action> {
        match c {
            Some(b'/') => {
                self.state = if self.url.is_special() {
                    State::SpecialAuthorityIgnoreSlashes
                } else {
                    State::Authority
                };
                Ok(Action::Advance)
            }
            Some(b'\\') if self.url.is_special() => {
                self.validation_error = true;
                self.state = State::SpecialAuthorityIgnoreSlashes;
                Ok(Action::Advance)
            }
            _ => {
                let Some(base) = self.base else {
                    return Err(ParseError::RelativeUrlWithoutBase);
                };
                self.url.username = base.username.clone();
                self.url.password = base.password.clone();
                self.url.host = base.host.clone();
                self.url.port = base.port;
                self.state = State::Path;
                Ok(Action::Reprocess)
            }
        }
    }

    fn parse_special_authority_slashes(&mut self, c: Option<u8>) -> Action {
        if c == Some(b'/') && self.remaining_starts_with(b"/") {
            self.pointer += 1;
            self.state = State::SpecialAuthorityIgnoreSlashes;
            Action::Advance
        } else {
            self.validation_error = true;
            self.state = State::SpecialAuthorityIgnoreSlashes;
            Action::Reprocess
        }
    }

    fn parse_special_authority_ignore_slashes(&mut self, c: Option<u8>) -> Action {
        if matches!(c, Some(b'/') | Some(b'\\')) {
            self.validation_error = true;
            Action::Advance
        } else {
            self.state = State::Authority;
            Action::Reprocess
        }
    }

    fn parse_authority(&mut self, c: Option<u8>) -> Result<Action> {
        match c {
            Some(b'@') => {
                self.validation_error = true;
                if self.at_sign_seen {
                    let mut prefixed = Vec::with_capacity(self.buffer.len() + 3);
                    prefixed.extend_from_slice(b"%40");
                    prefixed.extend_from_slice(&self.buffer);
                    self.buffer = prefixed;
                }
                self.at_sign_seen = true;

                let credentials = core::mem::take(&mut self.buffer);
                for &b in &credentials {
                    if b == b':' && !self.password_token_seen {
                        self.password_token_seen = true;
                        continue;
                    }
                    if self.password_token_seen {
                        percent_encode_byte_into(&mut self.url.password, b, USERINFO_SET);
                    } else {
                        percent_encode_byte_into(&mut self.url.username, b, USERINFO_SET);
                    }
                }
                Ok(Action::Advance)
            }
            None | Some(b'/') | Some(b'?') | Some(b'#') => self.end_of_authority(),
            Some(b'\\') if self.url.is_special() => self.end_of_authority(),
            Some(b) => {
                self.buffer.push(b);
                Ok(Action::Advance)
            }
        }
    }

    /// Rewind to the start of the unconsumed buffer and reparse it as a host
    fn end_of_authority(&mut self) -> Result<Action> {
        if self.at_sign_seen && self.buffer.is_empty() {
            self.validation_error = true;
            return Err(ParseError::InvalidHost);
        }
        self.pointer -= self.buffer.len();
        self.buffer.clear();
        self.state = State::Host;
        Ok(Action::Reprocess)
    }

    fn parse_hostname(&mut self, c: Option<u8>) -> Result<Action> {
        if self.state_override.is_some() && self.url.scheme == "file" {
            self.state = State::FileHost;
            return Ok(Action::Reprocess);
        }

        match c {
            Some(b':') if !self.inside_brackets => {
                if self.buffer.is_empty() {
                    self.validation_error = true;
                    return Err(ParseError::InvalidHost);
                }

                let host = parse_host(self.buffer_str()?, !self.url.is_special())?;
                self.url.host = host;
                self.buffer.clear();
                self.state = State::Port;

                if self.state_override == Some(State::Hostname) {
                    return Ok(Action::Done);
                }
                Ok(Action::Advance)
            }
            None | Some(b'/') | Some(b'?') | Some(b'#') => self.end_of_host(),
            Some(b'\\') if self.url.is_special() => self.end_of_host(),
            Some(b) => {
                if b == b'[' {
                    self.inside_brackets = true;
                } else if b == b']' {
                    self.inside_brackets = false;
                }
                self.buffer.push(b);
                Ok(Action::Advance)
            }
        }
    }

    fn end_of_host(&mut self) -> Result<Action> {
        if self.url.is_special() && self.buffer.is_empty() {
            self.validation_error = true;
            return Err(ParseError::InvalidHost);
        }
        if self.state_override.is_some()
            && self.buffer.is_empty()
            && (self.url.includes_credentials() || self.url.port.is_some())
        {
            return Ok(Action::Done);
        }

        let host = parse_host(self.buffer_str()?, !self.url.is_special())?;
        self.url.host = host;
        self.buffer.clear();

        if self.state_override.is_some() {
            return Ok(Action::Done);
        }
        self.state = State::PathStart;
        Ok(Action::Reprocess)
    }

    fn parse_port(&mut self, c: Option<u8>) -> Result<Action> {
        match c {
            Some(b) if b.is_ascii_digit() => {
                self.buffer.push(b);
                Ok(Action::Advance)
            }
            None | Some(b'/') | Some(b'?') | Some(b'#') => self.end_of_port(),
            Some(b'\\') if self.url.is_special() => self.end_of_port(),
            _ if self.state_override.is_some() => self.end_of_port(),
            _ => {
                self.validation_error = true;
                Err(ParseError::InvalidPort)
            }
        }
    }

    fn end_of_port(&mut self) -> Result<Action> {
        if !self.buffer.is_empty() {
            let port: u32 = self
                .buffer_string()
                .parse()
                .map_err(|_| ParseError::InvalidPort)?;
            if port > u32::from(u16::MAX) {
                self.validation_error = true;
                return Err(ParseError::InvalidPort);
            }
            let port = port as u16;

            if is_default_port(&self.url.scheme, port) {
                self.url.port = None;
            } else {
                self.url.port = Some(port);
            }
            self.buffer.clear();
        }

        if self.state_override.is_some() {
            return Ok(Action::Done);
        }
        self.state = State::PathStart;
        Ok(Action::Reprocess)
    }

    fn parse_file(&mut self, c: Option<u8>) -> Action {
        self.url.scheme = "file".to_string();
        self.url.host = Host::Empty;

        if matches!(c, Some(b'/') | Some(b'\\')) {
            if c == Some(b'\\') {
                self.validation_error = true;
            }
            self.state = State::FileSlash;
            return Action::Advance;
        }

        if let Some(base) = self.base.filter(|base| base.scheme == "file") {
            match c {
                None => {
                    self.url.host = base.host.clone();
                    self.url.path = base.path.clone();
                    self.url.query = base.query.clone();
                    Action::Advance
                }
                Some(b'?') => {
                    self.url.host = base.host.clone();
                    self.url.path = base.path.clone();
                    self.url.query = Some(String::new());
                    self.state = State::Query;
                    Action::Advance
                }
                Some(b'#') => {
                    self.url.host = base.host.clone();
                    self.url.path = base.path.clone();
                    self.url.query = base.query.clone();
                    self.url.fragment = Some(String::new());
                    self.state = State::Fragment;
                    Action::Advance
                }
                Some(_) => {
                    if starts_with_windows_drive_letter(self.remaining_from_here()) {
                        self.validation_error = true;
                    } else {
                        self.url.host = base.host.clone();
                        self.url.path = base.path.clone();
                        self.url.shorten_path();
                    }
                    self.state = State::Path;
                    Action::Reprocess
                }
            }
        } else {
            self.state = State::Path;
            Action::Reprocess
        }
    }

    fn parse_file_slash(&mut self, c: Option<u8>) -> Action {
        if matches!(c, Some(b'/') | Some(b'\\')) {
            if c == Some(b'\\') {
                self.validation_error = true;
            }
            self.state = State::FileHost;
            return Action::Advance;
        }

        if let Some(base) = self.base.filter(|base| base.scheme == "file") {
            if !starts_with_windows_drive_letter(self.remaining_from_here()) {
                match base.path.first() {
                    Some(first) if is_windows_drive_letter(first.as_bytes()) => {
                        // the drive letter survives even when the rest of
                        // the base path does not
                        self.url.path.push(first.clone());
                    }
                    _ => {
                        self.url.host = base.host.clone();
                    }
                }
            }
        }

        self.state = State::Path;
        Action::Reprocess
    }

    fn parse_file_host(&mut self, c: Option<u8>) -> Result<Action> {
        match c {
            None | Some(b'/') | Some(b'\\') | Some(b'?') | Some(b'#') => {
                if self.state_override.is_none() && is_windows_drive_letter(&self.buffer) {
                    // not a host: the buffer carries into the path state
                    // and becomes the first segment
                    self.validation_error = true;
                    self.state = State::Path;
                    return Ok(Action::Reprocess);
                }

                if self.buffer.is_empty() {
                    self.url.host = Host::Empty;
                    if self.state_override.is_some() {
                        return Ok(Action::Done);
                    }
                    self.state = State::PathStart;
                    return Ok(Action::Reprocess);
                }

                let mut host = parse_host(self.buffer_str()?, !self.url.is_special())?;
                if host == Host::Domain("localhost".to_string()) {
                    host = Host::Empty;
                }
                self.url.host = host;

                if self.state_override.is_some() {
                    return Ok(Action::Done);
                }
                self.buffer.clear();
                self.state = State::PathStart;
                Ok(Action::Reprocess)
            }
            Some(b) => {
                self.buffer.push(b);
                Ok(Action::Advance)
            }
        }
    }

    fn parse_path_start(&mut self, c: Option<u8>) -> Action {
        if self.url.is_special() {
            if c == Some(b'\\') {
                self.validation_error = true;
            }
            self.state = State::Path;
            if !matches!(c, Some(b'/') | Some(b'\\')) {
                Action::Reprocess
            } else {
                Action::Advance
            }
        } else if self.state_override.is_none() && c == Some(b'?') {
            self.url.query = Some(String::new());
            self.state = State::Query;
            Action::Advance
        } else if self.state_override.is_none() && c == Some(b'#') {
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
            Action::Advance
        } else if c.is_some() {
            self.state = State::Path;
            if c != Some(b'/') {
                Action::Reprocess
            } else {
                Action::Advance
            }
        } else {
            if self.state_override.is_some() && !self.url.host.is_present() {
                self.url.path.push(String::new());
            }
            Action::Advance
        }
    }

    fn parse_path(&mut self, c: Option<u8>) -> Action {
        let is_path_end = c.is_none()
            || c == Some(b'/')
            || (self.url.is_special() && c == Some(b'\\'))
            || (self.state_override.is_none() && matches!(c, Some(b'?') | Some(b'#')));

        if !is_path_end {
            if let Some(b) = c {
                self.check_url_code_point(b);
                self.encode_byte_into_buffer(b, PATH_SET);
            }
            return Action::Advance;
        }

        if self.url.is_special() && c == Some(b'\\') {
            self.validation_error = true;
        }

        let slash_next = c == Some(b'/') || (self.url.is_special() && c == Some(b'\\'));

        if is_double_dot_segment(&self.buffer) {
            self.url.shorten_path();
            if !slash_next {
                self.url.path.push(String::new());
            }
        } else if is_single_dot_segment(&self.buffer) {
            if !slash_next {
                self.url.path.push(String::new());
            }
        } else {
            if self.url.scheme == "file"
                && self.url.path.is_empty()
                && is_windows_drive_letter(&self.buffer)
            {
                if !matches!(self.url.host, Host::Empty) {
                    self.validation_error = true;
                    self.url.host = Host::Empty;
                }
                self.buffer[1] = b':';
            }
            let segment = String::from_utf8_lossy(&self.buffer).into_owned();
            self.url.path.push(segment);
        }
        self.buffer.clear();

        if self.url.scheme == "file" && matches!(c, None | Some(b'?') | Some(b'#')) {
            while self.url.path.len() > 1 && self.url.path[0].is_empty() {
                self.validation_error = true;
                self.url.path.remove(0);
            }
        }

        if c == Some(b'?') {
            self.url.query = Some(String::new());
            self.state = State::Query;
        } else if c == Some(b'#') {
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
        }

        Action::Advance
    }

    fn parse_opaque_path(&mut self, c: Option<u8>) -> Action {
        match c {
            Some(b'?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some(b'#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(b) => {
                self.check_url_code_point(b);
                let mut segment = self.url.path.pop().unwrap_or_default();
                percent_encode_byte_into(&mut segment, b, C0_CONTROL_SET);
                self.url.path.push(segment);
            }
            None => {}
        }
        Action::Advance
    }

    fn parse_query(&mut self, c: Option<u8>) -> Action {
        if self.state_override.is_none() && c == Some(b'#') {
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
            return Action::Advance;
        }

        if let Some(b) = c {
            self.check_url_code_point(b);
            let set = if self.url.is_special() {
                SPECIAL_QUERY_SET
            } else {
                QUERY_SET
            };
            let query = self.url.query.get_or_insert_with(String::new);
            percent_encode_byte_into(query, b, set);
        }
        Action::Advance
    }

    fn parse_fragment(&mut self, c: Option<u8>) -> Action {
        match c {
            // NUL is dropped with a validation error
            Some(0) => {
                self.validation_error = true;
            }
            Some(b) => {
                self.check_url_code_point(b);
                let fragment = self.url.fragment.get_or_insert_with(String::new);
                percent_encode_byte_into(fragment, b, FRAGMENT_SET);
            }
            None => {}
        }
        Action::Advance
    }
}

/// Check if a raw path segment is `.` or a percent-encoded spelling of it
fn is_single_dot_segment(segment: &[u8]) -> bool {
    segment == b"." || segment.eq_ignore_ascii_case(b"%2e")
}

/// Check if a raw path segment is `..` or a percent-encoded spelling of it
fn is_double_dot_segment(segment: &[u8]) -> bool {
    segment == b".."
        || segment.eq_ignore_ascii_case(b".%2e")
        || segment.eq_ignore_ascii_case(b"%2e.")
        || segment.eq_ignore_ascii_case(b"%2e%2e")
}
