/// URL parser state machine states, per the WHATWG URL Standard.
///
/// The states in `STATE_OVERRIDES` may also be supplied as a state
/// override, making the driver parse a single field of an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    SchemeStart,
    Scheme,
    NoScheme,
    SpecialRelativeOrAuthority,
    PathOrAuthority,
    Relative,
    RelativeSlash,
    SpecialAuthoritySlashes,
    SpecialAuthorityIgnoreSlashes,
    Authority,
    /// Host parsing after an authority
    Host,
    /// Same transitions as `Host`, but a `:` terminates an override run
    Hostname,
    Port,
    File,
    FileSlash,
    FileHost,
    PathStart,
    Path,
    /// Single-segment path of a cannot-be-a-base URL
    OpaquePath,
    Query,
    Fragment,
}

/// The states a caller may start the driver in to reparse one field
pub const STATE_OVERRIDES: &[State] = &[
    State::SchemeStart,
    State::Host,
    State::Hostname,
    State::Port,
    State::PathStart,
    State::Query,
    State::Fragment,
];
