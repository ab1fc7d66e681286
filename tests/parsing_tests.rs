#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

//! Relative resolution, file-scheme quirks, host forms, and dot-segment
//! handling.

use whurl::{Host, ParseError, Url};

fn resolve(input: &str, base: &str) -> String {
    let base = Url::parse(base).unwrap();
    Url::parse_with_base(input, &base).unwrap().href()
}

#[test]
fn test_relative_paths() {
    let base = "http://example.com/a/b/c";
    assert_eq!(resolve("d", base), "http://example.com/a/b/d");
    assert_eq!(resolve("./d", base), "http://example.com/a/b/d");
    assert_eq!(resolve("../d", base), "http://example.com/a/d");
    assert_eq!(resolve("../../d", base), "http://example.com/d");
    // .. never climbs above the root
    assert_eq!(resolve("../../../../d", base), "http://example.com/d");
    assert_eq!(resolve("/d", base), "http://example.com/d");
    assert_eq!(resolve("", base), "http://example.com/a/b/c");
}

#[test]
fn test_relative_query_and_fragment() {
    let base = "http://example.com/p?old=1#old";
    assert_eq!(resolve("?new=2", base), "http://example.com/p?new=2");
    assert_eq!(resolve("#new", base), "http://example.com/p?old=1#new");
    assert_eq!(resolve("", base), "http://example.com/p?old=1");
}

#[test]
fn test_protocol_relative() {
    assert_eq!(
        resolve("//other.org/x", "https://example.com/a"),
        "https://other.org/x"
    );
}

#[test]
fn test_scheme_relative_special() {
    // same special scheme without // resolves relative to the base
    assert_eq!(
        resolve("http:d", "http://example.com/a/b"),
        "http://example.com/a/d"
    );
    assert_eq!(
        resolve("http://other/d", "http://example.com/a/b"),
        "http://other/d"
    );
}

#[test]
fn test_relative_backslash() {
    assert_eq!(
        resolve("\\d", "http://example.com/a/b"),
        "http://example.com/d"
    );
}

#[test]
fn test_dot_segment_spellings() {
    let base = "http://example.com/";
    assert_eq!(
        resolve("/a/%2e/b", base),
        "http://example.com/a/b"
    );
    assert_eq!(
        resolve("/a/%2E%2e/b", base),
        "http://example.com/b"
    );
    assert_eq!(
        resolve("/a/.%2E/b", base),
        "http://example.com/b"
    );
    // trailing dot segments leave a trailing slash
    assert_eq!(resolve("/a/b/..", base), "http://example.com/a/");
    assert_eq!(resolve("/a/b/.", base), "http://example.com/a/b/");
}

#[test]
fn test_cannot_be_a_base_resolution() {
    let base = Url::parse("mailto:someone@example.com").unwrap();
    assert!(base.cannot_be_a_base());

    let frag = Url::parse_with_base("#frag", &base).unwrap();
    assert_eq!(frag.href(), "mailto:someone@example.com#frag");
    assert!(frag.cannot_be_a_base());

    assert_eq!(
        Url::parse_with_base("other", &base),
        Err(ParseError::RelativeUrlWithoutBase)
    );
}

#[test]
fn test_file_base_resolution() {
    let base = "file:///C:/dir/doc.txt";
    assert_eq!(resolve("other.txt", base), "file:///C:/dir/other.txt");
    assert_eq!(resolve("/root.txt", base), "file:///C:/root.txt");
    assert_eq!(resolve("D|/fresh", base), "file:///D:/fresh");
    // .. stops at the drive letter
    assert_eq!(resolve("../../../up.txt", base), "file:///C:/up.txt");
}

#[test]
fn test_file_host_forms() {
    assert_eq!(Url::parse("file://localhost/x").unwrap().href(), "file:///x");
    let url = Url::parse("file://host.example/x").unwrap();
    assert_eq!(url.href(), "file://host.example/x");
    assert_eq!(url.host(), &Host::Domain("host.example".to_string()));
    // a drive letter is never a host
    assert_eq!(Url::parse("file://C:/x").unwrap().href(), "file:///C:/x");
}

#[test]
fn test_file_slash_counts() {
    assert_eq!(Url::parse("file:/x").unwrap().href(), "file:///x");
    assert_eq!(Url::parse("file:x").unwrap().href(), "file:///x");
    // leading empty segments collapse for file URLs
    assert_eq!(Url::parse("file:////x").unwrap().href(), "file:///x");
}

#[test]
fn test_host_case_and_percent_decoding() {
    let url = Url::parse("http://EXAMPLE.com/").unwrap();
    assert_eq!(url.hostname(), "example.com");

    let url = Url::parse("http://ex%61mple.com/").unwrap();
    assert_eq!(url.hostname(), "example.com");
}

#[test]
fn test_host_forbidden_characters() {
    assert_eq!(Url::parse("http://exa mple.com/"), Err(ParseError::InvalidHost));
    assert_eq!(Url::parse("http://exam<ple/"), Err(ParseError::InvalidHost));
    assert_eq!(Url::parse("http://h%2Fost/"), Err(ParseError::InvalidHost));
    // empty host where one is required
    assert_eq!(Url::parse("http:///"), Err(ParseError::InvalidHost));
    assert_eq!(Url::parse("http://user@/x"), Err(ParseError::InvalidHost));
}

#[test]
fn test_ipv4_detection_is_a_commitment() {
    // ends in a number, so IPv4 rules are binding
    assert_eq!(Url::parse("http://1.2.3.4.5/"), Err(ParseError::InvalidHost));
    assert_eq!(Url::parse("http://300.1.1.1/"), Err(ParseError::InvalidHost));
    // does not end in a number, so it is a domain
    assert_eq!(
        Url::parse("http://1.2.3.4.example/").unwrap().hostname(),
        "1.2.3.4.example"
    );
}

#[test]
fn test_ipv4_variants() {
    assert_eq!(Url::parse("http://127.1/").unwrap().hostname(), "127.0.0.1");
    assert_eq!(Url::parse("http://0X7F.0.0.1/").unwrap().hostname(), "127.0.0.1");
    assert_eq!(
        Url::parse("http://0xffffffff/").unwrap().hostname(),
        "255.255.255.255"
    );
    assert_eq!(Url::parse("http://0x100000000/"), Err(ParseError::InvalidHost));
}

#[test]
fn test_ipv6_hosts() {
    let url = Url::parse("http://[::ffff:192.168.1.1]/").unwrap();
    assert_eq!(url.hostname(), "[::ffff:c0a8:101]");
    assert_eq!(
        url.host(),
        &Host::Ipv6([0, 0, 0, 0, 0, 0xffff, 0xc0a8, 0x0101])
    );

    assert_eq!(Url::parse("http://[1::2::3]/"), Err(ParseError::InvalidHost));
    assert_eq!(Url::parse("http://[1:2]/"), Err(ParseError::InvalidHost));
    // IPv6 works for non-special schemes too
    assert_eq!(Url::parse("sc://[::1]/").unwrap().hostname(), "[::1]");
}

#[test]
fn test_ipv6_with_port() {
    let url = Url::parse("http://[::1]:8080/x").unwrap();
    assert_eq!(url.hostname(), "[::1]");
    assert_eq!(url.port(), Some(8080));
}

#[test]
fn test_opaque_hosts() {
    let url = Url::parse("sc://MixedCase.Host/p").unwrap();
    // opaque hosts keep their case and are not IP-parsed
    assert_eq!(url.hostname(), "MixedCase.Host");
    assert_eq!(url.host(), &Host::Opaque("MixedCase.Host".to_string()));

    let url = Url::parse("sc://1.2.3.4/p").unwrap();
    assert_eq!(url.host(), &Host::Opaque("1.2.3.4".to_string()));

    assert_eq!(Url::parse("sc://a b/"), Err(ParseError::InvalidHost));
}

#[test]
fn test_credentials_splitting() {
    let url = Url::parse("http://u:p:q@host/").unwrap();
    // only the first colon splits
    assert_eq!(url.username(), "u");
    assert_eq!(url.password(), "p%3Aq");

    let url = Url::parse("http://a@b@host/").unwrap();
    // everything before the last @ is userinfo
    assert_eq!(url.username(), "a%40b");
    assert_eq!(url.href(), "http://a%40b@host/");
}

#[test]
fn test_userinfo_encoding() {
    let url = Url::parse("http://us er:pa ss@host/").unwrap();
    assert_eq!(url.username(), "us%20er");
    assert_eq!(url.password(), "pa%20ss");
}

#[test]
fn test_port_parsing() {
    assert_eq!(Url::parse("http://h:0/").unwrap().port(), Some(0));
    assert_eq!(Url::parse("http://h:65535/").unwrap().port(), Some(65535));
    // empty port is allowed and means none
    assert_eq!(Url::parse("http://h:/x").unwrap().href(), "http://h/x");
    assert_eq!(Url::parse("http://h:80/").unwrap().port(), None);
}

#[test]
fn test_trailing_empty_path_segments_survive() {
    assert_eq!(Url::parse("http://h/a//b//").unwrap().pathname(), "/a//b//");
}

#[test]
fn test_double_slash_path_marker() {
    let url = Url::parse("foo:/.//bar").unwrap();
    assert_eq!(url.pathname(), "//bar");
    assert_eq!(url.href(), "foo:/.//bar");
}
