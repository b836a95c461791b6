use bounce_fields::hostname::is_internet_host;
use bounce_fields::syntax::{is_comment, is_domain_literal, is_email_address, is_quoted_address};

// --- is_email_address ---

#[test]
fn test_valid_addresses() {
    for e in [
        "neko@example.jp",
        "nyaan.chan@example.co.jp",
        "neko+straycat@example.jp",
        "bounce+neko=example.jp@example.org",
        "\"neko cat\"@example.jp",
        "neko@[IPv4:192.0.2.25]",
        "neko@[IPv6:2001:db8::1]",
        "  neko@example.jp\t",
    ] {
        assert!(is_email_address(e), "{e}");
    }
}

#[test]
fn test_invalid_addresses() {
    for e in [
        "",
        "neko",
        "neko@example",
        "@example.jp",
        "neko cat@example.jp",
        "neko@@example.jp",
        "neko(cat)@example.jp",
        "neko@example.123",
        "neko@exa_mple.jp",
        "neko@[IPv4:999.0.2.25]",
    ] {
        assert!(!is_email_address(e), "{e}");
    }
}

#[test]
fn test_local_part_length() {
    let local = "n".repeat(64);
    assert!(is_email_address(&format!("{local}@example.jp")));
    let local = "n".repeat(65);
    assert!(!is_email_address(&format!("{local}@example.jp")));
}

// --- predicates ---

#[test]
fn test_is_quoted_address() {
    assert!(is_quoted_address("\"neko\"@example.jp"));
    assert!(!is_quoted_address("neko@example.jp"));
    assert!(!is_quoted_address("neko\"@example.jp"));
}

#[test]
fn test_is_comment() {
    assert!(is_comment("(cat)"));
    assert!(is_comment("(neko, cat)"));
    assert!(!is_comment("cat)"));
    assert!(!is_comment("(cat"));
}

#[test]
fn test_is_domain_literal() {
    assert!(is_domain_literal("neko@[IPv4:192.0.2.25]"));
    assert!(is_domain_literal("<neko@[IPv4:192.0.2.25]>"));
    assert!(is_domain_literal("neko@[IPv6:2001:db8::1]"));
    assert!(!is_domain_literal("neko@[IPv4:192.0.2]"));
    assert!(!is_domain_literal("neko@example.jp"));
    assert!(!is_domain_literal("e@[192.0.2.25]"));
}

// --- is_internet_host ---

#[test]
fn test_is_internet_host() {
    assert!(is_internet_host("localhost"));
    assert!(is_internet_host("localhost6"));
    assert!(is_internet_host("example.jp"));
    assert!(is_internet_host("mx1.example.com"));
    assert!(is_internet_host("xn--bad.example"));
    assert!(is_internet_host("xn--r8jz45g.xn--zckzah"));
}

#[test]
fn test_is_not_internet_host() {
    for e in [
        "",
        "a.b",
        "example",
        "-bad.com",
        ".example.jp",
        "bad-.com-",
        "a--b.com",
        "mx..example.jp",
        "exa_mple.jp",
        "example.123",
        "192.0.2.25",
    ] {
        assert!(!is_internet_host(e), "{e}");
    }
}
