use bounce_fields::address::{final_form, find, is_included, is_mailer_daemon};
use bounce_fields::expand::{alias, verp};
use bounce_fields::syntax::is_email_address;
use bounce_fields::*;

// --- address::find ---

#[test]
fn test_find_quoted_name_with_comma() {
    let triple = find("\"Neko, Nyaan\" <neko@example.jp> (cat)");
    assert_eq!(triple.address, "neko@example.jp");
    assert_eq!(triple.name, "\"Neko, Nyaan\"");
    assert_eq!(triple.comment, "(cat)");
}

#[test]
fn test_find_bare_address() {
    let triple = find("neko@example.jp");
    assert_eq!(triple.address, "neko@example.jp");
    assert_eq!(triple.comment, "");
}

#[test]
fn test_find_angle_address() {
    let triple = find("<neko@example.jp>");
    assert_eq!(triple.address, "neko@example.jp");
    assert_eq!(triple.name, "");
}

#[test]
fn test_find_display_name() {
    let triple = find("Neko   <neko@example.jp>");
    assert_eq!(triple.address, "neko@example.jp");
    assert_eq!(triple.name, "Neko");
}

#[test]
fn test_find_comment_inside_address() {
    let triple = find("<neko(cat)@example.jp>");
    assert_eq!(triple.address, "neko@example.jp");
    assert_eq!(triple.comment, "(cat)");

    let triple = find("neko(cat)@example.jp");
    assert_eq!(triple.address, "neko@example.jp");
    assert_eq!(triple.comment, "(cat)");
}

#[test]
fn test_find_mailer_daemon() {
    let triple = find("MAILER-DAEMON");
    assert_eq!(triple.address, "MAILER-DAEMON");
}

#[test]
fn test_find_first_of_many() {
    let triple = find("<neko@example.jp>, <cat@example.org>");
    assert_eq!(triple.address, "neko@example.jp");
}

#[test]
fn test_find_nothing() {
    assert!(find("abc").is_empty());
    assert!(find("").is_empty());
    assert_eq!(find("nekochan").address, "");
}

// --- helpers ---

#[test]
fn test_final_form() {
    assert_eq!(final_form("<neko@example.jp>"), "neko@example.jp");
    assert_eq!(final_form("neko@example.jp"), "neko@example.jp");
    assert_eq!(final_form("<a@b@c>"), "<a@b@c>");
}

#[test]
fn test_is_included() {
    assert!(is_included("Neko <neko@example.jp>"));
    assert!(is_included("<neko@example.jp>"));
    assert!(!is_included("nekochan"));
    assert!(!is_included("neko@"));
}

#[test]
fn test_is_mailer_daemon() {
    assert!(is_mailer_daemon("Mail Delivery Subsystem <MAILER-DAEMON@example.jp>"));
    assert!(is_mailer_daemon("postmaster@example.org"));
    assert!(is_mailer_daemon("Postmaster"));
    assert!(!is_mailer_daemon("neko@example.jp"));
}

// --- expand ---

#[test]
fn test_verp() {
    assert_eq!(verp("bounce+neko=example.jp@example.org"), "neko@example.jp");
    assert_eq!(verp("\"neko+cat=example.jp\"@example.org"), "");
    assert_eq!(verp("neko@example.jp"), "");
    assert_eq!(verp(""), "");
}

#[test]
fn test_alias() {
    assert_eq!(alias("neko+straycat@example.jp"), "neko@example.jp");
    assert_eq!(alias("neko@example.jp"), "");
    assert_eq!(alias("+neko@example.jp"), "");
    assert_eq!(alias("\"neko+cat\"@example.jp"), "");
}

// --- EmailAddress::rise ---

#[test]
fn test_rise_alias() {
    let email = EmailAddress::rise(&find("Neko <neko+straycat@example.jp>")).unwrap();
    assert_eq!(email.address, "neko+straycat@example.jp");
    assert_eq!(email.user, "neko+straycat");
    assert_eq!(email.host, "example.jp");
    assert_eq!(email.alias, "neko@example.jp");
    assert_eq!(email.verp, "");
    assert_eq!(email.name, "Neko");
    assert_eq!(email.original(), "neko@example.jp");
}

#[test]
fn test_rise_verp() {
    let email = EmailAddress::rise(&find("<bounce+neko=example.jp@example.org>")).unwrap();
    assert_eq!(email.verp, "neko@example.jp");
    assert_eq!(email.alias, "");
    assert_eq!(email.original(), "neko@example.jp");
}

#[test]
fn test_rise_mailer_daemon() {
    let email = EmailAddress::rise(&AddressTriple::new("MAILER-DAEMON", "", "")).unwrap();
    assert_eq!(email.address, "MAILER-DAEMON");
    assert_eq!(email.user, "MAILER-DAEMON");
    assert_eq!(email.host, "");
    assert!(email.is_mailer_daemon());
}

#[test]
fn test_rise_rejects() {
    assert!(EmailAddress::rise(&AddressTriple::default()).is_none());
    assert!(EmailAddress::rise(&AddressTriple::new("nekochan", "", "")).is_none());
    assert!(EmailAddress::rise(&AddressTriple::new("mailer daemon", "", "")).is_none());
}

#[test]
fn test_rise_address_is_valid() {
    let fields = [
        "\"Neko, Nyaan\" <neko@example.jp> (cat)",
        "neko@example.jp",
        "Neko <neko+straycat@example.jp>",
        "<neko(cat)@example.jp>",
        "<bounce+neko=example.jp@example.org>",
    ];
    for e in fields {
        let email = EmailAddress::rise(&find(e)).unwrap();
        assert!(is_email_address(&email.address), "{e}");
    }
}

#[test]
fn test_find_is_idempotent() {
    let first = find("Neko <neko@example.jp>");
    let again = find(&first.address);
    assert_eq!(again.address, first.address);
}

// --- FromStr / Display ---

#[test]
fn test_email_address_from_str() {
    let email: EmailAddress = "Neko <neko@example.jp> (cat)".parse().unwrap();
    assert_eq!(email.address, "neko@example.jp");
    assert_eq!(email.to_string(), "Neko <neko@example.jp> (cat)");

    let err = "nekochan".parse::<EmailAddress>().unwrap_err();
    assert!(matches!(err, ParseError::NoAddress(_)));
}

#[test]
fn test_email_address_display_bare() {
    let email: EmailAddress = "neko@example.jp".parse().unwrap();
    assert_eq!(email.address, "neko@example.jp");
    assert_eq!(email.comment, "");
}
