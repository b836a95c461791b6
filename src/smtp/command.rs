//! SMTP commands such as `RCPT TO` in session transcripts

use crate::strings;

/// Every command recognized by [`test`]
static AVAILABLE: &[&str] = &[
    "HELO", "EHLO", "MAIL", "RCPT", "DATA", "QUIT", "RSET", "NOOP", "VRFY", "ETRN", "EXPN", "HELP",
    "AUTH", "STARTTLS", "XFORWARD",
];

/// Prefixes [`find`] looks for, in scan order
static DETECTABLE: &[&str] = &[
    "HELO",
    "EHLO",
    "STARTTLS",
    "AUTH PLAIN",
    "AUTH LOGIN",
    "AUTH CRAM-",
    "AUTH DIGEST-",
    "MAIL F",
    "RCPT",
    "RCPT T",
    "DATA",
    "QUIT",
    "XFORWARD",
];

/// Returns true when `text` contains an SMTP command, ignoring case
#[must_use]
pub fn test(text: &str) -> bool {
    text.len() >= 4 && strings::contains_any(&text.to_uppercase(), AVAILABLE)
}

/// Returns the SMTP command found in `text`, such as `"RCPT"` or `"STARTTLS"`.
///
/// When several commands appear, the one detected last in the scan order
/// wins. A single-word command glued to letters, digits or `@` is part of an
/// address or a hostname (`DATABASE@EXAMPLE.JP`) and does not count.
#[must_use]
pub fn find(text: &str) -> String {
    if !test(text) {
        return String::new();
    }

    let padded = format!(" {text} ");
    let bytes = padded.as_bytes();
    let mut found: Vec<&str> = Vec::with_capacity(4);

    for &e in DETECTABLE {
        let Some(p0) = text.find(e) else {
            continue;
        };
        if !e.contains(' ') {
            let before = bytes[p0];
            let after = bytes.get(p0 + e.len() + 1).copied().unwrap_or(b' ');
            if is_glued(before) || is_glued(after) {
                continue;
            }
        }

        let head = match &e[..4] {
            "STAR" => "STARTTLS",
            "XFOR" => "XFORWARD",
            other => other,
        };
        if !found.contains(&head) {
            found.push(head);
        }
    }
    found.last().map(|e| (*e).to_string()).unwrap_or_default()
}

/// Digits, `@`, `A`-`Z` and `a`-`z`
const fn is_glued(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'@'..=b'Z' | b'a'..=b'z')
}
