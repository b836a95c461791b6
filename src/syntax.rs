//! RFC5322 address syntax checks
//!
//! A leading `.` or a `.@` in the local part is accepted: both still show up
//! in real bounce messages.

use crate::hostname;

pub use crate::hostname::is_domain_literal;

/// Returns true when `email` is a syntactically valid email address.
///
/// ```text
/// addr-spec       = local-part "@" domain
/// local-part      = dot-atom / quoted-string / obs-local-part
/// domain          = dot-atom / domain-literal / obs-domain
/// ```
#[must_use]
pub fn is_email_address(email: &str) -> bool {
    // n@e.e
    if email.len() < 5 {
        return false;
    }

    let email = email.trim_matches([' ', '\t']);
    let Some(lasta) = email.rfind('@') else {
        return false;
    };
    if email.len() > 254 || lasta < 1 || lasta > 64 || email.len() - lasta > 253 {
        return false;
    }

    let quoted = is_quoted_address(email);
    if !quoted && (email.matches('@').count() > 1 || email.find(' ').is_some_and(|p| p > 0)) {
        return false;
    }

    let bytes = email.as_bytes();
    if !bytes[..lasta]
        .iter()
        .enumerate()
        .all(|(j, &c)| is_local_part_byte(bytes, j, c, lasta, quoted))
    {
        return false;
    }

    let literal = is_domain_literal(email);
    if !bytes[lasta..].iter().all(|&c| is_domain_byte(c, literal)) {
        return false;
    }
    literal || hostname::is_internet_host(&email[lasta + 1..])
}

fn is_local_part_byte(bytes: &[u8], j: usize, c: u8, lasta: usize, quoted: bool) -> bool {
    if !(32..=126).contains(&c) {
        return false;
    }
    if j == 0 {
        return true;
    }

    if quoted {
        if bytes[j - 1] == b'\\' {
            // Only `\\` and `\"` are escapes
            c == b'\\' || c == b'"'
        } else {
            // An unescaped `"` may only close the local part
            c != b'"' || j + 1 >= lasta
        }
    } else {
        !b",@:;()<>[]".contains(&c)
    }
}

fn is_domain_byte(c: u8, literal: bool) -> bool {
    if c == b'@' {
        return true;
    }
    if c < b'-' || c == b'/' || c == b'\\' || c > b'z' {
        return false;
    }

    if literal {
        // "[IPv4:192.0.2.25]"
        !(b';'..=b'?').contains(&c) && !(b'^'..=b'`').contains(&c)
    } else {
        !(b':'..=b'?').contains(&c) && !(b'['..=b'`').contains(&c)
    }
}

/// Returns true when the local part of `email` is a quoted string such as
/// `"neko kijitora"@example.jp`.
#[must_use]
pub fn is_quoted_address(email: &str) -> bool {
    email.starts_with('"') && email.contains("\"@")
}

/// Returns true when `text` is wrapped in parentheses like `(neko, cat)`
#[must_use]
pub fn is_comment(text: &str) -> bool {
    text.starts_with('(') && text.ends_with(')')
}
