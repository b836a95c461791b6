//! Enhanced mail system status codes (RFC3463) such as `5.1.1`

use crate::ipv4;
use crate::strings;
use tracing::trace;

/// Class markers searched when no usable hint is given
static MARKERS: &[&str] = &["5.", "4.", "2."];

/// Replacement for IPv4 literals so their octets never read as a status code
const MASKED_IPV4: &str = "***.***.***.***";

/// Pairs of (weaker, stronger) codes; `*` matches any detail
static PREFERENCE: &[(&str, &str)] = &[
    ("5.5.*", "5.1.1"),
    ("5.3.0", "5.5.*"),
    ("5.1.3", "5.7.*"),
    ("5.1.1", "5.2.*"),
    ("4.7.0", "4.4.*"),
];

/// Returns true when `code` is a valid status code: `class.subject.detail`
/// with class 2, 4 or 5, subject 0 through 7 and a numeric detail.
#[must_use]
pub fn test(code: &str) -> bool {
    if code.len() < 5 || code.len() > 7 {
        return false;
    }

    let fields: Vec<u16> = code
        .split('.')
        .filter(|e| strings::is_digits(e))
        .filter_map(|e| e.parse().ok())
        .collect();
    if fields.len() != 3 || code.matches('.').count() != 2 {
        return false;
    }
    matches!(fields[0], 2 | 4 | 5) && fields[1] <= 7
}

/// Returns true for the catch-all codes `2.0.0`, `4.0.0`, `5.0.0` and for
/// an empty string.
#[must_use]
pub fn is_ambiguous(code: &str) -> bool {
    code.is_empty() || matches!(code, "2.0.0" | "4.0.0" | "5.0.0")
}

/// Returns the status code found in `logs`.
///
/// `hint` is a reply code such as `"550"` or a bare class digit; its first
/// character restricts the search to that class. IPv4 literals are masked
/// before scanning. A code preceded by a digit, `.`, `/` or `v` is part of a
/// version string or a longer number and is skipped. The catch-all `x.0.0`
/// codes and `4.4.7` are only used when nothing more specific is present.
#[must_use]
pub fn find(logs: &str, hint: &str) -> String {
    if logs.len() < 7 {
        return String::new();
    }

    let markers: &[&str] = match hint.as_bytes().first() {
        Some(b'2') => &["2."],
        Some(b'4') => &["4."],
        Some(b'5') => &["5."],
        _ => MARKERS,
    };

    let mut text = format!(" {logs}   ");
    for e in ipv4::find_ipv4_addresses(&text) {
        text = text.replace(&e, MASKED_IPV4);
    }

    let mut positions: Vec<(usize, &str)> = Vec::with_capacity(10);
    for &e in markers {
        let mut cursor = 0;
        while let Some(p) = strings::index_from(&text, e, cursor) {
            positions.push((p, e));
            cursor = p + 5;
        }
    }
    if positions.is_empty() {
        return String::new();
    }
    positions.sort_unstable_by_key(|&(p, _)| p);

    let bytes = text.as_bytes();
    let at = |i: usize| bytes.get(i).copied().unwrap_or(0);
    let mut found: Vec<String> = Vec::with_capacity(2);
    let mut fallback = String::new();

    for (p, marker) in positions {
        let previous = at(p - 1);
        if previous.is_ascii_digit() || matches!(previous, b'.' | b'/' | b'v' | b'V') {
            continue;
        }
        let subject = at(p + 2);
        if !(b'0'..=b'7').contains(&subject) || at(p + 3) != b'.' || !at(p + 4).is_ascii_digit() {
            continue;
        }

        let mut code = format!("{marker}{}.{}", char::from(subject), char::from(at(p + 4)));
        if is_ambiguous(&code) || code == "4.4.7" {
            trace!(code = %code, "deferring status code");
            fallback = code;
            continue;
        }

        // Up to two more detail digits; a fourth one means a longer number
        if at(p + 5).is_ascii_digit() {
            code.push(char::from(at(p + 5)));
            if at(p + 6).is_ascii_digit() {
                if at(p + 7).is_ascii_digit() {
                    continue;
                }
                code.push(char::from(at(p + 6)));
            }
        }
        found.push(code);
    }

    if !fallback.is_empty() {
        found.push(fallback);
    }
    found
        .into_iter()
        .reduce(|acc, e| prefer(&acc, &e, ""))
        .unwrap_or_default()
}

/// Chooses the more informative of two status codes.
///
/// `hint` is the reply code of the same session; when the two codes belong
/// to different classes the one in the reply code's class wins.
///
/// ```
/// use bounce_fields::smtp::status::prefer;
///
/// assert_eq!(prefer("5.1.1", "5.5.0", ""), "5.1.1");
/// assert_eq!(prefer("5.7", "5.7.26", "421"), "5.7.26");
/// assert_eq!(prefer("4.2.1", "5.7.0", "421"), "4.2.1");
/// ```
#[must_use]
pub fn prefer(lhs: &str, rhs: &str, hint: &str) -> String {
    preferred(lhs, rhs, hint).to_string()
}

fn preferred<'a>(lhs: &'a str, rhs: &'a str, hint: &str) -> &'a str {
    if rhs.is_empty() || lhs == rhs {
        return lhs;
    }
    if lhs.is_empty() {
        return rhs;
    }

    match (test(lhs), test(rhs)) {
        (true, false) => return lhs,
        (false, true) => return rhs,
        _ => {}
    }
    match (is_ambiguous(lhs), is_ambiguous(rhs)) {
        (true, false) => return rhs,
        (false, true) => return lhs,
        _ => {}
    }
    if lhs == "4.4.7" {
        return rhs;
    }
    if rhs == "4.4.7" {
        return lhs;
    }

    let class = rhs.as_bytes()[0];
    if lhs.as_bytes()[0] != class {
        return if hint.as_bytes().first() == Some(&class) {
            rhs
        } else {
            lhs
        };
    }

    for (weaker, stronger) in PREFERENCE {
        if is_like(lhs, weaker) && is_like(rhs, stronger) {
            return rhs;
        }
        if is_like(rhs, weaker) && is_like(lhs, stronger) {
            return lhs;
        }
    }

    if has_zero_detail(lhs) && !has_zero_detail(rhs) {
        rhs
    } else {
        lhs
    }
}

/// Matches `code` against a pattern such as `5.5.*`
fn is_like(code: &str, pattern: &str) -> bool {
    pattern
        .strip_suffix('*')
        .map_or(code == pattern, |prefix| code.starts_with(prefix))
}

fn has_zero_detail(code: &str) -> bool {
    code.rsplit('.')
        .next()
        .is_some_and(|e| e.parse::<u16>().is_ok_and(|v| v == 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_like() {
        assert!(is_like("5.5.0", "5.5.*"));
        assert!(is_like("5.5.21", "5.5.*"));
        assert!(!is_like("5.1.0", "5.5.*"));
        assert!(is_like("5.1.1", "5.1.1"));
        assert!(!is_like("5.1.10", "5.1.1"));
    }

    #[test]
    fn test_has_zero_detail() {
        assert!(has_zero_detail("5.4.0"));
        assert!(!has_zero_detail("5.4.1"));
        assert!(!has_zero_detail("5.4.10"));
    }
}
