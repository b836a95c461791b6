//! SMTP reply codes (RFC5321 section 4.2) such as `550`

use crate::strings;

/// 2yz codes, in search order
const CLASS_2: &[&str] = &[
    "211", "214", "220", "221", "235", "250", "251", "252", "253", "334", "354",
];

/// 4yz codes, in search order
const CLASS_4: &[&str] = &[
    "421", "450", "451", "452", "422", "430", "432", "453", "454", "455", "458", "459",
];

/// 5yz codes, in search order
const CLASS_5: &[&str] = &[
    "550", "552", "553", "551", "521", "525", "523", "524", "530", "533", "534", "535", "538", "555",
    "556", "554", "500", "501", "502", "503", "504",
];

/// Class search order when no usable hint is given
static CLASSES: &[&[&str]] = &[CLASS_5, CLASS_4, CLASS_2];

/// Returns true when `code` is a valid SMTP reply code.
///
/// 211 through 556 with `yz` at most 59; 2yz stops at 221 except for 235
/// (RFC4954) and 250 through 253; 3yz is only 334 or 354.
#[must_use]
pub fn test(code: &str) -> bool {
    if code.len() != 3 || !strings::is_digits(code) {
        return false;
    }
    let Ok(reply) = code.parse::<u16>() else {
        return false;
    };
    if !(211..=556).contains(&reply) || reply % 100 > 59 {
        return false;
    }

    match reply / 100 {
        2 => reply == 235 || reply <= 221 || (250..=253).contains(&reply),
        3 => reply == 334 || reply == 354,
        _ => true,
    }
}

/// Returns the SMTP reply code found in `logs`.
///
/// `hint` is a status code such as `"5.1.1"` or a bare class digit; its first
/// character narrows the search to that class. Codes adjacent to a digit, `.`
/// or `/` are part of a longer token (an IP address, a version, a path) and
/// are skipped.
#[must_use]
pub fn find(logs: &str, hint: &str) -> String {
    if logs.len() < 3 || logs.to_uppercase().contains("X-UNIX") {
        return String::new();
    }

    let tables: &[&[&str]] = match hint.as_bytes().first() {
        Some(b'2') => &[CLASS_2],
        Some(b'4') => &[CLASS_4],
        Some(b'5') => &[CLASS_5],
        _ => CLASSES,
    };

    let padded = format!(" {logs} ");
    let bytes = padded.as_bytes();
    for e in tables.iter().flat_map(|table| table.iter()) {
        let mut cursor = 1;
        while let Some(p) = strings::index_from(&padded, e, cursor) {
            if !is_adjacent(bytes[p - 1]) && !is_adjacent(bytes[p + 3]) {
                return (*e).to_string();
            }
            cursor = p + 3;
        }
    }
    String::new()
}

/// `.`, `/` and digits
const fn is_adjacent(c: u8) -> bool {
    matches!(c, b'.'..=b'9')
}
