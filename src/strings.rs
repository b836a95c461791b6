//! Small string primitives shared by the finders

/// Sentinel prepended to a text so `select` can treat "start of text" as a delimiter
pub const LHS: &str = "<@>";

/// Sentinel appended to a text so `select` can treat "end of text" as a delimiter
pub const RHS: &str = "<$>";

/// Byte index of `part` in `whole`, searching from `start`.
///
/// A `start` inside a multi-byte character moves forward to the next
/// character.
#[must_use]
pub fn index_from(whole: &str, part: &str, start: usize) -> Option<usize> {
    let start = snap_forward(whole, start);
    if start >= whole.len() {
        return None;
    }
    whole[start..].find(part).map(|p| p + start)
}

/// Snap a byte index to the nearest valid UTF-8 char boundary (forwards)
const fn snap_forward(s: &str, idx: usize) -> usize {
    let mut i = idx;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Returns true when `text` contains any string in `list`
#[must_use]
pub fn contains_any(text: &str, list: &[&str]) -> bool {
    !text.is_empty() && list.iter().any(|e| text.contains(e))
}

/// Returns true when `text` starts with any string in `list`
#[must_use]
pub fn has_prefix_any(text: &str, list: &[&str]) -> bool {
    !text.is_empty() && list.iter().any(|e| text.starts_with(e))
}

/// Returns true when every string in `sort` occurs in `text`, in that order
/// and without overlapping.
#[must_use]
pub fn aligned(text: &str, sort: &[&str]) -> bool {
    if text.is_empty() || sort.is_empty() {
        return false;
    }

    let mut cursor = 0;
    for e in sort {
        match text[cursor..].find(e) {
            Some(p) => cursor += p + e.len(),
            None => return false,
        }
    }
    true
}

/// Returns true when `text` is a non-empty run of ASCII digits
#[must_use]
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Collapses runs of `ch` into a single `ch`
#[must_use]
pub fn squeeze(text: &str, ch: char) -> String {
    let mut squeezed = String::with_capacity(text.len());
    let mut previous = None;
    for c in text.chars() {
        if c != ch || previous != Some(ch) {
            squeezed.push(c);
        }
        previous = Some(c);
    }
    squeezed
}

/// Returns the text between `begin` and the next `until` in `whole[start..]`.
///
/// The search for `until` starts one character after the end of `begin`, so
/// `select("<>a>", "<", ">", 0)` is `">a"`. Use [`LHS`]/[`RHS`] with a text
/// prefixed/suffixed by the same sentinel to select up to a boundary of the
/// text itself. Returns an empty string when either delimiter is missing.
#[must_use]
pub fn select<'a>(whole: &'a str, begin: &str, until: &str, start: usize) -> &'a str {
    if whole.is_empty() || start + 2 > whole.len() {
        return "";
    }
    let Some(cv) = whole.get(start..) else {
        return "";
    };
    if cv.len() < 3 || cv.len() <= begin.len() + until.len() {
        return "";
    }

    let Some(head) = cv.find(begin) else {
        return "";
    };
    let from = head + begin.len();
    let Some(skip) = cv[from..].chars().next().map(char::len_utf8) else {
        return "";
    };
    match cv[from + skip..].find(until) {
        Some(tail) => &cv[from..from + skip + tail],
        None => "",
    }
}
