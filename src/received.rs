//! `Received:` trace header tokenizer (RFC5322 section 3.6.7)

use crate::ipv4;
use crate::types::ReceivedTokens;
use tracing::trace;

/// Trace-field labels, in the order of [`ReceivedTokens::as_array`]
static LABELS: &[&str] = &["from", "by", "via", "with", "id", "for"];

/// Headers written by a local delivery agent rather than by an SMTP hop
static LOCAL_MARKERS: &[&str] = &[
    "(qmail ",
    " invoked by uid",
    " invoked from network",
    " invoked by alias",
    "from mail pickup service by",
    "(postfix, from userid",
];

/// Alternative hostnames that tell nothing about the sending host
static UNINFORMATIVE: &[&str] = &["unknown", "localhost", "[127.0.0.1]", "[ipv6:::1]"];

const COMMENT_CHARS: [char; 3] = ['(', ')', ';'];

/// Splits a `Received:` header value into its trace tokens.
///
/// ```text
/// from mx1.example.com (c213502.kyoto.example.ne.jp [192.0.2.135])
///     by mx.example.jp (V8/cf) with ESMTP id 0000000000
///     for <kijitora@example.jp>; Thu, 29 Apr 2021 23:34:45 +0900
/// ```
///
/// When the `from` host is a bare name, `localhost` or an IP address, the
/// hostname found in the comment after it is used instead. Every slot is
/// lower-cased and free of comment characters; a slot is left empty when no
/// clean value exists.
#[must_use]
pub fn tokenize(header: &str) -> ReceivedTokens {
    if !header.contains(' ') {
        return ReceivedTokens::default();
    }
    let lower = header.to_lowercase();
    if LOCAL_MARKERS.iter().any(|e| lower.contains(e)) {
        trace!("locally generated Received header");
        return ReceivedTokens::default();
    }

    let words: Vec<&str> = header.split(' ').collect();
    let mut slots: [String; 6] = Default::default();
    let mut alternatives: Vec<String> = Vec::new();

    for (j, e) in words.iter().enumerate() {
        let Some(slot) = LABELS.iter().position(|v| e.eq_ignore_ascii_case(v)) else {
            continue;
        };
        let Some(value) = words.get(j + 1) else {
            continue;
        };
        slots[slot] = strip_comment(&value.to_lowercase());

        if slot != 0 {
            continue;
        }
        // from mx1.example.com (c213502.kyoto.example.ne.jp [192.0.2.135]) by ...
        let Some(comment) = words.get(j + 2) else {
            break;
        };
        if !comment.starts_with('(') {
            continue;
        }
        alternatives.push(strip_comment(&comment.to_lowercase()));

        let Some(continued) = words.get(j + 3) else {
            break;
        };
        alternatives.push(strip_comment(&continued.to_lowercase()));
    }

    alternatives.retain(|e| {
        e.len() >= 4
            && !UNINFORMATIVE.contains(&e.as_str())
            && e.contains('.')
            && !e.find('=').is_some_and(|p| p > 1)
    });

    for slot in &mut slots[..2] {
        // [192.0.2.25]
        if slot.starts_with('[') {
            *slot = ipv4::find_ipv4_addresses(slot)
                .into_iter()
                .next()
                .unwrap_or_default();
        }
    }

    if let Some(alternative) = alternatives.first() {
        replace_uninformative(&mut slots[0], alternative);
    }
    slots[5] = slots[5].trim_matches(['<', '>']).to_string();

    for slot in &mut slots {
        if slot.contains(' ') {
            slot.clear();
        }
        *slot = slot.replacen('[', "", 1).replacen(']', "", 1);
    }

    let [from, by, via, with, id, r#for] = slots;
    ReceivedTokens {
        from,
        by,
        via,
        with,
        id,
        r#for,
    }
}

fn strip_comment(text: &str) -> String {
    text.replace(COMMENT_CHARS, "")
}

/// Swaps a bare hostname, `localhost` or an IP address in `from` for the
/// hostname found in its comment
fn replace_uninformative(from: &mut String, alternative: &str) {
    let informative = from != "localhost"
        && from != "localhost.localdomain"
        && from.contains('.')
        && ipv4::find_ipv4_addresses(from).is_empty();
    if informative || alternative.contains(from.as_str()) {
        return;
    }

    if !from.contains('.') {
        // mail, mx, mbox
        if alternative.find('.').is_some_and(|p| p > 0) {
            *from = alternative.to_string();
        }
    } else {
        *from = alternative.to_string();
    }
}
