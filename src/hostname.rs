//! Internet hostnames (RFC1123) and their discovery in MTA log lines

use crate::ipv4;
use crate::strings;
use tracing::trace;

/// Characters padded with a leading space before tokenizing
const OPENERS: [&str; 3] = ["(", "[", "<"];

/// Characters padded with a trailing space before tokenizing
const CLOSERS: [&str; 5] = [")", "]", ">", ":", ";"];

/// Phrase pairs whose enclosed text holds the remote hostname
static SANDWICHED: &[[&str; 2]] = &[
    // Postfix: "<kijitora@example.com>: host re2.example.com[198.51.100.2] said: 550 ..."
    ["host ", " said: "],
    // Postfix: "host r2.example.org[198.51.100.18] refused to talk to me:"
    ["host ", " talk to me: "],
    // Sendmail: "... while talking to mx.example.jp.:"
    ["while talking to ", ":"],
    // Exim: "host mx.example.jp [192.0.2.20]: 550 5.7.0"
    ["host ", " ["],
    // Gmail: "for the recipient domain example.jp by mx.example.jp. [192.0.2.1]."
    [" by ", ". ["],
    // MailFoundry: "Server mx22.example.org[192.0.2.222] failed with: 550"
    ["delivery failed for the following reason: ", " with"],
    // MessagingServer: "Remote system: dns;mx.example.net (mx. --"
    ["remote system: ", "("],
    // X6: "SMTP Server <smtpd.example.org> rejected recipient"
    ["smtp server <", ">"],
    // MailMarshal: "Reporting-MTA:      <rr1.example.com>"
    ["-mta: ", ">"],
    // SendGrid: "cat:000000:<cat@example.jp> : 192.0.2.1 : mx.example.jp:[192.0.2.2]"
    [" : ", "["],
];

/// Phrases followed by the remote hostname
static START_AFTER: &[&str] = &[
    "generating server: ",   // Exchange 2007
    "serveur de g",          // fr-FR "Serveur de génération"
    "server di generazione", // it-CH
    "genererande server",    // sv-SE
];

/// Phrases preceded by the remote hostname
static END_BEFORE: &[&str] = &[
    // Dragonfly: "mail-inbound.example.net [192.0.2.25] did not like our DATA: ..."
    " did not like our ",
];

type Strategy = fn(&str) -> Option<Vec<&str>>;

/// Search-space strategies, tried in order until one applies
static STRATEGIES: &[(&str, Strategy)] = &[
    ("sandwiched", sandwiched),
    ("start-after", start_after),
    ("end-before", end_before),
];

/// Returns true when `host` is a valid Internet hostname.
///
/// `localhost` and `localhost6` are accepted; everything else needs a dot,
/// only letters, digits, `-` and `.`, and a top level label without digits.
/// A double hyphen is only allowed for IDN A-labels (`xn--`).
#[must_use]
pub fn is_internet_host(host: &str) -> bool {
    if host.len() < 4 || host.len() > 255 {
        return false;
    }
    if host == "localhost" || host == "localhost6" {
        return true;
    }
    if !host.contains('.') || host.contains("..") {
        return false;
    }
    if strings::has_prefix_any(host, &[".", "-"]) || host.ends_with('-') {
        return false;
    }
    if host.contains("--") && !host.starts_with("xn--") {
        return false;
    }
    if !host
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'.')
    {
        return false;
    }

    let tld = host.rsplit('.').next().unwrap_or_default();
    tld.len() <= 63 && !tld.bytes().any(|b| b.is_ascii_digit())
}

/// Returns true when the domain part of `email` is an address literal such
/// as `[IPv4:192.0.2.25]` or `[IPv6:2001:db8::1]`.
///
/// IPv6 literals are only checked for shape: more than two colons.
#[must_use]
pub fn is_domain_literal(email: &str) -> bool {
    let email = email.trim_matches(['<', '>']);
    // e@[IPv4:0.0.0.0] is the shortest possible literal
    if email.len() < 16 || !email.ends_with(']') {
        return false;
    }

    if email.contains("@[IPv4:") {
        ipv4::is_ipv4_address(strings::select(email, "@[IPv4:", "]", 0))
    } else if email.contains("@[IPv6:") {
        let literal = strings::select(email, "@[IPv6:", "]", 0);
        literal.len() > 2 && literal.matches(':').count() > 2
    } else {
        false
    }
}

/// Finds the most plausible remote hostname in an MTA diagnostic message.
///
/// Vendor-specific phrases narrow the search space when present; otherwise
/// every token is considered. The longest valid hostname wins.
#[must_use]
pub fn find(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // "mx.example.net[192.0.2.1]" => "mx.example.net [192.0.2.1]"
    let mut source = text.to_lowercase();
    for e in OPENERS {
        source = source.replace(e, &format!(" {e}"));
    }
    for e in CLOSERS {
        source = source.replace(e, &format!("{e} "));
    }

    let tokens = STRATEGIES
        .iter()
        .find_map(|(name, strategy)| {
            strategy(&source).inspect(|_| trace!(strategy = *name, "hostname search space"))
        })
        .unwrap_or_else(|| source.split(' ').collect());

    let mut longest = String::new();
    for e in tokens {
        let mut candidate = e.to_string();
        candidate.retain(|c| !"([<)]>:;".contains(c));
        let candidate = candidate.trim_end_matches('.');

        if candidate.len() < 4 || !candidate.contains('.') || !is_internet_host(candidate) {
            continue;
        }
        if candidate.len() > longest.len() {
            longest = candidate.to_string();
        }
    }
    longest
}

fn sandwiched(source: &str) -> Option<Vec<&str>> {
    SANDWICHED.iter().find_map(|pair| {
        if !strings::aligned(source, pair) {
            return None;
        }
        let p1 = source.find(pair[0])? + pair[0].len();
        let p2 = source.find(pair[1])?;
        (p1 < p2).then(|| source[p1..p2].split(' ').collect())
    })
}

fn start_after(source: &str) -> Option<Vec<&str>> {
    START_AFTER.iter().find_map(|e| {
        let p = source.find(e)? + e.len();
        Some(source[p..].split(' ').collect())
    })
}

fn end_before(source: &str) -> Option<Vec<&str>> {
    END_BEFORE
        .iter()
        .find_map(|e| Some(source[..source.find(e)?].split(' ').collect()))
}
