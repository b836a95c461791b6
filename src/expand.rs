//! VERP and plus-alias un-tagging

use crate::strings::{self, LHS, RHS};
use crate::syntax;

/// Gets the original recipient from a VERP address.
///
/// `bounce+neko=example.jp@example.org` expands to `neko@example.jp`. A quoted
/// local part such as `"neko+cat=example.jp"@example.org` never expands.
/// Returns an empty string when `email` is not a VERP address.
#[must_use]
pub fn verp(email: &str) -> String {
    if email.is_empty() || !email.contains('@') || syntax::is_quoted_address(email) {
        return String::new();
    }

    let tagged = strings::select(email, "+", "@", 0);
    if tagged.is_empty() {
        return String::new();
    }

    let original = tagged.replacen('=', "@", 1);
    if syntax::is_email_address(&original) {
        original
    } else {
        String::new()
    }
}

/// Removes the `+tag` part from a sub-addressed local part.
///
/// `neko+straycat@example.jp` expands to `neko@example.jp`. Returns an empty
/// string when `email` carries no tag or is not a valid unquoted address.
#[must_use]
pub fn alias(email: &str) -> String {
    if !email.find('+').is_some_and(|p| p > 0) {
        return String::new();
    }
    if !syntax::is_email_address(email) || syntax::is_quoted_address(email) {
        return String::new();
    }

    let local = strings::select(&format!("{LHS}{email}"), LHS, "+", 0).to_string();
    let domain = strings::select(&format!("{email}{RHS}"), "@", RHS, 1).to_string();
    format!("{local}@{domain}")
}
