//! Header helpers feeding a raw message header block to the finders

use crate::error::{ParseError, Result};
use crate::types::{EmailAddress, ReceivedTokens};
use crate::{address, date as rfc5322_date, received};
use mailparse::MailHeader;
use tracing::debug;

fn parse_headers(raw: &[u8]) -> Result<Vec<MailHeader<'_>>> {
    let (headers, _) =
        mailparse::parse_headers(raw).map_err(|e| ParseError::Structure(e.to_string()))?;
    Ok(headers)
}

fn header_value(headers: &[MailHeader], name: &str) -> Option<String> {
    headers
        .iter()
        .find(|h| h.get_key().eq_ignore_ascii_case(name))
        .map(MailHeader::get_value)
}

/// Folded header values with every run of whitespace collapsed to one space
fn unfold(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenizes every `Received:` header of a message, newest hop first (header order)
pub fn trace(raw: &[u8]) -> Result<Vec<ReceivedTokens>> {
    let headers = parse_headers(raw)?;
    let hops: Vec<ReceivedTokens> = headers
        .iter()
        .filter(|h| h.get_key().eq_ignore_ascii_case("received"))
        .map(|h| received::tokenize(&unfold(&h.get_value())))
        .collect();

    debug!("Scanned {} Received headers", hops.len());
    Ok(hops)
}

/// Builds the sender address from the `From:` header
pub fn originator(raw: &[u8]) -> Result<EmailAddress> {
    let headers = parse_headers(raw)?;
    let from_header = header_value(&headers, "from")
        .map(|v| unfold(&v))
        .ok_or_else(|| ParseError::MissingHeader("From".into()))?;

    let triple = address::find(&from_header);
    let from = EmailAddress::rise(&triple).ok_or(ParseError::NoAddress(from_header))?;
    debug!("Originator: {}", from.address);
    Ok(from)
}

/// Normalizes the `Date:` header, see [`crate::date::normalize`]
pub fn date(raw: &[u8]) -> Result<String> {
    let headers = parse_headers(raw)?;
    let value = header_value(&headers, "date")
        .map(|v| unfold(&v))
        .ok_or_else(|| ParseError::MissingHeader("Date".into()))?;

    let normalized = rfc5322_date::normalize(&value);
    if normalized.is_empty() {
        return Err(ParseError::InvalidDate(value));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfold() {
        assert_eq!(unfold("from a\r\n\tby b"), "from a by b");
        assert_eq!(unfold("  neko  "), "neko");
    }
}
