//! Core records produced by the finders

use crate::error::{ParseError, Result};
use crate::smtp::{reply, status};
use crate::{address, expand};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An address field split into its parts by [`address::find`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressTriple {
    /// Email address (e.g., "neko@example.jp") or a bare "MAILER-DAEMON"
    pub address: String,

    /// Display name, quotes kept when it was a quoted string
    pub name: String,

    /// Comment blocks such as "(cat)"
    pub comment: String,
}

impl AddressTriple {
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            comment: comment.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.address.is_empty() && self.name.is_empty() && self.comment.is_empty()
    }
}

/// A validated email address with its parts and un-tagged forms
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    /// Email address (e.g., "neko@example.jp"); `user@host` when host is set
    pub address: String,

    /// Local part (before @)
    pub user: String,

    /// Domain part (after @)
    pub host: String,

    /// Original recipient decoded from a VERP address
    pub verp: String,

    /// Address with its `+tag` removed
    pub alias: String,

    /// Display name
    pub name: String,

    /// Comment
    pub comment: String,
}

impl EmailAddress {
    /// Builds an address record from a parsed address field.
    ///
    /// Returns `None` when the triple holds no address, or when an address
    /// without `@` is anything other than a bare mailer-daemon/postmaster.
    #[must_use]
    pub fn rise(triple: &AddressTriple) -> Option<Self> {
        if triple.address.is_empty() {
            return None;
        }

        let mut thing = Self {
            name: triple.name.clone(),
            comment: triple.comment.clone(),
            ..Self::default()
        };
        let email = address::final_form(&triple.address);

        match email.rfind('@') {
            Some(lasta) if lasta > 0 => {
                let verp = expand::verp(&email);
                if verp.is_empty() {
                    thing.alias = expand::alias(&email);
                } else {
                    thing.verp = verp;
                }

                thing.user = email[..lasta].trim_start_matches('<').to_string();
                thing.host = email[lasta + 1..]
                    .trim_end_matches(['>', ',', '.', ';'])
                    .to_string();
                thing.address = format!("{}@{}", thing.user, thing.host);
            }
            _ => {
                if !address::is_mailer_daemon(&triple.address) || triple.address.contains(' ') {
                    return None;
                }
                thing.user.clone_from(&triple.address);
                thing.address.clone_from(&triple.address);
            }
        }
        Some(thing)
    }

    /// Check if this is a mailer-daemon or postmaster address
    #[must_use]
    pub fn is_mailer_daemon(&self) -> bool {
        address::is_mailer_daemon(&self.address)
    }

    /// The recipient this address stands for: the VERP or alias expansion when
    /// there is one, the address itself otherwise.
    #[must_use]
    pub fn original(&self) -> &str {
        if !self.verp.is_empty() {
            &self.verp
        } else if !self.alias.is_empty() {
            &self.alias
        } else {
            &self.address
        }
    }
}

impl FromStr for EmailAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::rise(&address::find(s)).ok_or_else(|| ParseError::NoAddress(s.to_string()))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.address)?;
        } else {
            write!(f, "{} <{}>", self.name, self.address)?;
        }
        if !self.comment.is_empty() {
            write!(f, " {}", self.comment)?;
        }
        Ok(())
    }
}

/// Tokens of one `Received:` trace header
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReceivedTokens {
    /// Sending host
    pub from: String,

    /// Receiving host
    pub by: String,

    /// Link type such as "tcp"
    pub via: String,

    /// Protocol such as "esmtp"
    pub with: String,

    /// Queue ID
    pub id: String,

    /// Envelope recipient
    #[serde(rename = "for")]
    pub r#for: String,
}

impl ReceivedTokens {
    /// Slots in trace-field order: from, by, via, with, id, for
    #[must_use]
    pub fn as_array(&self) -> [&str; 6] {
        [
            self.from.as_str(),
            self.by.as_str(),
            self.via.as_str(),
            self.with.as_str(),
            self.id.as_str(),
            self.r#for.as_str(),
        ]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_array().iter().all(|e| e.is_empty())
    }
}

/// An enhanced mail system status code (RFC3463) such as `5.1.1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusCode(String);

impl StatusCode {
    /// Finds a status code in diagnostic text, see [`status::find`]
    #[must_use]
    pub fn find(logs: &str, hint: &str) -> Option<Self> {
        let code = status::find(logs, hint);
        (!code.is_empty()).then_some(Self(code))
    }

    /// First digit: 2, 4 or 5
    #[must_use]
    pub fn class(&self) -> u8 {
        self.0.as_bytes()[0] - b'0'
    }

    /// True for the catch-all codes 2.0.0, 4.0.0 and 5.0.0
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        status::is_ambiguous(&self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StatusCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        if status::test(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseError::InvalidStatusCode(s.to_string()))
        }
    }
}

impl TryFrom<String> for StatusCode {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<StatusCode> for String {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An SMTP reply code such as `550`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReplyCode(String);

impl ReplyCode {
    /// Finds a reply code in diagnostic text, see [`reply::find`]
    #[must_use]
    pub fn find(logs: &str, hint: &str) -> Option<Self> {
        let code = reply::find(logs, hint);
        (!code.is_empty()).then_some(Self(code))
    }

    /// First digit: 2, 3, 4 or 5
    #[must_use]
    pub fn class(&self) -> u8 {
        self.0.as_bytes()[0] - b'0'
    }

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ReplyCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        if reply::test(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseError::InvalidReplyCode(s.to_string()))
        }
    }
}

impl TryFrom<String> for ReplyCode {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ReplyCode> for String {
    fn from(code: ReplyCode) -> Self {
        code.0
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
