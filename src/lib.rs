// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! Bounce Fields
//!
//! Recognizes the structured fields buried in mail bounce notifications:
//! delivery-status logs, trace headers and SMTP transcripts.
//!
//! # Features
//!
//! - Address field parsing with display names, comments and quoted local parts
//! - VERP and plus-alias un-tagging
//! - RFC5322 address syntax and RFC1123 hostname checks
//! - Remote hostname discovery in MTA log lines
//! - Tolerant date normalization
//! - `Received:` header tokenizing
//! - SMTP command, reply code and enhanced status code finders
//!
//! Finders never fail: a field that is not there comes back empty.
//!
//! # Example
//!
//! ```rust
//! use bounce_fields::{Diagnostics, EmailAddress};
//!
//! let text = "host mx.example.jp[192.0.2.1] said: 550 5.1.1 <neko@example.jp>... \
//!             User Unknown (in reply to RCPT TO command)";
//! let found = Diagnostics::extract(text);
//!
//! println!("status:   {:?}", found.status);
//! println!("reply:    {:?}", found.reply);
//! println!("command:  {:?}", found.command);
//! println!("hostname: {:?}", found.hostname);
//!
//! let sender: EmailAddress = "\"Neko\" <bounce+neko=example.jp@example.org>".parse().unwrap();
//! assert_eq!(sender.verp, "neko@example.jp");
//! ```

pub mod address;
pub mod date;
pub mod expand;
pub mod hostname;
pub mod ipv4;
pub mod parser;
pub mod received;
pub mod smtp;
pub mod strings;
pub mod syntax;

mod error;
mod extracted;
mod types;

pub use error::{ParseError, Result};
pub use extracted::Diagnostics;
pub use types::*;
