//! Finders for SMTP protocol tokens in diagnostic text
//!
//! Each finder returns an empty string when nothing qualifies.

pub mod command;
pub mod reply;
pub mod status;
