//! Error types for the typed constructors and message helpers
//!
//! The finders themselves never fail; they return empty values instead.

use thiserror::Error;

/// Errors raised when a caller asks for a typed value that is not there
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to parse the header block
    #[error("Failed to parse header structure: {0}")]
    Structure(String),

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// No usable email address in the text
    #[error("No email address found in: {0}")]
    NoAddress(String),

    /// Not an enhanced status code such as 5.1.1
    #[error("Invalid SMTP status code: {0}")]
    InvalidStatusCode(String),

    /// Not an SMTP reply code such as 550
    #[error("Invalid SMTP reply code: {0}")]
    InvalidReplyCode(String),
}

/// Result type for typed parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
