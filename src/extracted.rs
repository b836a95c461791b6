//! Every diagnostic field of one delivery-status text at once

use crate::hostname;
use crate::smtp::command;
use crate::types::{ReplyCode, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fields recognized in a diagnostic text such as
/// `host mx.example.jp[192.0.2.1] said: 550 5.1.1 <neko@example.jp>... User Unknown (in reply to RCPT TO command)`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostics {
    /// Enhanced status code such as 5.1.1
    pub status: Option<StatusCode>,

    /// SMTP reply code such as 550
    pub reply: Option<ReplyCode>,

    /// Last SMTP command of the session, such as RCPT
    pub command: Option<String>,

    /// Remote host that produced the error
    pub hostname: Option<String>,
}

impl Diagnostics {
    /// Run every finder over `text`
    #[must_use]
    pub fn extract(text: &str) -> Self {
        let reply = ReplyCode::find(text, "");
        let hint = reply.as_ref().map(ReplyCode::as_str).unwrap_or_default();
        let status = StatusCode::find(text, hint);

        let command = Some(command::find(text)).filter(|e| !e.is_empty());
        let hostname = Some(hostname::find(text)).filter(|e| !e.is_empty());

        let diagnostics = Self {
            status,
            reply,
            command,
            hostname,
        };
        debug!("Extracted {} diagnostic fields", diagnostics.field_count());
        diagnostics
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Number of fields that were found
    #[must_use]
    pub fn field_count(&self) -> usize {
        [
            self.status.is_some(),
            self.reply.is_some(),
            self.command.is_some(),
            self.hostname.is_some(),
        ]
        .into_iter()
        .filter(|found| *found)
        .count()
    }
}
