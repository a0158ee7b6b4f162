use async_trait::async_trait;
use tracing::info;

use super::{MailTransport, TransportError};

/// Writes messages to the log instead of sending them.
///
/// Used for local development where no mail relay is configured.
#[derive(Debug, Clone)]
pub struct LogTransport {
    sender: String,
}

impl LogTransport {
    /// Creates a transport that logs messages as sent from `sender`.
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }
}

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        info!(
            from = %self.sender,
            to = %to,
            subject = %subject,
            body_len = body.len(),
            "Mail logged (log transport)"
        );
        Ok(())
    }
}
