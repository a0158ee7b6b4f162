//! Best-effort notification dispatch.
//!
//! The dispatcher never returns an error. Transport failures and timeouts
//! are logged and reported as `delivered = false` so that one recipient's
//! failure cannot affect the other recipient or the stored record.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::models::{ComposedMessage, NotificationResult, RecipientRole};
use crate::transport::{MailTransport, TransportError};

/// Sends composed messages through a [`MailTransport`].
#[derive(Clone)]
pub struct NotificationDispatcher {
    transport: Arc<dyn MailTransport>,
    send_timeout: Duration,
}

impl NotificationDispatcher {
    /// Creates a dispatcher bounding each send by `send_timeout`.
    pub fn new(transport: Arc<dyn MailTransport>, send_timeout: Duration) -> Self {
        Self {
            transport,
            send_timeout,
        }
    }

    /// Attempts delivery of `message` to `to`.
    pub async fn dispatch(
        &self,
        role: RecipientRole,
        to: &str,
        message: &ComposedMessage,
    ) -> NotificationResult {
        let attempt = self.transport.send(to, &message.subject, &message.body);

        let outcome = match tokio::time::timeout(self.send_timeout, attempt).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(self.send_timeout.as_millis() as u64)),
        };

        let delivered = match outcome {
            Ok(()) => {
                debug!(role = ?role, to = %to, "Notification delivered");
                true
            }
            Err(err) => {
                warn!(role = ?role, to = %to, error = %err, "Notification failed");
                false
            }
        };

        NotificationResult { role, delivered }
    }
}
