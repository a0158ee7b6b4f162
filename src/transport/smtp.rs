//! SMTP transport.
//!
//! Connects to the configured mail server, upgrades with STARTTLS and logs in
//! when credentials are configured.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::Error as SmtpError;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::{MailTransport, TransportError};

/// Sends mail through an SMTP server using STARTTLS.
#[derive(Clone)]
pub struct SmtpTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    timeout: Duration,
}

impl SmtpTransport {
    /// Builds an SMTP transport for `host:port`.
    ///
    /// `credentials` is a username and password pair; without it the session
    /// is not authenticated.
    pub fn new(
        host: &str,
        port: u16,
        credentials: Option<(String, SecretString)>,
        sender: &str,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let sender: Mailbox = sender
            .parse()
            .map_err(|err| TransportError::Rejected(format!("sender '{sender}': {err}")))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|err| TransportError::Connection(err.to_string()))?
            .port(port)
            .timeout(Some(timeout));
        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(
                username,
                password.expose_secret().to_string(),
            ));
        }

        Ok(Self {
            mailer: builder.build(),
            sender,
            timeout,
        })
    }

    fn map_error(&self, err: SmtpError) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout.as_millis() as u64)
        } else if err.is_permanent() || err.is_transient() {
            // The server answered with an error code: bad login, refused recipient.
            TransportError::Rejected(err.to_string())
        } else {
            TransportError::Connection(err.to_string())
        }
    }
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|err| TransportError::Rejected(format!("recipient '{to}': {err}")))?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|err| TransportError::Rejected(err.to_string()))?;

        let response = self
            .mailer
            .send(message)
            .await
            .map_err(|err| self.map_error(err))?;

        debug!(to = %to, code = %response.code(), "SMTP server accepted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sender_is_rejected() {
        let result = SmtpTransport::new(
            "localhost",
            587,
            None,
            "not an address",
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(TransportError::Rejected(_))));
    }

    #[tokio::test]
    async fn invalid_recipient_is_rejected_before_connecting() {
        let transport = SmtpTransport::new(
            "localhost",
            9,
            None,
            "hr@example.com",
            Duration::from_millis(500),
        )
        .unwrap();

        let result = transport.send("noor-at-example", "subject", "body").await;
        assert!(matches!(result, Err(TransportError::Rejected(_))));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Port 9 on loopback is the discard port and is normally closed.
        let transport = SmtpTransport::new(
            "localhost",
            9,
            Some(("hr@example.com".to_string(), SecretString::from("pw".to_string()))),
            "hr@example.com",
            Duration::from_millis(500),
        )
        .unwrap();

        let result = transport.send("asha@example.com", "subject", "body").await;
        assert!(result.is_err());
    }
}
