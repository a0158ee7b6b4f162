//! HTTP mail relay transport.
//!
//! Posts each message as JSON to a relay endpoint authenticated with a bearer
//! key. Any 2xx answer counts as accepted.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

use super::{MailTransport, TransportError};

#[derive(Debug, Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Sends mail through an HTTP relay.
#[derive(Clone)]
pub struct RelayTransport {
    client: Client,
    url: String,
    api_key: SecretString,
    sender: String,
    timeout: Duration,
}

impl RelayTransport {
    /// Builds a relay transport.
    ///
    /// `timeout` bounds each request at the HTTP client level.
    pub fn new(
        url: impl Into<String>,
        api_key: SecretString,
        sender: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::Connection(err.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            api_key,
            sender: sender.into(),
            timeout,
        })
    }
}

#[async_trait]
impl MailTransport for RelayTransport {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError> {
        let message = RelayMessage {
            from: &self.sender,
            to,
            subject,
            text: body,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&message)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    TransportError::Timeout(self.timeout.as_millis() as u64)
                } else {
                    TransportError::Connection(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected(format!(
                "relay returned {status}: {}",
                detail.trim()
            )));
        }

        debug!(to = %to, status = %status, "Relay accepted message");
        Ok(())
    }
}
