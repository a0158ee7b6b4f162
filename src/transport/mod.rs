//! Email transport contract and implementations.
//!
//! A transport delivers one plain-text message to one address. It reports
//! failure as a [`TransportError`]; deciding what a failure means for the
//! request is the dispatcher's job.

mod logging;
mod relay;
mod smtp;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{MailConfig, TransportKind};
use crate::error::{PipelineError, PipelineResult};

pub use logging::LogTransport;
pub use relay::RelayTransport;
pub use smtp::SmtpTransport;

/// Transport failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The mail service could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),
    /// The mail service answered but refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),
    /// No answer within the allotted time.
    #[error("send timed out after {0} ms")]
    Timeout(u64),
}

/// Outbound email delivery.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends one message to `to`.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), TransportError>;
}

/// Builds the transport selected by `config`.
pub fn from_config(config: &MailConfig) -> PipelineResult<Arc<dyn MailTransport>> {
    match config.transport {
        TransportKind::Log => Ok(Arc::new(LogTransport::new(config.sender.clone()))),
        TransportKind::Relay => {
            let (Some(url), Some(api_key)) = (&config.relay_url, &config.relay_api_key) else {
                return Err(PipelineError::InvalidConfig {
                    message: "relay transport needs mail.relay_url and mail.relay_api_key"
                        .to_string(),
                });
            };
            let relay = RelayTransport::new(
                url.clone(),
                api_key.clone(),
                config.sender.clone(),
                config.send_timeout(),
            )
            .map_err(|err| PipelineError::InvalidConfig {
                message: format!("could not build relay client: {err}"),
            })?;
            Ok(Arc::new(relay))
        }
        TransportKind::Smtp => {
            let Some(host) = &config.smtp_host else {
                return Err(PipelineError::InvalidConfig {
                    message: "smtp transport needs mail.smtp_host".to_string(),
                });
            };
            let credentials = config
                .smtp_username
                .clone()
                .zip(config.smtp_password.clone());
            let smtp = SmtpTransport::new(
                host,
                config.smtp_port,
                credentials,
                &config.sender,
                config.send_timeout(),
            )
            .map_err(|err| PipelineError::InvalidConfig {
                message: format!("could not build smtp transport: {err}"),
            })?;
            Ok(Arc::new(smtp))
        }
    }
}
