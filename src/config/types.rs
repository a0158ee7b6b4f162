//! Configuration types for the leave desk service.
//!
//! These structures are deserialized from the YAML configuration file. Every
//! section has defaults so a partial file (or no file at all) is usable.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::{PipelineError, PipelineResult};
use crate::models::is_email_address;

/// Complete service configuration.
///
/// Loaded once at start-up and treated as immutable afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Mail delivery settings.
    pub mail: MailConfig,
    /// Logging settings.
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> PipelineResult<()> {
        self.server.socket_addr()?;
        self.mail.validate()
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host; an IP address or `localhost`.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Resolves the bind address.
    pub fn socket_addr(&self) -> PipelineResult<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self.host.parse().map_err(|_| PipelineError::InvalidConfig {
            message: format!(
                "server.host '{}' must be an IPv4 or IPv6 address",
                self.host
            ),
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Which mail transport the service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// Log messages instead of sending them.
    #[default]
    Log,
    /// Send through the HTTP mail relay.
    Relay,
    /// Send through an SMTP server with STARTTLS.
    Smtp,
}

/// Mail delivery settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// From address on outgoing mail.
    pub sender: String,
    /// Fixed recipient of admin notifications.
    pub admin_email: String,
    /// Upper bound on a single send, in milliseconds.
    pub send_timeout_ms: u64,
    /// Transport selection.
    pub transport: TransportKind,
    /// Relay endpoint, required for the relay transport.
    pub relay_url: Option<String>,
    /// Relay bearer key, required for the relay transport.
    pub relay_api_key: Option<SecretString>,
    /// SMTP server, required for the smtp transport.
    pub smtp_host: Option<String>,
    /// SMTP submission port.
    pub smtp_port: u16,
    /// SMTP login; set together with `smtp_password`.
    pub smtp_username: Option<String>,
    /// SMTP password.
    pub smtp_password: Option<SecretString>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            sender: "leave-desk@localhost.localdomain".to_string(),
            admin_email: "hr-admin@localhost.localdomain".to_string(),
            send_timeout_ms: 10_000,
            transport: TransportKind::Log,
            relay_url: None,
            relay_api_key: None,
            smtp_host: None,
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
        }
    }
}

impl MailConfig {
    /// Send timeout as a [`Duration`].
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    fn validate(&self) -> PipelineResult<()> {
        if !is_email_address(&self.admin_email) {
            return Err(invalid(format!(
                "mail.admin_email '{}' is not a valid email address",
                self.admin_email
            )));
        }
        if !is_email_address(&self.sender) {
            return Err(invalid(format!(
                "mail.sender '{}' is not a valid email address",
                self.sender
            )));
        }
        if self.send_timeout_ms == 0 {
            return Err(invalid("mail.send_timeout_ms must be greater than zero"));
        }
        if self.transport == TransportKind::Relay {
            if self.relay_url.as_deref().is_none_or(|url| url.trim().is_empty()) {
                return Err(invalid("mail.relay_url is required for the relay transport"));
            }
            if self.relay_api_key.is_none() {
                return Err(invalid(
                    "mail.relay_api_key is required for the relay transport",
                ));
            }
        }
        if self.transport == TransportKind::Smtp {
            if self.smtp_host.as_deref().is_none_or(|host| host.trim().is_empty()) {
                return Err(invalid("mail.smtp_host is required for the smtp transport"));
            }
            if self.smtp_port == 0 {
                return Err(invalid("mail.smtp_port must be greater than zero"));
            }
            if self.smtp_username.is_some() != self.smtp_password.is_some() {
                return Err(invalid(
                    "mail.smtp_username and mail.smtp_password must be set together",
                ));
            }
        }
        Ok(())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

fn invalid(message: impl Into<String>) -> PipelineError {
    PipelineError::InvalidConfig {
        message: message.into(),
    }
}
