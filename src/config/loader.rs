//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type, which reads the service
//! configuration from a YAML file and layers environment overrides on top.

use std::env;
use std::fs;
use std::path::Path;

use secrecy::SecretString;

use crate::error::{PipelineError, PipelineResult};

use super::types::{AppConfig, TransportKind};

/// Environment variable overriding `server.host`.
pub const ENV_HOST: &str = "LEAVE_DESK_HOST";
/// Environment variable overriding `server.port`.
pub const ENV_PORT: &str = "LEAVE_DESK_PORT";
/// Environment variable overriding `mail.admin_email`.
pub const ENV_ADMIN_EMAIL: &str = "LEAVE_DESK_ADMIN_EMAIL";
/// Environment variable overriding `mail.sender`.
pub const ENV_MAIL_SENDER: &str = "LEAVE_DESK_MAIL_SENDER";
/// Environment variable overriding `mail.relay_url`; also selects the relay transport.
pub const ENV_RELAY_URL: &str = "LEAVE_DESK_RELAY_URL";
/// Environment variable overriding `mail.relay_api_key`.
pub const ENV_RELAY_API_KEY: &str = "LEAVE_DESK_RELAY_API_KEY";
/// Environment variable overriding `mail.smtp_host`; also selects the smtp transport.
pub const ENV_SMTP_HOST: &str = "LEAVE_DESK_SMTP_HOST";
/// Environment variable overriding `mail.smtp_port`.
pub const ENV_SMTP_PORT: &str = "LEAVE_DESK_SMTP_PORT";
/// Environment variable overriding `mail.smtp_username`.
pub const ENV_SMTP_USERNAME: &str = "LEAVE_DESK_SMTP_USERNAME";
/// Environment variable overriding `mail.smtp_password`.
pub const ENV_SMTP_PASSWORD: &str = "LEAVE_DESK_SMTP_PASSWORD";
/// Environment variable overriding `telemetry.log_level`.
pub const ENV_LOG_LEVEL: &str = "LEAVE_DESK_LOG_LEVEL";

/// Loads and holds the validated service configuration.
///
/// # Example
///
/// ```no_run
/// use leave_desk::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/leave-desk.yaml")?;
/// println!("Admin notifications go to {}", loader.config().mail.admin_email);
/// # Ok::<(), leave_desk::error::PipelineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file, then applies process environment
    /// overrides (after reading `.env` if present) and validates the result.
    pub fn load<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        dotenvy::dotenv().ok();
        let config = Self::load_yaml(path.as_ref())?;
        Self::build(config, |key| env::var(key).ok())
    }

    /// Builds configuration from defaults and environment overrides only.
    pub fn from_env() -> PipelineResult<Self> {
        dotenvy::dotenv().ok();
        Self::build(AppConfig::default(), |key| env::var(key).ok())
    }

    /// Applies overrides from `lookup` to `config` and validates it.
    pub fn build<F>(mut config: AppConfig, lookup: F) -> PipelineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses the YAML file.
    fn load_yaml(path: &Path) -> PipelineResult<AppConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PipelineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PipelineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> PipelineResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = value(ENV_HOST) {
            config.server.host = host;
        }
        if let Some(port) = value(ENV_PORT) {
            config.server.port = port.trim().parse().map_err(|_| PipelineError::InvalidConfig {
                message: format!("{ENV_PORT} must be a valid port, got '{port}'"),
            })?;
        }
        if let Some(admin) = value(ENV_ADMIN_EMAIL) {
            config.mail.admin_email = admin;
        }
        if let Some(sender) = value(ENV_MAIL_SENDER) {
            config.mail.sender = sender;
        }
        if let Some(url) = value(ENV_RELAY_URL) {
            config.mail.relay_url = Some(url);
            config.mail.transport = TransportKind::Relay;
        }
        if let Some(key) = value(ENV_RELAY_API_KEY) {
            config.mail.relay_api_key = Some(SecretString::from(key));
        }
        if let Some(host) = value(ENV_SMTP_HOST) {
            config.mail.smtp_host = Some(host);
            config.mail.transport = TransportKind::Smtp;
        }
        if let Some(port) = value(ENV_SMTP_PORT) {
            config.mail.smtp_port = port.trim().parse().map_err(|_| PipelineError::InvalidConfig {
                message: format!("{ENV_SMTP_PORT} must be a valid port, got '{port}'"),
            })?;
        }
        if let Some(username) = value(ENV_SMTP_USERNAME) {
            config.mail.smtp_username = Some(username);
        }
        if let Some(password) = value(ENV_SMTP_PASSWORD) {
            config.mail.smtp_password = Some(SecretString::from(password));
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            config.telemetry.log_level = level;
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
