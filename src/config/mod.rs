//! Configuration loading for the leave desk service.
//!
//! Configuration is read once at start-up from a YAML file, overridden by
//! `LEAVE_DESK_*` environment variables, validated, and then passed by value
//! into the components that need it.
//!
//! # Example
//!
//! ```no_run
//! use leave_desk::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave-desk.yaml").unwrap().into_config();
//! println!("Listening on port {}", config.server.port);
//! ```

mod loader;
mod types;

pub use loader::{
    ConfigLoader, ENV_ADMIN_EMAIL, ENV_HOST, ENV_LOG_LEVEL, ENV_MAIL_SENDER, ENV_PORT,
    ENV_RELAY_API_KEY, ENV_RELAY_URL, ENV_SMTP_HOST, ENV_SMTP_PASSWORD, ENV_SMTP_PORT,
    ENV_SMTP_USERNAME,
};
pub use types::{AppConfig, MailConfig, ServerConfig, TelemetryConfig, TransportKind};
