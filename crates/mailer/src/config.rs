use eyre::{eyre, Result};
use serde::Deserialize;
use std::env;

/// Configuration for the outbound SMTP transport.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// SMTP server hostname (required)
    pub host: String,
    /// SMTP server port (defaults to 587)
    pub port: u16,
    /// SMTP username, if the server requires authentication
    pub username: Option<String>,
    /// SMTP password, if the server requires authentication
    pub password: Option<String>,
    /// Whether to use STARTTLS (defaults to true)
    pub use_tls: bool,
    /// Sender address for all outgoing notices (required)
    pub from: String,
}

impl MailConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let host = env::var("SMTP_HOST")
            .map_err(|_| eyre!("SMTP_HOST environment variable not set"))?;

        let port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .map_err(|_| eyre!("SMTP_PORT must be a valid port number"))?;

        let username = env::var("SMTP_USERNAME").ok();
        let password = env::var("SMTP_PASSWORD").ok();

        let use_tls = env::var("SMTP_USE_TLS")
            .map(|value| parse_bool_flag(&value))
            .unwrap_or(true);

        let from = env::var("MAIL_FROM")
            .map_err(|_| eyre!("MAIL_FROM environment variable not set"))?;

        Ok(Self {
            host,
            port,
            username,
            password,
            use_tls,
            from,
        })
    }
}

/// Accepts "true", "1", and "yes" (case-insensitive) as truthy.
pub fn parse_bool_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}
