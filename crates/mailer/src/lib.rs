//! Outbound email for booking confirmations and cancellation notices.
//!
//! Delivery is best effort: callers commit their store mutation first and
//! treat a send failure as a reportable status, never as a reason to roll
//! back. The `Mailer` trait is the seam handlers depend on; `SmtpMailer`
//! is the production implementation.

use async_trait::async_trait;
use eyre::Result;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use mockall::automock;
use tracing::info;

pub mod config;
pub mod messages;

/// Best-effort outbound notification delivery.
#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()>;
}

/// SMTP-backed `Mailer` using lettre's async transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: config::MailConfig) -> Result<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| eyre::eyre!("Invalid MAIL_FROM address: {}", e))?;

        let mut builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };
        builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (config.username, config.password) {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| eyre::eyre!("Invalid recipient address '{}': {}", recipient, e))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        self.transport.send(message).await?;
        info!("Sent '{}' to {}", subject, recipient);

        Ok(())
    }
}
