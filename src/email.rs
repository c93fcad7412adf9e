//! Outbound email delivery via SMTP (lettre)

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::MailConfig;

/// Everything the provider needs for one send.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Transactional email capability; substituted in tests.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one message, returning the provider message id when the
    /// transport reports one.
    async fn send(&self, message: OutboundMessage) -> Result<Option<String>>;
}

/// SMTP-backed mailer.
pub struct SmtpMailer {
    transport: SmtpTransport,
    from_name: String,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self> {
        let transport = if config.smtp_username.is_empty() && config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            // relay() uses STARTTLS, appropriate for port 587
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );

            SmtpTransport::relay(&config.smtp_host)
                .context("Failed to create SMTP transport")?
                .port(config.smtp_port)
                .credentials(credentials)
                .build()
        };

        Ok(Self {
            transport,
            from_name: config.from_name.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: OutboundMessage) -> Result<Option<String>> {
        let from: Mailbox = format!("{} <{}>", self.from_name, message.from)
            .parse()
            .context("Failed to parse from address")?;
        let to: Mailbox = message
            .to
            .parse()
            .context("Failed to parse to address")?;
        let reply_to: Mailbox = message
            .reply_to
            .parse()
            .context("Failed to parse reply-to address")?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .reply_to(reply_to)
            .subject(message.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(message.text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(message.html),
                    ),
            )
            .context("Failed to build email message")?;

        let response = self
            .transport
            .send(&email)
            .context("SMTP delivery failed")?;

        Ok(response.first_line().map(ToOwned::to_owned))
    }
}
