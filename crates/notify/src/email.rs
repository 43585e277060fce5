//! Owner notification email via SMTP.
//!
//! [`SmtpChannel`] wraps the `lettre` async SMTP transport. The transport
//! is built once at construction and reused for every send. Sender and
//! recipient fall back to the SMTP username when `EMAIL_FROM`/`EMAIL_TO`
//! are not set, matching how a single-operator portfolio site is usually
//! configured.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient, sender, or reply-to address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// No usable sender or recipient address is configured.
    #[error("Email not configured: {0}")]
    NotConfigured(&'static str),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP relay when `SMTP_HOST` is not set.
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration for the SMTP email channel.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// RFC 5322 "From" address; falls back to the SMTP username.
    pub from_address: Option<String>,
    /// Site owner address the notification is sent to; falls back to the
    /// SMTP username.
    pub to_address: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Required | Default          |
    /// |-----------------|----------|------------------|
    /// | `SMTP_HOST`     | no       | `smtp.gmail.com` |
    /// | `SMTP_PORT`     | no       | `587`            |
    /// | `SMTP_USER`     | no       | —                |
    /// | `SMTP_PASSWORD` | no       | —                |
    /// | `EMAIL_FROM`    | no       | `SMTP_USER`      |
    /// | `EMAIL_TO`      | no       | `SMTP_USER`      |
    pub fn from_env() -> Self {
        Self::from_parts(
            std::env::var("SMTP_HOST").ok(),
            std::env::var("SMTP_PORT").ok().and_then(|p| p.parse().ok()),
            std::env::var("SMTP_USER").ok(),
            std::env::var("SMTP_PASSWORD").ok(),
            std::env::var("EMAIL_FROM").ok(),
            std::env::var("EMAIL_TO").ok(),
        )
    }

    /// Assemble a config from already-read values, applying defaults and
    /// the `SMTP_USER` fallback for the from/to addresses.
    pub fn from_parts(
        smtp_host: Option<String>,
        smtp_port: Option<u16>,
        smtp_user: Option<String>,
        smtp_password: Option<String>,
        email_from: Option<String>,
        email_to: Option<String>,
    ) -> Self {
        let from_address = email_from.or_else(|| smtp_user.clone());
        let to_address = email_to.or_else(|| smtp_user.clone());
        Self {
            smtp_host: smtp_host.unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: smtp_port.unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user,
            smtp_password,
            from_address,
            to_address,
        }
    }
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// A composed owner notification, ready for any [`EmailChannel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    /// The submitter's address, set as Reply-To so the owner can answer
    /// directly from their mail client.
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

/// Seam between the submission handler and a concrete email transport.
#[async_trait]
pub trait EmailChannel: Send + Sync {
    async fn send(&self, email: &ContactEmail) -> Result<(), EmailError>;
}

/// Production [`EmailChannel`] backed by an async SMTP transport.
pub struct SmtpChannel {
    config: EmailConfig,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpChannel {
    /// Build the STARTTLS transport once; it is reused for every send.
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = builder.build();
        Ok(Self { config, mailer })
    }
}

#[async_trait]
impl EmailChannel for SmtpChannel {
    async fn send(&self, email: &ContactEmail) -> Result<(), EmailError> {
        let from = self
            .config
            .from_address
            .as_deref()
            .ok_or(EmailError::NotConfigured("no sender address"))?;
        let to = self
            .config
            .to_address
            .as_deref()
            .ok_or(EmailError::NotConfigured("no recipient address"))?;

        let message = Message::builder()
            .from(from.parse()?)
            .to(to.parse()?)
            .reply_to(email.reply_to.parse()?)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        self.mailer.send(message).await?;

        tracing::info!(to, subject = %email.subject, "Contact notification email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
