use std::{error::Error, time::Duration};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::email::types::{EmailMessage, SmtpConfig};

#[derive(Debug)]
pub enum DeliveryError {
  Address(String),
  Build(String),
  Transport(String),
  Timeout(Duration),
}

impl Error for DeliveryError {}

impl std::fmt::Display for DeliveryError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DeliveryError::Address(msg) => write!(f, "Invalid email address: {}", msg),
      DeliveryError::Build(msg) => write!(f, "Failed to build email message: {}", msg),
      DeliveryError::Transport(msg) => write!(f, "{}", msg),
      DeliveryError::Timeout(after) => write!(f, "Email delivery timed out after {:?}", after),
    }
  }
}

impl From<lettre::address::AddressError> for DeliveryError {
  fn from(err: lettre::address::AddressError) -> Self {
    DeliveryError::Address(err.to_string())
  }
}

impl From<lettre::error::Error> for DeliveryError {
  fn from(err: lettre::error::Error) -> Self {
    DeliveryError::Build(err.to_string())
  }
}

/// Sends one fully addressed message.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError>;
}

pub type SmtpMailer = EmailService<AsyncSmtpTransport<Tokio1Executor>>;

pub struct EmailService<T> {
  transport: T,
  timeout: Duration,
}

impl EmailService<AsyncSmtpTransport<Tokio1Executor>> {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let host = smtp_config
      .resolve_host()
      .ok_or_else(|| anyhow!("Unknown email service '{}' and no SMTP_HOST given", smtp_config.service))?;
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transport = if host == "localhost" || host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&host)
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(smtp_config.timeout))
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)?
        .credentials(creds)
        .port(smtp_config.port)
        .timeout(Some(smtp_config.timeout))
        .build()
    };

    tracing::info!(host = %host, port = smtp_config.port, "SMTP transport configured");

    Ok(Self::with_transport(transport, smtp_config.timeout))
  }
}

impl<T> EmailService<T> {
  pub fn with_transport(transport: T, timeout: Duration) -> Self {
    EmailService { transport, timeout }
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  pub fn build_message(message: &EmailMessage) -> Result<Message, DeliveryError> {
    let email = Message::builder()
      .from(message.from.parse()?)
      .reply_to(message.reply_to.parse()?)
      .to(message.to.parse()?)
      .subject(message.subject.clone())
      .header(ContentType::TEXT_HTML)
      .body(message.html_body.clone())?;

    Ok(email)
  }
}

#[async_trait]
impl<T> Mailer for EmailService<T>
where
  T: AsyncTransport + Send + Sync,
  T::Error: Error + Send + Sync + 'static,
{
  async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
    let email = Self::build_message(message)?;

    match tokio::time::timeout(self.timeout, self.transport.send(email)).await {
      Ok(Ok(_)) => Ok(()),
      Ok(Err(e)) => Err(DeliveryError::Transport(e.to_string())),
      Err(_) => Err(DeliveryError::Timeout(self.timeout)),
    }
  }
}
