//! Outbound email.
//!
//! The rest of the crate talks to the [`Mailer`] trait; [`EmailService`] implements it over any lettre
//! `AsyncTransport`, which in production is an SMTP relay.

mod service;
mod types;

pub use service::{DeliveryError, EmailService, Mailer, SmtpMailer};
pub use types::{EmailMessage, SmtpConfig};
