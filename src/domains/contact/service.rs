use std::{error::Error, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;

use super::{
  model::{ContactRequest, ContactResponse},
  template::render_contact_email,
  validation::{validate_submission, ValidationError},
};
use crate::email::{DeliveryError, Mailer};

#[derive(Debug)]
pub enum ContactServiceError {
  Validation(ValidationError),
  Delivery(DeliveryError),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::Validation(err) => write!(f, "Validation Error: {}", err),
      ContactServiceError::Delivery(err) => write!(f, "Delivery Error: {}", err),
    }
  }
}

impl From<ValidationError> for ContactServiceError {
  fn from(err: ValidationError) -> Self {
    ContactServiceError::Validation(err)
  }
}

impl From<DeliveryError> for ContactServiceError {
  fn from(err: DeliveryError) -> Self {
    ContactServiceError::Delivery(err)
  }
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, req: ContactRequest) -> Result<ContactResponse, ContactServiceError>;
}

pub struct ContactServiceImpl {
  mailer: Arc<dyn Mailer>,
  sender: String,
  owner: String,
}

impl ContactServiceImpl {
  pub fn new(mailer: Arc<dyn Mailer>, sender: impl Into<String>, owner: impl Into<String>) -> Self {
    Self {
      mailer,
      sender: sender.into(),
      owner: owner.into(),
    }
  }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
  async fn submit(&self, req: ContactRequest) -> Result<ContactResponse, ContactServiceError> {
    let submission = validate_submission(req)?;

    let received_at = Utc::now();
    let message = render_contact_email(&submission, &self.sender, &self.owner, received_at);

    self.mailer.send(&message).await?;

    tracing::info!(
      email = %submission.email,
      received_at = %received_at.to_rfc3339(),
      "Contact form submission relayed"
    );

    Ok(ContactResponse::sent())
  }
}
