use std::sync::Arc;

use crate::{
  config::{AppConfig, Environment, ResumeConfig},
  domains::{
    contact::{
      model::{ContactRequest, ContactResponse},
      service::{ContactService, ContactServiceError, ContactServiceImpl},
    },
    resume::service::{ResumeFile, ResumeService, ResumeServiceError, ResumeServiceImpl},
  },
  email::Mailer,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_contact(
    &self,
    req: ContactRequest,
  ) -> impl std::future::Future<Output = Result<ContactResponse, ContactServiceError>> + Send;
  fn fetch_resume(&self) -> impl std::future::Future<Output = Result<ResumeFile, ResumeServiceError>> + Send;
  fn environment(&self) -> Environment;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<dyn ContactService>,
  pub resume_service: Arc<dyn ResumeService>,
  pub environment: Environment,
}

impl SharedAppState {
  pub fn new(config: &AppConfig, mailer: Arc<dyn Mailer>) -> Self {
    Self::from_parts(
      mailer,
      &config.smtp.username,
      &config.owner_email,
      config.resume.clone(),
      config.environment,
    )
  }

  pub fn from_parts(
    mailer: Arc<dyn Mailer>,
    sender: &str,
    owner: &str,
    resume: ResumeConfig,
    environment: Environment,
  ) -> Self {
    let contact_service = Arc::new(ContactServiceImpl::new(mailer, sender, owner));
    let resume_service = Arc::new(ResumeServiceImpl::new(resume));

    Self {
      contact_service,
      resume_service,
      environment,
    }
  }
}

impl AppState for SharedAppState {
  async fn submit_contact(&self, req: ContactRequest) -> Result<ContactResponse, ContactServiceError> {
    self.contact_service.submit(req).await
  }

  async fn fetch_resume(&self) -> Result<ResumeFile, ResumeServiceError> {
    self.resume_service.fetch_resume().await
  }

  fn environment(&self) -> Environment {
    self.environment
  }
}
