use std::{
  path::{Path, PathBuf},
  sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::{Environment, ResumeConfig},
  email::{DeliveryError, EmailMessage, Mailer},
  state::SharedAppState,
};

/// Records every message handed to it and answers with a fixed outcome.
pub struct StubMailer {
  failure: Option<String>,
  sent: Mutex<Vec<EmailMessage>>,
}

impl StubMailer {
  pub fn accepting() -> Self {
    Self {
      failure: None,
      sent: Mutex::new(Vec::new()),
    }
  }

  pub fn failing(error: &str) -> Self {
    Self {
      failure: Some(error.to_string()),
      sent: Mutex::new(Vec::new()),
    }
  }

  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().expect("stub mailer lock").clone()
  }
}

#[async_trait]
impl Mailer for StubMailer {
  async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
    self.sent.lock().expect("stub mailer lock").push(message.clone());
    match &self.failure {
      Some(error) => Err(DeliveryError::Transport(error.clone())),
      None => Ok(()),
    }
  }
}

/// A path under the temp dir that is removed on drop.
pub struct TempFile {
  path: PathBuf,
}

impl TempFile {
  pub fn absent() -> Self {
    let path = std::env::temp_dir().join(format!("portfolio-api-{}.pdf", uuid::Uuid::new_v4()));
    Self { path }
  }

  pub fn with_contents(contents: &[u8]) -> Self {
    let file = Self::absent();
    std::fs::write(&file.path, contents).expect("write temp file");
    file
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl Drop for TempFile {
  fn drop(&mut self) {
    let _ = std::fs::remove_file(&self.path);
  }
}

pub fn app_with_mailer(mailer: Arc<dyn Mailer>, environment: Environment) -> Router {
  let state = SharedAppState::from_parts(
    mailer,
    "owner@example.com",
    "owner@example.com",
    ResumeConfig::default(),
    environment,
  );
  create_app(state)
}

pub fn app_with_resume(resume: ResumeConfig) -> Router {
  let state = SharedAppState::from_parts(
    Arc::new(StubMailer::accepting()),
    "owner@example.com",
    "owner@example.com",
    resume,
    Environment::Production,
  );
  create_app(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  post_raw(app, uri, serde_json::to_vec(body).expect("serialize request body")).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(body.into())
    .expect("build request");

  let (status, _, body) = send(app, request).await;
  (status, body)
}

pub async fn get_response(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let (status, _, body) = get_response(app, uri).await;
  (status, body)
}
