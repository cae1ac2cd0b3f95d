use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;

use crate::domains::contact::model::MissingFields;

#[derive(Debug, Serialize)]
pub struct AppError {
  #[serde(skip)]
  pub status_code: StatusCode,
  #[serde(rename = "error")]
  pub message: String,
  #[serde(rename = "message", skip_serializing_if = "Option::is_none")]
  pub hint: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub missing: Option<MissingFields>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<String>,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
      hint: None,
      missing: None,
      details: None,
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }

  pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
    self.hint = Some(hint.into());
    self
  }

  pub fn with_missing(mut self, missing: MissingFields) -> Self {
    self.missing = Some(missing);
    self
  }

  /// Attaches the underlying error text, but only when `expose` is set (development mode).
  pub fn with_details(mut self, expose: bool, details: impl ToString) -> Self {
    if expose {
      self.details = Some(details.to_string());
    }
    self
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let status_code = self.status_code;
    (status_code, Json(self)).into_response()
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::debug!("JSON rejection: {}", rejection.body_text());
    AppError::bad_request("Invalid JSON format")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_only_populated_fields() {
    let err = AppError::bad_request("Invalid email format");
    let body = serde_json::to_value(&err).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Invalid email format" }));
  }

  #[test]
  fn with_details_respects_exposure_flag() {
    let hidden = AppError::internal_server_error("boom").with_details(false, "smtp down");
    assert!(hidden.details.is_none());

    let shown = AppError::internal_server_error("boom").with_details(true, "smtp down");
    assert_eq!(shown.details.as_deref(), Some("smtp down"));
  }

  #[test]
  fn hint_serializes_as_message() {
    let err = AppError::not_found("Resume file not found").with_hint("add the file");
    let body = serde_json::to_value(&err).unwrap();
    assert_eq!(
      body,
      serde_json::json!({ "error": "Resume file not found", "message": "add the file" })
    );
  }
}
