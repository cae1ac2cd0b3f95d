use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Body of `POST /api/contact`. Fields are optional so that a missing key is reported per field instead of
/// failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub message: Option<String>,
}

/// A submission that passed validation and may be relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
  pub name: String,
  pub email: String,
  pub message: String,
}

/// `true` marks a field that was absent or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissingFields {
  pub name: bool,
  pub email: bool,
  pub message: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
  pub success: bool,
  pub message: String,
}

impl ContactResponse {
  pub fn sent() -> Self {
    ContactResponse {
      success: true,
      message: SUCCESS_MESSAGE.to_string(),
    }
  }
}
