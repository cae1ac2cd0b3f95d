use std::sync::LazyLock;

use lettre::Address;
use regex::Regex;

use super::model::{ContactRequest, MissingFields, Submission};

static EMAIL_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  MissingFields(MissingFields),
  InvalidEmail,
}

impl std::error::Error for ValidationError {}

impl std::fmt::Display for ValidationError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ValidationError::MissingFields(_) => write!(f, "All fields are required"),
      ValidationError::InvalidEmail => write!(f, "Invalid email format"),
    }
  }
}

/// The address must have the `local@domain.tld` shape and also be usable as a `Reply-To` mailbox.
pub fn is_valid_email(email: &str) -> bool {
  EMAIL_PATTERN.is_match(email) && email.parse::<Address>().is_ok()
}

fn present(field: Option<String>) -> Option<String> {
  field.filter(|value| !value.is_empty())
}

/// Checks presence of every field, then the address shape. Whitespace-only text counts as present.
pub fn validate_submission(request: ContactRequest) -> Result<Submission, ValidationError> {
  let name = present(request.name);
  let email = present(request.email);
  let message = present(request.message);

  let missing = MissingFields {
    name: name.is_none(),
    email: email.is_none(),
    message: message.is_none(),
  };

  let (Some(name), Some(email), Some(message)) = (name, email, message) else {
    return Err(ValidationError::MissingFields(missing));
  };

  if !is_valid_email(&email) {
    return Err(ValidationError::InvalidEmail);
  }

  Ok(Submission { name, email, message })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> ContactRequest {
    ContactRequest {
      name: name.map(str::to_string),
      email: email.map(str::to_string),
      message: message.map(str::to_string),
    }
  }

  #[test]
  fn accepts_well_formed_submission() {
    let submission = validate_submission(request(Some("Ada"), Some("ada@example.com"), Some("Hello"))).unwrap();
    assert_eq!(
      submission,
      Submission {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello".to_string(),
      }
    );
  }

  #[test]
  fn reports_exactly_the_missing_fields() {
    let cases = [
      (request(None, Some("ada@example.com"), Some("Hello")), (true, false, false)),
      (request(Some("Ada"), None, Some("Hello")), (false, true, false)),
      (request(Some("Ada"), Some("ada@example.com"), None), (false, false, true)),
      (request(Some(""), Some(""), Some("Hello")), (true, true, false)),
      (request(None, None, None), (true, true, true)),
    ];

    for (req, (name, email, message)) in cases {
      assert_eq!(
        validate_submission(req),
        Err(ValidationError::MissingFields(MissingFields { name, email, message }))
      );
    }
  }

  #[test]
  fn missing_fields_take_precedence_over_email_format() {
    let result = validate_submission(request(None, Some("not-an-email"), Some("Hello")));
    assert!(matches!(result, Err(ValidationError::MissingFields(_))));
  }

  #[test]
  fn rejects_malformed_addresses() {
    for email in [
      "plainaddress",
      "ada@example",
      "@example.com",
      "ada@.com",
      "ada lovelace@example.com",
      "ada@exa mple.com",
      "ada@@example.com",
      "   ",
      "ada@example.com.",
      "a,b@example.com",
      "<x>@example.com",
      "a\"b@example.com",
      "ad(a)@example.com",
    ] {
      assert_eq!(
        validate_submission(request(Some("Ada"), Some(email), Some("Hello"))),
        Err(ValidationError::InvalidEmail),
        "{email} should be rejected"
      );
    }
  }

  #[test]
  fn accepts_loose_but_shaped_addresses() {
    for email in ["a@b.c", "first.last+tag@sub.example.co.uk", "ada@exa_mple.com"] {
      assert!(is_valid_email(email), "{email} should be accepted");
    }
  }

  #[test]
  fn whitespace_only_name_counts_as_present() {
    let result = validate_submission(request(Some("  "), Some("ada@example.com"), Some("Hello")));
    assert!(result.is_ok());
  }
}
