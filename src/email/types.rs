use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  /// Provider identifier such as `gmail`, used when `host` is not given.
  pub service: String,
  pub host: Option<String>,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub timeout: Duration,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      service: "gmail".to_string(),
      host: None,
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      timeout: Duration::from_secs(10),
    }
  }
}

impl SmtpConfig {
  /// The SMTP host to connect to: the explicit host if any, otherwise the well-known relay of the provider.
  pub fn resolve_host(&self) -> Option<String> {
    if let Some(host) = self.host.as_ref().filter(|h| !h.trim().is_empty()) {
      return Some(host.trim().to_string());
    }

    let host = match self.service.trim().to_ascii_lowercase().as_str() {
      "gmail" => "smtp.gmail.com",
      "outlook" | "hotmail" | "outlook365" => "smtp-mail.outlook.com",
      "yahoo" => "smtp.mail.yahoo.com",
      "icloud" => "smtp.mail.me.com",
      "zoho" => "smtp.zoho.com",
      _ => return None,
    };
    Some(host.to_string())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
  pub from: String,
  pub to: String,
  pub reply_to: String,
  pub subject: String,
  pub html_body: String,
}
