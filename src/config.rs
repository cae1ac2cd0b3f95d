use std::{collections::HashMap, env, path::PathBuf, time::Duration};

use anyhow::{anyhow, Context, Result};

use crate::email::SmtpConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
  Development,
  Production,
}

impl Environment {
  pub fn as_str(&self) -> &'static str {
    match self {
      Environment::Development => "development",
      Environment::Production => "production",
    }
  }

  pub fn is_development(&self) -> bool {
    matches!(self, Environment::Development)
  }
}

impl TryFrom<String> for Environment {
  type Error = String;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    match value.trim().to_lowercase().as_str() {
      "development" | "dev" | "local" => Ok(Self::Development),
      "production" | "prod" => Ok(Self::Production),
      other => Err(format!(
        "{} is not a supported environment. Use either `development` or `production`.",
        other
      )),
    }
  }
}

#[derive(Debug, Clone)]
pub struct ResumeConfig {
  pub path: PathBuf,
  pub download_name: String,
}

impl Default for ResumeConfig {
  fn default() -> Self {
    ResumeConfig {
      path: PathBuf::from("resume.pdf"),
      download_name: "Sayyedain_Saqlain_Resume.pdf".to_string(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub host: String,
  pub port: u16,
  pub environment: Environment,
  pub smtp: SmtpConfig,
  /// Address that receives contact submissions. The service always mails itself.
  pub owner_email: String,
  pub resume: ResumeConfig,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
    Self::from_lookup(|key| vars.get(key).cloned())
  }

  fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let username = var("EMAIL_USER").context("EMAIL_USER not set")?;
    let password = var("EMAIL_PASS").context("EMAIL_PASS not set")?;

    let smtp_port: u16 = match var("SMTP_PORT") {
      Some(port) => port.parse().with_context(|| format!("SMTP_PORT is not a valid port: {}", port))?,
      None => 587,
    };
    let timeout_secs: u64 = match var("EMAIL_TIMEOUT_SECS") {
      Some(secs) => secs
        .parse()
        .with_context(|| format!("EMAIL_TIMEOUT_SECS is not a number: {}", secs))?,
      None => 10,
    };

    let environment = Environment::try_from(var("APP_ENV").unwrap_or_else(|| "production".to_string()))
      .map_err(|e| anyhow!(e))
      .context("failed to parse APP_ENV")?;

    let port: u16 = match var("PORT") {
      Some(port) => port.parse().with_context(|| format!("PORT is not a valid port: {}", port))?,
      None => 5000,
    };

    let defaults = ResumeConfig::default();
    let resume = ResumeConfig {
      path: var("RESUME_PATH").map(PathBuf::from).unwrap_or(defaults.path),
      download_name: var("RESUME_FILENAME").unwrap_or(defaults.download_name),
    };

    Ok(AppConfig {
      host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
      port,
      environment,
      owner_email: var("EMAIL_TO").unwrap_or_else(|| username.clone()),
      smtp: SmtpConfig {
        service: var("EMAIL_SERVICE").unwrap_or_else(|| "gmail".to_string()),
        host: var("SMTP_HOST"),
        port: smtp_port,
        username,
        password,
        timeout: Duration::from_secs(timeout_secs),
      },
      resume,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}
