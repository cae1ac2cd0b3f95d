use std::{error::Error, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use crate::config::ResumeConfig;

#[derive(Debug)]
pub enum ResumeServiceError {
  NotFound(PathBuf),
  Io(std::io::Error),
}

impl Error for ResumeServiceError {}

impl std::fmt::Display for ResumeServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ResumeServiceError::NotFound(path) => write!(f, "Resume not found at {}", path.display()),
      ResumeServiceError::Io(err) => write!(f, "{}", err),
    }
  }
}

impl From<std::io::Error> for ResumeServiceError {
  fn from(err: std::io::Error) -> Self {
    ResumeServiceError::Io(err)
  }
}

/// An opened résumé, ready to be streamed to the client.
#[derive(Debug)]
pub struct ResumeFile {
  pub download_name: String,
  pub len: u64,
  pub file: tokio::fs::File,
}

#[async_trait]
pub trait ResumeService: Send + Sync {
  async fn fetch_resume(&self) -> Result<ResumeFile, ResumeServiceError>;
}

pub struct ResumeServiceImpl {
  config: ResumeConfig,
}

impl ResumeServiceImpl {
  pub fn new(config: ResumeConfig) -> Self {
    Self { config }
  }
}

#[async_trait]
impl ResumeService for ResumeServiceImpl {
  async fn fetch_resume(&self) -> Result<ResumeFile, ResumeServiceError> {
    let file = match tokio::fs::File::open(&self.config.path).await {
      Ok(file) => file,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        return Err(ResumeServiceError::NotFound(self.config.path.clone()));
      }
      Err(e) => return Err(e.into()),
    };

    let metadata = file.metadata().await?;
    if !metadata.is_file() {
      return Err(ResumeServiceError::Io(std::io::Error::new(
        ErrorKind::InvalidInput,
        format!("{} is not a regular file", self.config.path.display()),
      )));
    }

    tracing::info!(bytes = metadata.len(), "Resume downloaded");

    Ok(ResumeFile {
      download_name: self.config.download_name.clone(),
      len: metadata.len(),
      file,
    })
  }
}
