use axum::{
  body::Body,
  extract::State,
  http::header,
  response::{IntoResponse, Response},
  routing::get,
  Router,
};
use tokio_util::io::ReaderStream;

use super::service::ResumeServiceError;
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub const MISSING_RESUME_HINT: &str = "Please add a resume.pdf file to the backend directory";

fn map_resume_service_error(e: ResumeServiceError, expose_details: bool) -> AppError {
  match e {
    ResumeServiceError::NotFound(path) => {
      tracing::warn!("Resume file not found at {}", path.display());
      AppError::not_found("Resume file not found").with_hint(MISSING_RESUME_HINT)
    }
    ResumeServiceError::Io(err) => {
      tracing::error!("Error downloading resume: {:?}", err);
      AppError::internal_server_error("Failed to download resume").with_details(expose_details, &err)
    }
  }
}

pub fn resume_routes() -> Router<SharedAppState> {
  Router::new().route("/resume", get(download_resume_handler))
}

pub async fn download_resume_handler(State(state): State<SharedAppState>) -> Result<Response, AppError> {
  let resume = state
    .fetch_resume()
    .await
    .map_err(|e| map_resume_service_error(e, state.environment().is_development()))?;

  let disposition = format!("attachment; filename=\"{}\"", resume.download_name);

  Ok(
    (
      [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (header::CONTENT_DISPOSITION, disposition),
        (header::CONTENT_LENGTH, resume.len.to_string()),
      ],
      Body::from_stream(ReaderStream::new(resume.file)),
    )
      .into_response(),
  )
}
