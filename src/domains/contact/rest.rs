use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::post,
  Router,
};

use super::{
  model::{ContactRequest, ContactResponse},
  service::ContactServiceError,
  validation::ValidationError,
};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

fn map_contact_service_error(e: ContactServiceError, expose_details: bool) -> AppError {
  match e {
    ContactServiceError::Validation(ValidationError::MissingFields(missing)) => {
      tracing::debug!(?missing, "Contact submission rejected: missing fields");
      AppError::bad_request("All fields are required").with_missing(missing)
    }
    ContactServiceError::Validation(ValidationError::InvalidEmail) => {
      tracing::debug!("Contact submission rejected: invalid email format");
      AppError::bad_request("Invalid email format")
    }
    ContactServiceError::Delivery(err) => {
      tracing::error!("Error sending email: {:?}", err);
      AppError::internal_server_error(DELIVERY_FAILED_MESSAGE).with_details(expose_details, &err)
    }
  }
}

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/contact", post(send_contact_email_handler))
}

pub async fn send_contact_email_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<JsonResponse<ContactResponse>, AppError> {
  let Json(payload) = payload?;

  state
    .submit_contact(payload)
    .await
    .map(JsonResponse)
    .map_err(|e| map_contact_service_error(e, state.environment().is_development()))
}
