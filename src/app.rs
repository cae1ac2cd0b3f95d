use axum::{
  http::{header, Method},
  response::Json as JsonResponse,
  routing::get,
  Router,
};
use serde_json::{json, Value};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  domains::{contact::rest::contact_routes, resume::rest::resume_routes},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .nest(
      "/api",
      Router::new()
        .route("/health", get(health_check_handler))
        .merge(contact_routes())
        .merge(resume_routes()),
    )
    .with_state(state)
    .layer(create_cors_layer())
    .layer(TraceLayer::new_for_http())
}

fn create_cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::POST])
    .allow_headers([header::CONTENT_TYPE])
}

pub async fn health_check_handler() -> JsonResponse<Value> {
  JsonResponse(json!({ "status": "ok" }))
}
