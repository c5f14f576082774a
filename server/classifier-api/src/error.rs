//! HTTP-facing errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use commit_classifier::ClassifyError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Classify(#[from] ClassifyError),

  #[error("batch too large: {got} messages (max {max})")]
  BatchTooLarge { got: usize, max: usize },
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Classify(ClassifyError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,
      Self::BatchTooLarge { .. } => StatusCode::BAD_REQUEST,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    tracing::warn!("request rejected: {}", self);
    (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
  }
}
