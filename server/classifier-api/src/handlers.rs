//! HTTP handlers for the classifier API.

use axum::{extract::State, Json};
use commit_classifier::{list_types, CommitType};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::date;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::*;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn health() -> &'static str {
  "ok"
}

pub async fn root() -> Json<RootResponse> {
  let endpoints = BTreeMap::from([
    ("/classify", "POST - Classify a single commit message"),
    ("/classify/batch", "POST - Classify multiple commit messages"),
    ("/types", "GET - Get all commit types and their descriptions"),
    ("/stats", "GET - Get API statistics"),
  ]);
  Json(RootResponse {
    message: "Commit Message Classifier API",
    version: API_VERSION,
    endpoints,
  })
}

pub async fn classify(
  State(state): State<Arc<AppState>>,
  Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
  let result = state.classifier.classify(&req.message)?;
  Ok(Json(ClassifyResponse {
    result,
    timestamp: date::now_rfc3339(),
  }))
}

pub async fn classify_batch(
  State(state): State<Arc<AppState>>,
  Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
  if req.messages.len() > state.max_batch_size {
    return Err(ApiError::BatchTooLarge {
      got: req.messages.len(),
      max: state.max_batch_size,
    });
  }

  let timestamp = date::now_rfc3339();
  let results: Vec<BatchItem> = state
    .classifier
    .classify_batch(&req.messages)
    .into_iter()
    .zip(&req.messages)
    .map(|(outcome, message)| match outcome {
      Ok(result) => BatchItem::Ok(ClassifyResponse {
        result,
        timestamp: timestamp.clone(),
      }),
      Err(e) => BatchItem::Err(BatchItemError {
        message: message.clone(),
        error: e.to_string(),
      }),
    })
    .collect();

  Ok(Json(BatchResponse {
    total: results.len(),
    results,
  }))
}

pub async fn get_types() -> Json<TypesResponse> {
  Json(TypesResponse(list_types()))
}

pub async fn stats() -> Json<StatsResponse> {
  Json(StatsResponse {
    total_commit_types: CommitType::ALL.len(),
    supported_types: CommitType::ALL.to_vec(),
    api_version: API_VERSION,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::StatusCode;
  use axum::response::IntoResponse;
  use commit_classifier::Classifier;

  fn state(max_batch_size: usize) -> State<Arc<AppState>> {
    State(Arc::new(AppState {
      classifier: Classifier::with_defaults(),
      max_batch_size,
    }))
  }

  #[tokio::test]
  async fn classify_returns_timestamped_result() {
    let Json(resp) = classify(
      state(10),
      Json(ClassifyRequest {
        message: "fix(api): resolve CORS issue".into(),
      }),
    )
    .await
    .unwrap();
    assert_eq!(resp.result.commit_type, CommitType::Fix);
    assert_eq!(resp.result.scope.as_deref(), Some("api"));

    let v = serde_json::to_value(&resp).unwrap();
    assert_eq!(v["type"], "fix");
    assert_eq!(v["message"], "fix(api): resolve CORS issue");
    assert!(v["timestamp"].is_string());
  }

  #[tokio::test]
  async fn classify_empty_message_is_bad_request() {
    let err = classify(state(10), Json(ClassifyRequest { message: "  ".into() }))
      .await
      .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn batch_mixes_results_and_errors_in_order() {
    let Json(resp) = classify_batch(
      state(10),
      Json(BatchRequest {
        messages: vec!["feat: add login feature".into(), "".into(), "added tests".into()],
      }),
    )
    .await
    .unwrap();
    assert_eq!(resp.total, 3);

    let v = serde_json::to_value(&resp).unwrap();
    assert_eq!(v["results"][0]["type"], "feat");
    assert_eq!(v["results"][1]["message"], "");
    assert!(v["results"][1]["error"].as_str().unwrap().contains("empty"));
    assert_eq!(v["results"][2]["message"], "added tests");
    assert!(v["results"][2]["confidence"].as_f64().unwrap() < 0.95);
  }

  #[tokio::test]
  async fn oversized_batch_is_rejected() {
    let err = classify_batch(
      state(1),
      Json(BatchRequest {
        messages: vec!["feat: a".into(), "fix: b".into()],
      }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::BatchTooLarge { got: 2, max: 1 }));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn types_are_keyed_in_priority_order() {
    let Json(resp) = get_types().await;
    let json = serde_json::to_string(&resp).unwrap();
    let feat = json.find("\"feat\"").unwrap();
    let fix = json.find("\"fix\"").unwrap();
    let revert = json.find("\"revert\"").unwrap();
    assert!(feat < fix && fix < revert);

    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v.as_object().unwrap().len(), 11);
    assert_eq!(v["docs"]["description"], "Documentation changes");
    assert!(v["ci"]["keywords"].as_array().unwrap().iter().any(|k| k == "pipeline"));
  }

  #[tokio::test]
  async fn stats_lists_supported_types() {
    let Json(resp) = stats().await;
    assert_eq!(resp.total_commit_types, 11);
    let v = serde_json::to_value(&resp).unwrap();
    assert_eq!(v["supported_types"][0], "feat");
    assert_eq!(v["supported_types"][10], "revert");
  }
}
