//! Request/response types for the classifier API.

use commit_classifier::{ClassificationResult, CommitType, TypeInfo};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
  pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
  pub messages: Vec<String>,
}

/// A classification stamped with the time it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
  #[serde(flatten)]
  pub result: ClassificationResult,
  pub timestamp: String,
}

/// Per-message failure inside a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItemError {
  pub message: String,
  pub error: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchItem {
  Ok(ClassifyResponse),
  Err(BatchItemError),
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
  pub results: Vec<BatchItem>,
  pub total: usize,
}

/// The `/types` body: an object keyed by type name, in priority order.
#[derive(Debug, Clone)]
pub struct TypesResponse(pub Vec<TypeInfo>);

#[derive(Serialize)]
struct TypeEntry {
  description: &'static str,
  keywords: &'static [&'static str],
  example: &'static str,
}

impl Serialize for TypesResponse {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.0.len()))?;
    for info in &self.0 {
      map.serialize_entry(
        info.commit_type.as_str(),
        &TypeEntry {
          description: info.description,
          keywords: info.keywords,
          example: info.example,
        },
      )?;
    }
    map.end()
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
  pub total_commit_types: usize,
  pub supported_types: Vec<CommitType>,
  pub api_version: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
  pub message: &'static str,
  pub version: &'static str,
  pub endpoints: BTreeMap<&'static str, &'static str>,
}
