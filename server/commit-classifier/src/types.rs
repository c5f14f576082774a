//! Result type plus the JSON-lines contract used by the binary.

use serde::{Deserialize, Serialize};

use crate::commit_type::CommitType;

/// Structured classification of one commit message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
  /// The message exactly as received.
  pub message: String,
  #[serde(rename = "type")]
  pub commit_type: CommitType,
  pub scope: Option<String>,
  pub description: String,
  /// Deterministic certainty in [0, 1].
  pub confidence: f64,
  /// Header carried the `!` breaking-change marker.
  pub breaking: bool,
  pub suggestions: Vec<String>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// One input line for the binary. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageInput {
  pub message: String,
}

/// Structured error output for input lines that could not be classified.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
