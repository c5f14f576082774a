//! Structured error types for the classifier.

use thiserror::Error;

/// The only way a classification can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
  #[error("invalid input: {reason}")]
  InvalidInput { reason: String },
}

impl ClassifyError {
  pub fn invalid_input(reason: &str) -> Self {
    Self::InvalidInput {
      reason: reason.to_string(),
    }
  }
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config: {key}: invalid value {value:?}")]
  Invalid { key: String, value: String },

  #[error("config: {key}: {reason}")]
  Constraint { key: String, reason: String },
}

impl ConfigError {
  pub fn invalid(key: &str, value: &str) -> Self {
    Self::Invalid {
      key: key.to_string(),
      value: value.to_string(),
    }
  }

  pub fn constraint(key: &str, reason: &str) -> Self {
    Self::Constraint {
      key: key.to_string(),
      reason: reason.to_string(),
    }
  }
}
