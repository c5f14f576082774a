//! Commit Message Classifier: deterministic, rule-based conventional-commit
//! classification. No AI, no DB, no network.
//!
//! A message is first matched against `type(scope)!: description`; if that
//! fails, per-type keyword scoring picks a best-effort type. Either way the
//! result carries advisory suggestions for improving the message.

pub mod commit_type;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod keywords;
pub mod suggest;
pub mod types;

pub use commit_type::{list_types, CommitType, TypeInfo};
pub use config::Config;
pub use engine::Classifier;
pub use error::{ClassifyError, ConfigError};
pub use types::ClassificationResult;

/// Classify one message with the default configuration.
pub fn classify(message: &str) -> Result<ClassificationResult, ClassifyError> {
  Classifier::with_defaults().classify(message)
}
