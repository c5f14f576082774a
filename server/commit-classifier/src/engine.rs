//! Core engine: format match, keyword fallback, suggestions.

use rayon::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::error::ClassifyError;
use crate::format::{self, CONVENTIONAL_CONFIDENCE};
use crate::keywords;
use crate::suggest::{self, SuggestionInput};
use crate::types::ClassificationResult;

/// Stateless classifier. Holds only immutable configuration, so one instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
  config: Config,
}

impl Classifier {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::default()
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Classify a single message.
  ///
  /// Fails only on empty or whitespace-only input; anything else yields a
  /// best-effort result.
  pub fn classify(&self, message: &str) -> Result<ClassificationResult, ClassifyError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
      return Err(ClassifyError::invalid_input("empty commit message"));
    }

    let (commit_type, scope, description, confidence, breaking, conventional) =
      match format::match_conventional(trimmed) {
        Some(m) => (
          m.commit_type,
          m.scope,
          m.description,
          CONVENTIONAL_CONFIDENCE,
          m.breaking,
          true,
        ),
        None => {
          let s = keywords::score(trimmed, self.config.fallback_type);
          (s.commit_type, None, trimmed.to_string(), s.confidence, false, false)
        }
      };

    let suggestions = suggest::generate(
      &SuggestionInput {
        message: trimmed,
        commit_type,
        description: &description,
        conventional,
      },
      &self.config,
    );

    debug!(
      commit_type = %commit_type,
      confidence,
      conventional,
      suggestions = suggestions.len(),
      "classified commit message"
    );

    Ok(ClassificationResult {
      message: message.to_string(),
      commit_type,
      scope,
      description,
      confidence,
      breaking,
      suggestions,
    })
  }

  /// Classify every message independently. Output order and length match
  /// the input; a bad entry fails on its own without affecting the others.
  pub fn classify_batch<S>(&self, messages: &[S]) -> Vec<Result<ClassificationResult, ClassifyError>>
  where
    S: AsRef<str> + Sync,
  {
    messages
      .par_iter()
      .map(|m| self.classify(m.as_ref()))
      .collect()
  }
}
