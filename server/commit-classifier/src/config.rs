//! Classifier configuration with sane defaults.

use crate::commit_type::CommitType;
use crate::error::ConfigError;

/// Tunables for suggestions and fallback classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Messages shorter than this (in chars) get a "too short" suggestion.
  pub min_length: usize,
  /// Messages longer than this (in chars) get a "too long" suggestion.
  pub max_length: usize,
  /// Type used when no keyword matches.
  pub fallback_type: CommitType,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      min_length: 10,
      max_length: 100,
      fallback_type: CommitType::Chore,
    }
  }
}

impl Config {
  /// Defaults overridden by `CLASSIFIER_MIN_LENGTH`, `CLASSIFIER_MAX_LENGTH`
  /// and `CLASSIFIER_FALLBACK_TYPE` when set.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Same as `from_env`, reading values through `lookup`.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(raw) = lookup("CLASSIFIER_MIN_LENGTH") {
      config.min_length = parse_usize("CLASSIFIER_MIN_LENGTH", &raw)?;
    }
    if let Some(raw) = lookup("CLASSIFIER_MAX_LENGTH") {
      config.max_length = parse_usize("CLASSIFIER_MAX_LENGTH", &raw)?;
    }
    if let Some(raw) = lookup("CLASSIFIER_FALLBACK_TYPE") {
      config.fallback_type = CommitType::from_str_loose(raw.trim())
        .ok_or_else(|| ConfigError::invalid("CLASSIFIER_FALLBACK_TYPE", &raw))?;
    }

    if config.min_length > config.max_length {
      return Err(ConfigError::constraint(
        "CLASSIFIER_MIN_LENGTH",
        "must not exceed CLASSIFIER_MAX_LENGTH",
      ));
    }
    Ok(config)
  }
}

fn parse_usize(key: &str, raw: &str) -> Result<usize, ConfigError> {
  raw.trim().parse().map_err(|_| ConfigError::invalid(key, raw))
}
