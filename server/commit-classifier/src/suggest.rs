//! Advisory suggestions for improving a commit message.

use crate::commit_type::CommitType;
use crate::config::Config;

/// Leading words that signal non-imperative phrasing, paired with the
/// imperative form to recommend.
const NON_IMPERATIVE: &[(&str, &str)] = &[
  ("added", "add"),
  ("adding", "add"),
  ("fixed", "fix"),
  ("fixing", "fix"),
  ("updated", "update"),
  ("updating", "update"),
  ("changed", "change"),
  ("changing", "change"),
  ("removed", "remove"),
  ("removing", "remove"),
  ("created", "create"),
  ("creating", "create"),
];

/// What the generator needs to know about a classification.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInput<'a> {
  /// Trimmed message.
  pub message: &'a str,
  pub commit_type: CommitType,
  pub description: &'a str,
  pub conventional: bool,
}

/// Run every rule in a fixed order and collect the ones that fire.
pub fn generate(input: &SuggestionInput<'_>, config: &Config) -> Vec<String> {
  let mut out = Vec::new();

  if !input.conventional {
    out.push(format!(
      "Consider using conventional format: {}: {}",
      input.commit_type, input.description
    ));
  }

  let len = input.message.chars().count();
  if len < config.min_length {
    out.push("Commit message is too short. Add more details.".to_string());
  }
  if len > config.max_length {
    out.push("Commit message is long. Consider keeping summary under 72 characters.".to_string());
  }

  if let Some((marker, stem)) = non_imperative_marker(input.description) {
    out.push(format!(
      "Use imperative mood (e.g., '{}' instead of '{}')",
      stem, marker
    ));
  }

  if input.description.chars().next().is_some_and(char::is_uppercase) {
    out.push("Start description with lowercase letter".to_string());
  }
  if input.description.ends_with('.') {
    out.push("Remove the trailing period from the description".to_string());
  }

  out
}

/// First word of `description`, lowercased, checked against the marker list.
fn non_imperative_marker(description: &str) -> Option<(&'static str, &'static str)> {
  let first = description.split_whitespace().next()?.to_lowercase();
  NON_IMPERATIVE
    .iter()
    .copied()
    .find(|(marker, _)| first.starts_with(marker))
}
