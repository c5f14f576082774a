//! Conventional commit header matching: `type(scope)!: description`.

use std::sync::LazyLock;

use regex::Regex;

use crate::commit_type::CommitType;

/// Confidence granted to any message that parses as a conventional commit.
pub const CONVENTIONAL_CONFIDENCE: f64 = 0.95;

/// Word, optional parenthesised scope with at least one non-blank char,
/// optional `!`, colon, at least one blank, then a non-blank description on
/// the same line.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([A-Za-z]+)(?:\(([^()\r\n]*[^()\s][^()\r\n]*)\))?(!)?:[ \t]+(\S)").unwrap()
});

/// A successfully parsed conventional header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalMatch {
  pub commit_type: CommitType,
  pub scope: Option<String>,
  pub breaking: bool,
  pub description: String,
}

/// Try to parse `message` (already trimmed) as a conventional commit.
///
/// Returns `None` when the header shape is wrong or the type word is not one
/// of the fixed set; the caller falls back to keyword scoring.
pub fn match_conventional(message: &str) -> Option<ConventionalMatch> {
  let caps = HEADER_RE.captures(message)?;
  let commit_type = CommitType::from_str_loose(caps.get(1)?.as_str())?;
  let scope = caps.get(2).map(|m| m.as_str().to_string());
  let breaking = caps.get(3).is_some();
  let description = message[caps.get(4)?.start()..].trim_end().to_string();

  Some(ConventionalMatch {
    commit_type,
    scope,
    breaking,
    description,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_type_only() {
    let m = match_conventional("feat: add login").unwrap();
    assert_eq!(m.commit_type, CommitType::Feat);
    assert_eq!(m.scope, None);
    assert!(!m.breaking);
    assert_eq!(m.description, "add login");
  }

  #[test]
  fn parses_scope_and_breaking_marker() {
    let m = match_conventional("refactor(core)!: drop legacy api").unwrap();
    assert_eq!(m.commit_type, CommitType::Refactor);
    assert_eq!(m.scope.as_deref(), Some("core"));
    assert!(m.breaking);
    assert_eq!(m.description, "drop legacy api");
  }

  #[test]
  fn type_is_case_insensitive() {
    let m = match_conventional("FIX(API): resolve bug").unwrap();
    assert_eq!(m.commit_type, CommitType::Fix);
    assert_eq!(m.scope.as_deref(), Some("API"));
  }

  #[test]
  fn scope_is_returned_verbatim() {
    let m = match_conventional("feat( api ): add login").unwrap();
    assert_eq!(m.scope.as_deref(), Some(" api "));
  }

  #[test]
  fn blank_scope_is_not_conventional() {
    assert!(match_conventional("feat( ): add login").is_none());
    assert!(match_conventional("feat(\t): add login").is_none());
    assert!(match_conventional("feat(): add login").is_none());
  }

  #[test]
  fn description_keeps_body() {
    let m = match_conventional("docs: update guide\n\nmention the new flag").unwrap();
    assert_eq!(m.description, "update guide\n\nmention the new flag");
  }

  #[test]
  fn rejects_non_conventional_shapes() {
    assert!(match_conventional("added new feature").is_none());
    assert!(match_conventional("feature: add login").is_none());
    assert!(match_conventional("feat:add login").is_none());
    assert!(match_conventional("feat: ").is_none());
    assert!(match_conventional("feat(): add login").is_none());
    assert!(match_conventional("feat(api: add login").is_none());
    assert!(match_conventional("feat:\nadd login").is_none());
  }
}
