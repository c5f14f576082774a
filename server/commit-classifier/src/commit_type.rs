//! The closed set of conventional commit types and their reference data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Conventional commit type. Declaration order is the tie-break priority
/// used by the keyword scorer (earlier wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
  Feat,
  Fix,
  Docs,
  Style,
  Refactor,
  Perf,
  Test,
  Build,
  Ci,
  Chore,
  Revert,
}

impl CommitType {
  /// Every type, in priority order.
  pub const ALL: [CommitType; 11] = [
    Self::Feat,
    Self::Fix,
    Self::Docs,
    Self::Style,
    Self::Refactor,
    Self::Perf,
    Self::Test,
    Self::Build,
    Self::Ci,
    Self::Chore,
    Self::Revert,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Feat => "feat",
      Self::Fix => "fix",
      Self::Docs => "docs",
      Self::Style => "style",
      Self::Refactor => "refactor",
      Self::Perf => "perf",
      Self::Test => "test",
      Self::Build => "build",
      Self::Ci => "ci",
      Self::Chore => "chore",
      Self::Revert => "revert",
    }
  }

  /// Case-insensitive lookup; `None` for anything outside the fixed set.
  pub fn from_str_loose(s: &str) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|t| t.as_str().eq_ignore_ascii_case(s))
  }

  pub fn description(self) -> &'static str {
    match self {
      Self::Feat => "A new feature",
      Self::Fix => "A bug fix",
      Self::Docs => "Documentation changes",
      Self::Style => "Code style changes (formatting, semicolons, etc.)",
      Self::Refactor => "Code refactoring",
      Self::Perf => "Performance improvements",
      Self::Test => "Adding or updating tests",
      Self::Build => "Build system or dependency changes",
      Self::Ci => "CI/CD configuration changes",
      Self::Chore => "Other changes that don't modify src or test files",
      Self::Revert => "Reverts a previous commit",
    }
  }

  /// Lowercase keywords that hint at this type in free-form messages.
  pub fn keywords(self) -> &'static [&'static str] {
    match self {
      Self::Feat => &["add", "new", "implement", "create", "introduce"],
      Self::Fix => &["fix", "bug", "resolve", "correct", "repair", "patch"],
      Self::Docs => &["doc", "documentation", "readme", "comment", "guide"],
      Self::Style => &["style", "format", "indent", "whitespace", "lint"],
      Self::Refactor => &["refactor", "restructure", "optimize", "improve", "clean"],
      Self::Perf => &["performance", "perf", "speed", "optimize", "faster"],
      Self::Test => &["test", "testing", "spec", "coverage", "unit", "integration"],
      Self::Build => &["build", "dependency", "deps", "package", "npm", "pip"],
      Self::Ci => &["ci", "cd", "pipeline", "jenkins", "travis", "github actions"],
      Self::Chore => &["chore", "update", "upgrade", "maintenance", "config"],
      Self::Revert => &["revert", "undo", "rollback"],
    }
  }

  pub fn example(self) -> &'static str {
    match self {
      Self::Feat => "feat(auth): add OAuth2 login flow",
      Self::Fix => "fix(api): resolve null pointer in payment handler",
      Self::Docs => "docs: update README with installation steps",
      Self::Style => "style: format files with prettier",
      Self::Refactor => "refactor(db): extract query builder",
      Self::Perf => "perf: cache parsed templates",
      Self::Test => "test(auth): add unit tests for token refresh",
      Self::Build => "build(deps): bump serde to 1.0.200",
      Self::Ci => "ci: run clippy in the lint job",
      Self::Chore => "chore: update .gitignore",
      Self::Revert => "revert: undo session timeout change",
    }
  }
}

impl fmt::Display for CommitType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One row of the static type reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
  #[serde(rename = "type")]
  pub commit_type: CommitType,
  pub description: &'static str,
  pub keywords: &'static [&'static str],
  pub example: &'static str,
}

/// Reference data for every type, in priority order.
pub fn list_types() -> Vec<TypeInfo> {
  CommitType::ALL
    .into_iter()
    .map(|t| TypeInfo {
      commit_type: t,
      description: t.description(),
      keywords: t.keywords(),
      example: t.example(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_str_loose_is_case_insensitive() {
    assert_eq!(CommitType::from_str_loose("FEAT"), Some(CommitType::Feat));
    assert_eq!(CommitType::from_str_loose("Ci"), Some(CommitType::Ci));
    assert_eq!(CommitType::from_str_loose("feature"), None);
    assert_eq!(CommitType::from_str_loose(""), None);
  }

  #[test]
  fn list_types_follows_priority_order() {
    let types = list_types();
    assert_eq!(types.len(), 11);
    assert_eq!(types[0].commit_type, CommitType::Feat);
    assert_eq!(types[10].commit_type, CommitType::Revert);
    for info in &types {
      assert!(!info.keywords.is_empty());
      assert!(info.example.starts_with(info.commit_type.as_str()));
    }
  }

  #[test]
  fn serializes_lowercase() {
    let json = serde_json::to_string(&CommitType::Refactor).unwrap();
    assert_eq!(json, "\"refactor\"");
  }
}
