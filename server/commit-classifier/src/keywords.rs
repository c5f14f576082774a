//! Keyword scoring: fallback classification for free-form messages.

use crate::commit_type::CommitType;

pub const KEYWORD_BASE_CONFIDENCE: f64 = 0.6;
pub const KEYWORD_STEP: f64 = 0.1;
pub const KEYWORD_MAX_CONFIDENCE: f64 = 0.9;
/// Confidence when nothing matched and the fallback type is used.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Outcome of keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordScore {
  pub commit_type: CommitType,
  pub matches: usize,
  pub confidence: f64,
}

/// Count how many of `keywords` occur in `lowered` at a word boundary.
/// Each keyword counts once no matter how often it appears.
pub fn count_matches(lowered: &str, keywords: &[&str]) -> usize {
  keywords
    .iter()
    .filter(|kw| starts_word(lowered, kw))
    .count()
}

/// True if `needle` occurs in `haystack` where the preceding char (if any)
/// is not alphanumeric. `add` matches "added", `ci` does not match "decide".
fn starts_word(haystack: &str, needle: &str) -> bool {
  haystack.match_indices(needle).any(|(idx, _)| {
    haystack[..idx]
      .chars()
      .next_back()
      .map_or(true, |c| !c.is_alphanumeric())
  })
}

/// Confidence for `matches` keyword hits: 0.6 + 0.1 per hit, capped at 0.9.
pub fn keyword_confidence(matches: usize) -> f64 {
  let raw = KEYWORD_BASE_CONFIDENCE + KEYWORD_STEP * matches as f64;
  round2(raw.min(KEYWORD_MAX_CONFIDENCE))
}

fn round2(v: f64) -> f64 {
  (v * 100.0).round() / 100.0
}

/// Score `message` against every type and pick the best one.
///
/// Highest match count wins; ties go to the type declared first in
/// `CommitType::ALL`. With zero matches everywhere, `fallback` is returned
/// with `FALLBACK_CONFIDENCE`.
pub fn score(message: &str, fallback: CommitType) -> KeywordScore {
  let lowered = message.to_lowercase();
  let mut best: Option<(CommitType, usize)> = None;

  for commit_type in CommitType::ALL {
    let matches = count_matches(&lowered, commit_type.keywords());
    if matches == 0 {
      continue;
    }
    // Strictly greater, so the earlier type keeps a tie.
    if best.map_or(true, |(_, n)| matches > n) {
      best = Some((commit_type, matches));
    }
  }

  match best {
    Some((commit_type, matches)) => KeywordScore {
      commit_type,
      matches,
      confidence: keyword_confidence(matches),
    },
    None => KeywordScore {
      commit_type: fallback,
      matches: 0,
      confidence: FALLBACK_CONFIDENCE,
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn word_prefix_matching() {
    assert_eq!(count_matches("added new feature", &["add", "new"]), 2);
    assert_eq!(count_matches("decide later", &["ci"]), 0);
    assert_eq!(count_matches("update ci pipeline", &["ci", "pipeline"]), 2);
    assert_eq!(count_matches("(fix) fix fix", &["fix"]), 1);
    assert_eq!(count_matches("set up github actions", &["github actions"]), 1);
  }

  #[test]
  fn confidence_steps_and_caps() {
    assert_eq!(keyword_confidence(1), 0.7);
    assert_eq!(keyword_confidence(2), 0.8);
    assert_eq!(keyword_confidence(3), 0.9);
    assert_eq!(keyword_confidence(6), 0.9);
  }

  #[test]
  fn picks_highest_count() {
    let s = score("added new feature", CommitType::Chore);
    assert_eq!(s.commit_type, CommitType::Feat);
    assert_eq!(s.matches, 2);
    assert_eq!(s.confidence, 0.8);

    let s = score("fixed the bug in payment module", CommitType::Chore);
    assert_eq!(s.commit_type, CommitType::Fix);
    assert_eq!(s.matches, 2);
  }

  #[test]
  fn ties_go_to_earlier_type() {
    // "optimize" is both a refactor and a perf keyword.
    let s = score("optimize", CommitType::Chore);
    assert_eq!(s.commit_type, CommitType::Refactor);
    // One feat hit vs one docs hit.
    let s = score("new readme", CommitType::Chore);
    assert_eq!(s.commit_type, CommitType::Feat);
  }

  #[test]
  fn no_match_uses_fallback() {
    let s = score("wip", CommitType::Chore);
    assert_eq!(s.commit_type, CommitType::Chore);
    assert_eq!(s.matches, 0);
    assert_eq!(s.confidence, FALLBACK_CONFIDENCE);

    let s = score("wip", CommitType::Fix);
    assert_eq!(s.commit_type, CommitType::Fix);
  }
}
