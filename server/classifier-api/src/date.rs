//! Timestamp helpers.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as RFC 3339 with millisecond precision.
pub fn now_rfc3339() -> String {
  Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::DateTime;

  #[test]
  fn now_is_parseable_utc() {
    let s = now_rfc3339();
    assert!(s.ends_with('Z'), "{}", s);
    assert!(DateTime::parse_from_rfc3339(&s).is_ok());
  }
}
