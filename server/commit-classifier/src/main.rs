//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is `{"message": "..."}`. Each output line is either a
//! ClassificationResult or an ErrorOutput (bad JSON or empty message).
//! Blank input lines are skipped. Logs go to stderr.

use commit_classifier::types::{ErrorOutput, MessageInput};
use commit_classifier::{Classifier, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("commit_classifier=info")),
    )
    .with_writer(io::stderr)
    .init();

  if let Err(e) = run_binary() {
    error!("commit-classifier error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env()?;
  info!(?config, "classifier ready");
  let classifier = Classifier::new(config);

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let input: MessageInput = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        warn!("skipping malformed line: {}", e);
        serde_json::to_writer(&mut out, &ErrorOutput::new(format!("json parse: {}", e)))?;
        writeln!(out)?;
        continue;
      }
    };

    match classifier.classify(&input.message) {
      Ok(result) => serde_json::to_writer(&mut out, &result)?,
      Err(e) => {
        warn!("rejected message: {}", e);
        serde_json::to_writer(&mut out, &ErrorOutput::new(e.to_string()))?;
      }
    }
    writeln!(out)?;
  }

  out.flush()?;
  Ok(())
}
