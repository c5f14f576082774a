//! Shared application state.

use commit_classifier::Classifier;

/// Read-only state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
  pub classifier: Classifier,
  pub max_batch_size: usize,
}
