//! Commit Message Classifier HTTP API
//!
//! Stateless axum service over the commit-classifier core.
//! Bind to 127.0.0.1 by default (override with HOST/PORT).

mod config;
mod date;
mod error;
mod handlers;
mod state;
pub mod types;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;
pub use handlers::{classify, classify_batch, get_types, health, root, stats};
pub use state::AppState;

/// Full route table with CORS and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(root))
    .route("/health", get(health))
    .route("/classify", post(classify))
    .route("/classify/batch", post(classify_batch))
    .route("/types", get(get_types))
    .route("/stats", get(stats))
    .layer(CorsLayer::permissive())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
