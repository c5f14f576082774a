//! Binary entrypoint for the classifier HTTP API.

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use classifier_api::{AppState, ServerConfig};
use commit_classifier::{Classifier, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("classifier_api=info,tower_http=info")),
    )
    .init();

  let server = ServerConfig::from_env()?;
  let classifier = Classifier::new(Config::from_env()?);
  info!(config = ?classifier.config(), "classifier ready");
  let state = Arc::new(AppState {
    classifier,
    max_batch_size: server.max_batch_size,
  });

  let app = classifier_api::router(state);

  let addr = server.addr();
  info!("classifier-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
