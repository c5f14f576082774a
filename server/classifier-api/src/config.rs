//! Server configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use commit_classifier::ConfigError;

/// Listener and request limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host: IpAddr,
  pub port: u16,
  /// Largest accepted `/classify/batch` request.
  pub max_batch_size: usize,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 8000,
      max_batch_size: 100,
    }
  }
}

impl ServerConfig {
  /// Defaults overridden by `HOST`, `PORT` and `CLASSIFIER_MAX_BATCH`.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();
    if let Some(raw) = lookup("HOST") {
      config.host = raw.trim().parse().map_err(|_| ConfigError::invalid("HOST", &raw))?;
    }
    if let Some(raw) = lookup("PORT") {
      config.port = raw.trim().parse().map_err(|_| ConfigError::invalid("PORT", &raw))?;
    }
    if let Some(raw) = lookup("CLASSIFIER_MAX_BATCH") {
      config.max_batch_size = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid("CLASSIFIER_MAX_BATCH", &raw))?;
    }
    Ok(config)
  }

  pub fn addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}
