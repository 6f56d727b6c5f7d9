//! Startup errors for the server binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("config error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("DATABASE_URL env var not set")]
  MissingDatabaseUrl,

  #[error("store error: {0}")]
  Store(#[from] macrobiscuit_store_sqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
