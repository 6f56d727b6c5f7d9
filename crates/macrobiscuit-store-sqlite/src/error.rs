//! Error type for `macrobiscuit-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] macrobiscuit_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The connection string does not name an SQLite database.
  #[error("invalid database url {url:?}: {reason}")]
  InvalidUrl { url: String, reason: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
