//! Configuration and application assembly for the MacroBiscuit server.
//!
//! The binary in `main.rs` is a thin shell around [`ServerConfig::load`] and
//! [`app`].

pub mod error;

pub use error::{Error, Result};

use std::{path::Path, sync::Arc};

use axum::Router;
use macrobiscuit_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Name of the environment variable holding the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Settings as read from the config file and `MACROBISCUIT_*` variables,
/// before validation.
#[derive(Deserialize)]
struct RawConfig {
  host:         String,
  port:         u16,
  database_url: Option<String>,
}

/// Runtime server configuration. Built once at startup and never re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  pub database_url: String,
}

impl ServerConfig {
  /// Load from the TOML file at `path` (optional), `MACROBISCUIT_HOST` /
  /// `MACROBISCUIT_PORT`, and the `DATABASE_URL` environment variable.
  pub fn load(path: &Path) -> Result<Self> {
    Self::load_with(path, std::env::var(DATABASE_URL_VAR).ok())
  }

  /// As [`ServerConfig::load`], with the connection string passed in rather
  /// than read from the environment. `database_url` wins over a
  /// `database_url` key in the file.
  pub fn load_with(path: &Path, database_url: Option<String>) -> Result<Self> {
    let settings = config::Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8000)?
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("MACROBISCUIT").try_parsing(true),
      )
      .set_override_option("database_url", database_url)?
      .build()?;

    let raw: RawConfig = settings.try_deserialize()?;
    let database_url = raw
      .database_url
      .filter(|url| !url.trim().is_empty())
      .ok_or(Error::MissingDatabaseUrl)?;

    Ok(Self { host: raw.host, port: raw.port, database_url })
  }

  /// `host:port` to bind.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The store named by the connection string. Does not touch the database.
  pub fn store(&self) -> Result<SqliteStore> {
    Ok(SqliteStore::from_url(&self.database_url)?)
  }
}

// ─── Application ──────────────────────────────────────────────────────────────

/// The full HTTP application: API routes plus request tracing.
pub fn app(store: SqliteStore) -> Router {
  macrobiscuit_api::api_router(Arc::new(store)).layer(TraceLayer::new_for_http())
}
