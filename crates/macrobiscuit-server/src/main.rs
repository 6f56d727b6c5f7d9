//! MacroBiscuit API server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus the
//! environment, then serves the indicator API over HTTP. The database is
//! located by the `DATABASE_URL` environment variable.
//!
//! # Bootstrapping an empty database
//!
//! ```sh
//! DATABASE_URL=sqlite://catalog.db cargo run -p macrobiscuit-server --bin server -- --init-schema
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use macrobiscuit_server::{ServerConfig, app};
use macrobiscuit_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "MacroBiscuit indicator API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Create the catalog tables in the configured database and exit.
  #[arg(long)]
  init_schema: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store = server_cfg.store().context("invalid DATABASE_URL")?;

  // Helper mode: create the tables and exit.
  if cli.init_schema {
    SqliteStore::create(store.path())
      .await
      .with_context(|| format!("failed to initialise schema at {:?}", store.path()))?;
    tracing::info!(path = ?store.path(), "schema initialised");
    return Ok(());
  }

  tracing::info!(
    version = env!("CARGO_PKG_VERSION"),
    database = ?store.path(),
    "starting MacroBiscuit API (manual mode)"
  );

  let router = app(store);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, router).await.context("server error")?;

  Ok(())
}
