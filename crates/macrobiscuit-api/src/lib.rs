//! JSON HTTP API for the MacroBiscuit indicator catalog.
//!
//! Exposes an axum [`Router`] backed by any
//! [`macrobiscuit_core::store::IndicatorStore`]. Tracing layers, listeners and
//! configuration are the caller's responsibility.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/healthz` | `{"ok":true}` |
//! | `GET`  | `/ping` | `{"status":"alive"}` |
//! | `GET`  | `/series/{id}` | 404 if the indicator does not exist |
//! | `GET`  | `/indicators` | Whole catalog, priority order |
//! | `GET`, `POST` | `/refresh/{id}` | Manual-mode acknowledgement |

pub mod error;
pub mod health;
pub mod indicators;
pub mod refresh;
pub mod series;

use std::sync::Arc;

use axum::{Router, routing::get};
use macrobiscuit_core::store::IndicatorStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: IndicatorStore + 'static,
{
  Router::new()
    // Probes
    .route("/healthz", get(health::healthz))
    .route("/ping", get(health::ping))
    // Catalog
    .route("/indicators", get(indicators::list::<S>))
    .route("/series/{id}", get(series::get_one::<S>))
    .route("/refresh/{id}", get(refresh::handler).post(refresh::handler))
    .with_state(store)
}
