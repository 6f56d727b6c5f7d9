//! Liveness probes. Neither touches the store.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Healthz {
  pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct Ping {
  pub status: &'static str,
}

/// `GET /healthz`
pub async fn healthz() -> Json<Healthz> { Json(Healthz { ok: true }) }

/// `GET /ping`
pub async fn ping() -> Json<Ping> { Json(Ping { status: "alive" }) }
