//! Handler for `GET|POST /refresh/{id}`.
//!
//! Manual mode: data is maintained directly in the datastore, so refresh
//! neither checks the id nor writes anything.

use axum::{Json, extract::Path};
use macrobiscuit_core::refresh::RefreshAck;

/// `GET /refresh/{id}` and `POST /refresh/{id}`
pub async fn handler(Path(id): Path<String>) -> Json<RefreshAck> {
  tracing::info!(%id, "refresh requested; manual mode, nothing to do");
  Json(RefreshAck::manual())
}
