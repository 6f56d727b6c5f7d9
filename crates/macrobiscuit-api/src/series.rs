//! Handler for `GET /series/{id}`.
//!
//! Returns the indicator's catalog fields, its metadata nested under
//! `metadata`, the full ascending history and the derived `latest` / `recent`
//! views. Unknown ids are a 404; there is no partial response.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use macrobiscuit_core::{series::SeriesView, store::IndicatorStore};

use crate::error::ApiError;

/// `GET /series/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<SeriesView>, ApiError>
where
  S: IndicatorStore,
{
  let view = store
    .series(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      tracing::debug!(%id, "series requested for unknown indicator");
      ApiError::indicator_not_found()
    })?;
  Ok(Json(view))
}
