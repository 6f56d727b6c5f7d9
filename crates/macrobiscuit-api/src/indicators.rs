//! Handler for `GET /indicators`.

use std::sync::Arc;

use axum::{Json, extract::State};
use macrobiscuit_core::{indicator::IndicatorSummary, store::IndicatorStore};

use crate::error::ApiError;

/// `GET /indicators` — the whole catalog, ordered by display priority (nulls
/// last) then id. Not paginated.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<IndicatorSummary>>, ApiError>
where
  S: IndicatorStore,
{
  let indicators = store
    .list_indicators()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(indicators))
}
