//! The `IndicatorStore` trait.
//!
//! Implemented by storage backends (e.g. `macrobiscuit-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{indicator::IndicatorSummary, series::SeriesView};

/// Read-only access to the indicator catalog.
///
/// Each call is one unit of work: implementations acquire whatever resources
/// they need (e.g. a connection) for the duration of the call and release
/// them before returning, on success and failure alike.
pub trait IndicatorStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Assemble the [`SeriesView`] for `id`. Returns `None` if the catalog has
  /// no such indicator.
  fn series<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<SeriesView>, Self::Error>> + Send + 'a;

  /// Every catalog entry joined with its optional metadata, ordered by
  /// `display_priority` ascending (nulls last), then by id.
  fn list_indicators(
    &self,
  ) -> impl Future<Output = Result<Vec<IndicatorSummary>, Self::Error>> + Send + '_;
}
