//! Error types for `macrobiscuit-core`.

use thiserror::Error;

/// A stored observation that cannot be represented as an [`Observation`].
///
/// [`Observation`]: crate::observation::Observation
#[derive(Debug, Error)]
pub enum Error {
  #[error("observation of {series_id} has an invalid date: {raw:?}")]
  InvalidDate { series_id: String, raw: String },

  #[error("observation of {series_id} on {date} is not numeric: {raw}")]
  NonNumericValue {
    series_id: String,
    date:      String,
    raw:       String,
  },

  /// Two stored rows of one indicator fall on the same calendar day, e.g.
  /// `2024-01-31` and `2024-01-31 12:00:00`.
  #[error("observations of {series_id} repeat the day {date}")]
  DuplicateDate { series_id: String, date: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
