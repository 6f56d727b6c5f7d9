//! The composite series view returned for a single indicator.
//!
//! Assembled from three reads (catalog row, optional metadata row, ascending
//! observation history). `latest` and `recent` are derived from the history
//! here so every store backend produces identical shapes.

use serde::{Serialize, Serializer, ser::SerializeMap as _};

use crate::{
  indicator::{Indicator, IndicatorMetadata},
  observation::Observation,
};

/// Maximum number of trailing observations in [`SeriesView::recent`].
pub const RECENT_WINDOW: usize = 120;

/// The trailing `RECENT_WINDOW` observations of `full`, or all of them if
/// there are fewer.
pub fn recent_window(full: &[Observation]) -> &[Observation] {
  &full[full.len().saturating_sub(RECENT_WINDOW)..]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesView {
  pub id:          String,
  pub title:       String,
  pub description: Option<String>,
  pub unit:        Option<String>,
  pub source:      Option<String>,
  /// Last element of `full`; `None` iff `full` is empty.
  pub latest:      Option<Observation>,
  /// Always a suffix of `full`.
  pub recent:      Vec<Observation>,
  /// Entire history, ascending by date.
  pub full:        Vec<Observation>,
  /// Serialised as `{}` when the indicator has no metadata row.
  #[serde(serialize_with = "metadata_or_empty")]
  pub metadata:    Option<IndicatorMetadata>,
}

impl SeriesView {
  /// Build the view. `full` must already be sorted by date ascending.
  ///
  /// `unit` and `source` prefer the metadata row's values and fall back to
  /// the catalog row's.
  pub fn assemble(
    indicator: Indicator,
    metadata:  Option<IndicatorMetadata>,
    full:      Vec<Observation>,
  ) -> Self {
    let meta = metadata.as_ref();
    let unit = meta
      .and_then(|m| m.unit_display.clone())
      .or(indicator.unit);
    let source = meta.and_then(|m| m.source.clone()).or(indicator.source);

    let latest = full.last().copied();
    let recent = recent_window(&full).to_vec();

    Self {
      id: indicator.id,
      title: indicator.title,
      description: indicator.description,
      unit,
      source,
      latest,
      recent,
      full,
      metadata,
    }
  }
}

fn metadata_or_empty<S>(
  metadata: &Option<IndicatorMetadata>,
  serializer: S,
) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  match metadata {
    Some(m) => m.serialize(serializer),
    None => serializer.serialize_map(Some(0))?.end(),
  }
}
