//! Indicator catalog rows and their display metadata.
//!
//! An indicator is identified by a free-form string id (`cpi`, `unrate`, ...).
//! Its catalog row and its metadata row live in separate tables and are
//! joined on read.

use serde::{Deserialize, Serialize};

/// A row of the indicator catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
  pub id:          String,
  pub title:       String,
  pub description: Option<String>,
  pub source:      Option<String>,
  pub unit:        Option<String>,
}

/// Display and categorisation attributes, one-to-one with [`Indicator`].
///
/// Every field is nullable; a metadata row may exist with nothing filled in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMetadata {
  pub category:         Option<String>,
  pub frequency:        Option<String>,
  pub unit_display:     Option<String>,
  pub source:           Option<String>,
  pub source_url:       Option<String>,
  pub methodology_url:  Option<String>,
  pub release_schedule: Option<String>,
  pub country:          Option<String>,
  /// Sort key for catalog listings. `None` sorts after every value.
  pub display_priority: Option<i64>,
  pub decimal_places:   Option<i64>,
}

/// One entry of the catalog listing.
///
/// Indicators without a metadata row still appear; their `metadata` fields
/// are all `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
  pub id:          String,
  pub title:       String,
  pub description: Option<String>,
  pub metadata:    IndicatorMetadata,
}
