//! Decoding helpers between SQLite rows and the domain types.
//!
//! Dates are stored as `YYYY-MM-DD` text. Observation values live in a
//! NUMERIC column, so SQLite may hand them back as INTEGER, REAL or TEXT
//! depending on what was written; all three are read as `f64`.

use chrono::{NaiveDate, NaiveDateTime};
use macrobiscuit_core::{
  indicator::{Indicator, IndicatorMetadata},
  observation::Observation,
};
use rusqlite::{Row, types::Value};

use crate::Result;

// ─── Dates ───────────────────────────────────────────────────────────────────

/// Timestamp layouts accepted besides a bare `YYYY-MM-DD`. `%.f` also
/// matches no fractional part.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

pub fn decode_date(series_id: &str, s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .ok()
    .or_else(|| {
      TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
    })
    .ok_or_else(|| {
      macrobiscuit_core::Error::InvalidDate {
        series_id: series_id.to_owned(),
        raw:       s.to_owned(),
      }
      .into()
    })
}

// ─── Values ──────────────────────────────────────────────────────────────────

/// Read a stored numeric as `f64`. `None` for NULL, BLOB, non-numeric text
/// and non-finite values (`NaN`, `inf`), which JSON cannot carry.
pub fn decode_value(v: &Value) -> Option<f64> {
  let value = match v {
    // Exact up to 2^53; economic series never get near that.
    Value::Integer(i) => *i as f64,
    Value::Real(r) => *r,
    Value::Text(t) => t.trim().parse().ok()?,
    Value::Null | Value::Blob(_) => return None,
  };
  value.is_finite().then_some(value)
}

// ─── Raw row types ───────────────────────────────────────────────────────────

/// An observation row as read from SQLite, before validation.
pub struct RawObservation {
  pub date:  String,
  pub value: Value,
}

impl RawObservation {
  pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { date: row.get(0)?, value: row.get(1)? })
  }

  pub fn into_observation(self, series_id: &str) -> Result<Observation> {
    let date = decode_date(series_id, &self.date)?;
    let value = decode_value(&self.value).ok_or_else(|| {
      macrobiscuit_core::Error::NonNumericValue {
        series_id: series_id.to_owned(),
        date:      self.date.clone(),
        raw:       format!("{:?}", self.value),
      }
    })?;
    Ok(Observation::new(date, value))
  }
}

/// Map `SELECT id, title, description, source, unit`.
pub fn indicator_from_row(row: &Row<'_>) -> rusqlite::Result<Indicator> {
  Ok(Indicator {
    id:          row.get(0)?,
    title:       row.get(1)?,
    description: row.get(2)?,
    source:      row.get(3)?,
    unit:        row.get(4)?,
  })
}

/// Map the ten metadata columns starting at column `at`, in the order of
/// [`METADATA_COLUMNS`](crate::store::METADATA_COLUMNS).
pub fn metadata_from_row(
  row: &Row<'_>,
  at: usize,
) -> rusqlite::Result<IndicatorMetadata> {
  Ok(IndicatorMetadata {
    category:         row.get(at)?,
    frequency:        row.get(at + 1)?,
    unit_display:     row.get(at + 2)?,
    source:           row.get(at + 3)?,
    source_url:       row.get(at + 4)?,
    methodology_url:  row.get(at + 5)?,
    release_schedule: row.get(at + 6)?,
    country:          row.get(at + 7)?,
    display_priority: row.get(at + 8)?,
    decimal_places:   row.get(at + 9)?,
  })
}
