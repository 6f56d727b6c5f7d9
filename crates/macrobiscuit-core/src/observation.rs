//! Observations: single dated values of an indicator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single `(date, value)` point. Dates have day granularity and serialise
/// as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
  pub date:  NaiveDate,
  pub value: f64,
}

impl Observation {
  pub fn new(date: NaiveDate, value: f64) -> Self { Self { date, value } }
}
