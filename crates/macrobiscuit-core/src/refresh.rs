//! Acknowledgement returned by the refresh endpoint.
//!
//! The service runs in manual mode: observations are edited directly in the
//! datastore and nothing is fetched or written on refresh.

use serde::{Deserialize, Serialize};

/// How indicator data reaches the datastore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
  Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshAck {
  pub ok:      bool,
  pub mode:    RefreshMode,
  pub message: String,
}

impl RefreshAck {
  /// The fixed manual-mode acknowledgement.
  pub fn manual() -> Self {
    Self {
      ok:      true,
      mode:    RefreshMode::Manual,
      message: "Manual mode: update data directly in the datastore \
                (observations table)."
        .to_owned(),
    }
  }
}
