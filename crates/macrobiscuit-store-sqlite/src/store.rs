//! [`SqliteStore`] — the SQLite implementation of [`IndicatorStore`].

use std::path::{Path, PathBuf};

use rusqlite::{OpenFlags, OptionalExtension as _};
use tokio_rusqlite::Connection;

use macrobiscuit_core::{
  indicator::{Indicator, IndicatorMetadata, IndicatorSummary},
  series::SeriesView,
  store::IndicatorStore,
};

use crate::{
  Error, Result,
  encode::{RawObservation, indicator_from_row, metadata_from_row},
  schema::SCHEMA,
};

/// Metadata columns in the order [`metadata_from_row`] expects.
pub(crate) const METADATA_COLUMNS: &str = "category, frequency, unit_display, source, \
   source_url, methodology_url, release_schedule, country, display_priority, \
   decimal_places";

// ─── Store ───────────────────────────────────────────────────────────────────

/// The indicator catalog in a single SQLite file.
///
/// Holds only the database location. Every [`IndicatorStore`] call opens its
/// own read-only connection and closes it before returning, so calls never
/// share connection state. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct SqliteStore {
  path: PathBuf,
}

impl SqliteStore {
  /// A store reading the database at `path`. No I/O happens until the first
  /// call; a missing or unreadable file surfaces as [`Error::Database`] then.
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  /// A store for a connection string of the form `sqlite://<path>`,
  /// `sqlite:<path>` or a bare path.
  pub fn from_url(url: &str) -> Result<Self> {
    let invalid = |reason| Error::InvalidUrl { url: url.to_owned(), reason };

    let trimmed = url.trim();
    let path = trimmed
      .strip_prefix("sqlite://")
      .or_else(|| trimmed.strip_prefix("sqlite:"))
      .unwrap_or(trimmed);

    if path.contains("://") {
      return Err(invalid("only sqlite databases are supported"));
    }
    if path.is_empty() {
      return Err(invalid("no database path given"));
    }
    Ok(Self::new(path))
  }

  /// Create the catalog tables at `path` if they do not exist yet, creating
  /// the file as well.
  pub async fn create(path: impl Into<PathBuf>) -> Result<Self> {
    let store = Self::new(path);
    let conn = Connection::open(&store.path).await?;
    let outcome = conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await;
    let closed = conn.close().await;
    outcome?;
    closed?;
    Ok(store)
  }

  pub fn path(&self) -> &Path { &self.path }

  /// Run `f` against a freshly opened read-only connection.
  ///
  /// The connection is closed on every path out of this function, including
  /// when `f` fails. A failure of `f` takes precedence over a failure to
  /// close.
  async fn with_connection<F, R>(&self, f: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<R>
      + Send
      + 'static,
    R: Send + 'static,
  {
    let conn = Connection::open_with_flags(
      &self.path,
      OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .await?;

    let outcome = conn.call(f).await;
    if let Err(e) = conn.close().await {
      tracing::warn!(path = ?self.path, error = %e, "failed to close connection");
    }
    Ok(outcome?)
  }
}

// ─── IndicatorStore impl ─────────────────────────────────────────────────────

impl IndicatorStore for SqliteStore {
  type Error = Error;

  async fn series(&self, id: &str) -> Result<Option<SeriesView>> {
    let id_str = id.to_owned();

    let fetched: Option<(Indicator, Option<IndicatorMetadata>, Vec<RawObservation>)> =
      self
        .with_connection(move |conn| {
          let indicator = conn
            .query_row(
              "SELECT id, title, description, source, unit
               FROM indicators WHERE id = ?1",
              rusqlite::params![id_str],
              indicator_from_row,
            )
            .optional()?;

          let Some(indicator) = indicator else {
            return Ok(None);
          };

          let metadata = conn
            .query_row(
              &format!(
                "SELECT {METADATA_COLUMNS} FROM indicator_metadata WHERE id = ?1"
              ),
              rusqlite::params![id_str],
              |row| metadata_from_row(row, 0),
            )
            .optional()?;

          let mut stmt = conn.prepare(
            "SELECT date, value FROM observations
             WHERE series_id = ?1
             ORDER BY date ASC",
          )?;
          let observations = stmt
            .query_map(rusqlite::params![id_str], RawObservation::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

          Ok(Some((indicator, metadata, observations)))
        })
        .await?;

    let Some((indicator, metadata, raws)) = fetched else {
      return Ok(None);
    };

    let full = raws
      .into_iter()
      .map(|raw| raw.into_observation(&indicator.id))
      .collect::<Result<Vec<_>>>()?;

    // Rows are sorted by their stored text; once reduced to days they must
    // still be strictly ascending.
    if let Some(pair) = full.windows(2).find(|w| w[0].date >= w[1].date) {
      return Err(
        macrobiscuit_core::Error::DuplicateDate {
          series_id: indicator.id,
          date:      pair[1].date.to_string(),
        }
        .into(),
      );
    }

    Ok(Some(SeriesView::assemble(indicator, metadata, full)))
  }

  async fn list_indicators(&self) -> Result<Vec<IndicatorSummary>> {
    self
      .with_connection(|conn| {
        let mut stmt = conn.prepare(
          "SELECT
             i.id, i.title, i.description,
             m.category, m.frequency, m.unit_display, m.source,
             m.source_url, m.methodology_url, m.release_schedule,
             m.country, m.display_priority, m.decimal_places
           FROM indicators i
           LEFT JOIN indicator_metadata m ON m.id = i.id
           ORDER BY m.display_priority ASC NULLS LAST, i.id ASC",
        )?;

        let rows = stmt
          .query_map([], |row| {
            Ok(IndicatorSummary {
              id:          row.get(0)?,
              title:       row.get(1)?,
              description: row.get(2)?,
              metadata:    metadata_from_row(row, 3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await
  }
}
