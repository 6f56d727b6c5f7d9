//! Integration tests for `SqliteStore` against a temporary database file.

use chrono::{Days, NaiveDate};
use macrobiscuit_core::{indicator::IndicatorMetadata, store::IndicatorStore};
use rusqlite::params;
use tempfile::TempDir;

use crate::{Error, SqliteStore};

/// A freshly created database in its own temporary directory. The directory
/// is removed when the fixture is dropped.
struct Fixture {
  _dir:  TempDir,
  store: SqliteStore,
}

impl Fixture {
  async fn new() -> Self {
    let dir = TempDir::new().expect("temp dir");
    let store = SqliteStore::create(dir.path().join("catalog.db"))
      .await
      .expect("create store");
    Self { _dir: dir, store }
  }

  /// A plain read-write connection for seeding rows.
  fn seed(&self) -> rusqlite::Connection {
    rusqlite::Connection::open(self.store.path()).expect("seed connection")
  }

  fn add_indicator(&self, id: &str, title: &str) {
    self
      .seed()
      .execute(
        "INSERT INTO indicators (id, title, description, source, unit)
         VALUES (?1, ?2, ?3, 'catalog', 'index')",
        params![id, title, format!("{title} description")],
      )
      .unwrap();
  }

  fn add_metadata(&self, id: &str, priority: Option<i64>) {
    self
      .seed()
      .execute(
        "INSERT INTO indicator_metadata
           (id, category, frequency, unit_display, source, display_priority, decimal_places)
         VALUES (?1, 'prices', 'monthly', '%', 'BLS', ?2, 1)",
        params![id, priority],
      )
      .unwrap();
  }

  /// Insert `count` daily observations starting at 2000-01-01, in reverse
  /// date order so the store has to sort them.
  fn add_observations(&self, id: &str, count: u64) {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let conn = self.seed();
    for i in (0..count).rev() {
      let date = (start + Days::new(i)).format("%Y-%m-%d").to_string();
      conn
        .execute(
          "INSERT INTO observations (series_id, date, value) VALUES (?1, ?2, ?3)",
          params![id, date, i as f64 + 0.25],
        )
        .unwrap();
    }
  }
}

// ─── series ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn series_unknown_id_is_none() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");

  assert!(f.store.series("unknown-id").await.unwrap().is_none());
}

#[tokio::test]
async fn series_with_130_observations() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");
  f.add_observations("cpi", 130);

  let view = f.store.series("cpi").await.unwrap().unwrap();
  assert_eq!(view.full.len(), 130);
  assert_eq!(view.recent.len(), 120);
  assert_eq!(view.recent, view.full[10..130].to_vec());
  assert_eq!(view.latest, Some(view.full[129]));
  assert!(view.full.windows(2).all(|w| w[0].date < w[1].date));
  assert_eq!(view.full[0].date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
  assert_eq!(view.full[0].value, 0.25);
}

#[tokio::test]
async fn series_without_observations_still_succeeds() {
  let f = Fixture::new().await;
  f.add_indicator("gdp", "GDP");

  let view = f.store.series("gdp").await.unwrap().unwrap();
  assert!(view.full.is_empty());
  assert!(view.recent.is_empty());
  assert_eq!(view.latest, None);
}

#[tokio::test]
async fn series_merges_metadata_over_catalog() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");
  f.add_metadata("cpi", Some(1));

  let view = f.store.series("cpi").await.unwrap().unwrap();
  assert_eq!(view.title, "CPI");
  assert_eq!(view.description.as_deref(), Some("CPI description"));
  assert_eq!(view.unit.as_deref(), Some("%"));
  assert_eq!(view.source.as_deref(), Some("BLS"));

  let meta = view.metadata.unwrap();
  assert_eq!(meta.category.as_deref(), Some("prices"));
  assert_eq!(meta.frequency.as_deref(), Some("monthly"));
  assert_eq!(meta.display_priority, Some(1));
  assert_eq!(meta.decimal_places, Some(1));
  assert_eq!(meta.country, None);
}

#[tokio::test]
async fn series_without_metadata_falls_back_to_catalog() {
  let f = Fixture::new().await;
  f.add_indicator("gdp", "GDP");

  let view = f.store.series("gdp").await.unwrap().unwrap();
  assert!(view.metadata.is_none());
  assert_eq!(view.unit.as_deref(), Some("index"));
  assert_eq!(view.source.as_deref(), Some("catalog"));
}

#[tokio::test]
async fn series_reads_integer_and_text_values_as_floats() {
  let f = Fixture::new().await;
  f.add_indicator("unrate", "Unemployment");
  let conn = f.seed();
  conn
    .execute(
      "INSERT INTO observations (series_id, date, value) VALUES
         ('unrate', '2024-01-01', 4),
         ('unrate', '2024-02-01', '3.90')",
      [],
    )
    .unwrap();

  let view = f.store.series("unrate").await.unwrap().unwrap();
  let values: Vec<f64> = view.full.iter().map(|o| o.value).collect();
  assert_eq!(values, vec![4.0, 3.9]);
}

#[tokio::test]
async fn series_rejects_non_numeric_value() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");
  f.seed()
    .execute(
      "INSERT INTO observations (series_id, date, value)
       VALUES ('cpi', '2024-01-01', 'pending')",
      [],
    )
    .unwrap();

  let err = f.store.series("cpi").await.unwrap_err();
  assert!(
    matches!(
      err,
      Error::Core(macrobiscuit_core::Error::NonNumericValue { .. })
    ),
    "unexpected error: {err}"
  );
}

#[tokio::test]
async fn series_rejects_non_finite_values() {
  for text in ["NaN", "inf", "Infinity"] {
    let f = Fixture::new().await;
    f.add_indicator("cpi", "CPI");
    f.seed()
      .execute(
        "INSERT INTO observations (series_id, date, value)
         VALUES ('cpi', '2024-01-01', 1.5), ('cpi', '2024-02-01', ?1)",
        params![text],
      )
      .unwrap();

    let err = f.store.series("cpi").await.unwrap_err();
    assert!(
      matches!(
        err,
        Error::Core(macrobiscuit_core::Error::NonNumericValue { .. })
      ),
      "{text}: unexpected error: {err}"
    );
  }
}

#[tokio::test]
async fn series_rejects_date_with_trailing_junk() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");
  f.seed()
    .execute(
      "INSERT INTO observations (series_id, date, value)
       VALUES ('cpi', '2024-01-01', 1), ('cpi', '2024-01-02xyz', 2)",
      [],
    )
    .unwrap();

  let err = f.store.series("cpi").await.unwrap_err();
  assert!(
    matches!(err, Error::Core(macrobiscuit_core::Error::InvalidDate { .. })),
    "unexpected error: {err}"
  );
}

#[tokio::test]
async fn series_rejects_two_rows_on_one_day() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");
  f.seed()
    .execute(
      "INSERT INTO observations (series_id, date, value)
       VALUES ('cpi', '2024-01-01', 1), ('cpi', '2024-01-01 23:00:00', 2)",
      [],
    )
    .unwrap();

  let err = f.store.series("cpi").await.unwrap_err();
  assert!(
    matches!(err, Error::Core(macrobiscuit_core::Error::DuplicateDate { .. })),
    "unexpected error: {err}"
  );
}

#[tokio::test]
async fn series_accepts_timestamped_dates() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");
  f.seed()
    .execute(
      "INSERT INTO observations (series_id, date, value)
       VALUES ('cpi', '2024-01-01 00:00:00', 1), ('cpi', '2024-02-01T00:00:00', 2)",
      [],
    )
    .unwrap();

  let view = f.store.series("cpi").await.unwrap().unwrap();
  let dates: Vec<String> = view.full.iter().map(|o| o.date.to_string()).collect();
  assert_eq!(dates, ["2024-01-01", "2024-02-01"]);
}

#[tokio::test]
async fn series_is_repeatable() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");
  f.add_metadata("cpi", None);
  f.add_observations("cpi", 12);

  let first = f.store.series("cpi").await.unwrap();
  let second = f.store.series("cpi").await.unwrap();
  assert_eq!(first, second);
}

// ─── list_indicators ─────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_catalog() {
  let f = Fixture::new().await;
  assert!(f.store.list_indicators().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_orders_by_priority_nulls_last_then_id() {
  let f = Fixture::new().await;
  for id in ["a", "b", "c", "d", "e", "f"] {
    f.add_indicator(id, &id.to_uppercase());
  }
  f.add_metadata("e", Some(1));
  f.add_metadata("c", Some(2));
  f.add_metadata("b", Some(2));
  f.add_metadata("a", None);
  // "d" and "f" have no metadata row at all.

  let ids: Vec<String> = f
    .store
    .list_indicators()
    .await
    .unwrap()
    .into_iter()
    .map(|s| s.id)
    .collect();
  assert_eq!(ids, ["e", "b", "c", "a", "d", "f"]);
}

#[tokio::test]
async fn list_left_join_miss_has_empty_metadata() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");
  f.add_indicator("gdp", "GDP");
  f.add_metadata("cpi", Some(1));

  let list = f.store.list_indicators().await.unwrap();
  assert_eq!(list.len(), 2);
  assert_eq!(list[0].metadata.unit_display.as_deref(), Some("%"));
  assert_eq!(list[1].id, "gdp");
  assert_eq!(list[1].title, "GDP");
  assert_eq!(list[1].metadata, IndicatorMetadata::default());
}

// ─── Connection handling ─────────────────────────────────────────────────────

#[tokio::test]
async fn missing_database_is_a_database_error() {
  let dir = TempDir::new().unwrap();
  let store = SqliteStore::new(dir.path().join("absent.db"));

  let err = store.list_indicators().await.unwrap_err();
  assert!(matches!(err, Error::Database(_)), "unexpected error: {err}");
  // Read-only connections never create the file.
  assert!(!dir.path().join("absent.db").exists());
}

#[tokio::test]
async fn create_is_idempotent() {
  let f = Fixture::new().await;
  f.add_indicator("cpi", "CPI");

  SqliteStore::create(f.store.path()).await.unwrap();
  assert_eq!(f.store.list_indicators().await.unwrap().len(), 1);
}

#[test]
fn url_forms() {
  for url in ["sqlite:///tmp/a.db", "sqlite:/tmp/a.db", "/tmp/a.db", " /tmp/a.db "] {
    let store = SqliteStore::from_url(url).unwrap();
    assert_eq!(store.path(), std::path::Path::new("/tmp/a.db"), "{url}");
  }
  assert_eq!(
    SqliteStore::from_url("sqlite://data/catalog.db").unwrap().path(),
    std::path::Path::new("data/catalog.db"),
  );

  for url in ["", "sqlite://", "postgres://user@host/db"] {
    assert!(
      matches!(SqliteStore::from_url(url), Err(Error::InvalidUrl { .. })),
      "{url:?}"
    );
  }
}
