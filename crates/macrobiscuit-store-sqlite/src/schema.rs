//! SQL schema for the indicator catalog.
//!
//! The service itself only reads these tables; the DDL exists so an empty
//! database can be bootstrapped (`server --init-schema`) and for tests.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS indicators (
    id          TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT,
    source      TEXT,
    unit        TEXT
);

CREATE TABLE IF NOT EXISTS indicator_metadata (
    id               TEXT PRIMARY KEY REFERENCES indicators(id),
    category         TEXT,
    frequency        TEXT,
    unit_display     TEXT,
    source           TEXT,
    source_url       TEXT,
    methodology_url  TEXT,
    release_schedule TEXT,
    country          TEXT,
    display_priority INTEGER,   -- NULL sorts last in listings
    decimal_places   INTEGER
);

-- At most one observation per indicator and day.
CREATE TABLE IF NOT EXISTS observations (
    series_id TEXT    NOT NULL REFERENCES indicators(id),
    date      TEXT    NOT NULL,   -- YYYY-MM-DD
    value     NUMERIC NOT NULL,
    PRIMARY KEY (series_id, date)
);
";
