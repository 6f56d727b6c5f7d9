//! SQLite backend for the MacroBiscuit indicator catalog.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! connection thread without blocking the async runtime. A fresh read-only
//! connection is opened for every store call and closed before it returns.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
