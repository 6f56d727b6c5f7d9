//! Core types and trait definitions for the MacroBiscuit indicator service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod indicator;
pub mod observation;
pub mod refresh;
pub mod series;
pub mod store;

pub use error::{Error, Result};
