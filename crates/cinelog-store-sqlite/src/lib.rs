//! SQLite backend for the cinelog movie catalog.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! background thread without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
