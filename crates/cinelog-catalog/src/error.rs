//! Error type for catalog operations.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Bad user input, such as an out-of-range rating. Nothing was changed.
  #[error("invalid input: {0}")]
  Validation(String),

  /// The title must exist for this operation and does not.
  #[error("movie not in database: {0:?}")]
  NotFound(String),

  /// The metadata source could not produce a record. Nothing was written.
  #[error("lookup failed: {0}")]
  Lookup(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("storage unavailable: {0}")]
  StorageUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("no movies in database")]
  EmptyCatalog,

  #[error("cannot write {path:?}: {source}")]
  Export {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl Error {
  pub(crate) fn storage<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Error::StorageUnavailable(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
