//! Error type for `cinelog-omdb`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no OMDb API key configured")]
  MissingApiKey,

  #[error("failed to build HTTP client: {0}")]
  ClientInit(#[source] reqwest::Error),

  #[error("request to OMDb failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("OMDb returned HTTP {0}")]
  Status(u16),

  /// OMDb answered `"Response": "False"`; carries its `Error` message.
  #[error("movie not found: {0}")]
  NotFound(String),

  #[error("invalid OMDb JSON: {0}")]
  Decode(#[source] reqwest::Error),

  #[error("malformed OMDb response: {0}")]
  Malformed(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
