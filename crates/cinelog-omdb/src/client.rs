//! Async HTTP client for the OMDb title endpoint.

use std::{fmt, time::Duration};

use cinelog_core::{MetadataLookup, MovieLookup};
use reqwest::Client;
use serde::Deserialize;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_POSTER_URL: &str = "http://img.omdbapi.com/";

/// Connection settings for OMDb.
///
/// Without an `api_key` the client is still usable for building poster
/// URLs, but every lookup fails with [`Error::MissingApiKey`].
#[derive(Clone)]
pub struct OmdbConfig {
  pub api_key:         Option<String>,
  pub base_url:        String,
  pub poster_base_url: String,
}

impl OmdbConfig {
  /// Settings pointing at the public OMDb endpoints.
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key:         Some(api_key.into()),
      base_url:        DEFAULT_BASE_URL.to_string(),
      poster_base_url: DEFAULT_POSTER_URL.to_string(),
    }
  }
}

impl fmt::Debug for OmdbConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("OmdbConfig")
      .field("api_key", &self.api_key.as_ref().map(|_| "***"))
      .field("base_url", &self.base_url)
      .field("poster_base_url", &self.poster_base_url)
      .finish()
  }
}

/// Async HTTP client for OMDb.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone, Debug)]
pub struct OmdbClient {
  client: Client,
  config: OmdbConfig,
}

impl OmdbClient {
  pub fn new(config: OmdbConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .map_err(Error::ClientInit)?;
    Ok(Self { client, config })
  }

  /// `GET {base_url}?apikey=<key>&t=<title>`
  pub async fn fetch(&self, title: &str) -> Result<MovieLookup> {
    let api_key = self.config.api_key.as_deref().ok_or(Error::MissingApiKey)?;
    tracing::debug!(title, "querying OMDb");

    let resp = self
      .client
      .get(&self.config.base_url)
      .query(&[("apikey", api_key), ("t", title)])
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      tracing::warn!(%status, title, "OMDb request failed");
      return Err(Error::Status(status.as_u16()));
    }

    let parsed: TitleResponse = resp.json().await.map_err(Error::Decode)?;
    parsed.into_lookup(title)
  }
}

impl MetadataLookup for OmdbClient {
  type Error = Error;

  async fn lookup(&self, title: &str) -> Result<MovieLookup> {
    self.fetch(title).await
  }

  fn poster_url(&self, imdb_id: &str) -> String {
    format!(
      "{}?apikey={}&i={}",
      self.config.poster_base_url,
      self.config.api_key.as_deref().unwrap_or_default(),
      imdb_id
    )
  }
}

// ─── Wire format ─────────────────────────────────────────────────────────────

/// The subset of OMDb's title response we read. Every field is a string on
/// the wire, including numbers.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TitleResponse {
  response:    String,
  error:       Option<String>,
  title:       Option<String>,
  year:        Option<String>,
  #[serde(rename = "imdbRating")]
  imdb_rating: Option<String>,
  #[serde(rename = "imdbID")]
  imdb_id:     Option<String>,
}

impl TitleResponse {
  fn into_lookup(self, requested: &str) -> Result<MovieLookup> {
    if !self.response.eq_ignore_ascii_case("true") {
      let reason = self
        .error
        .unwrap_or_else(|| format!("no match for {requested:?}"));
      return Err(Error::NotFound(reason));
    }

    let title = self
      .title
      .filter(|t| !t.is_empty())
      .ok_or_else(|| Error::Malformed("missing Title".into()))?;
    let year = self
      .year
      .as_deref()
      .and_then(parse_year)
      .ok_or_else(|| Error::Malformed(format!("bad Year: {:?}", self.year)))?;
    let rating = self
      .imdb_rating
      .as_deref()
      .map(parse_rating)
      .transpose()?
      .flatten();
    let imdb_id = self.imdb_id.filter(|id| !id.is_empty());

    Ok(MovieLookup { title, year, rating, imdb_id })
  }
}

/// Leading digits of OMDb's `Year`, which is `"2010"` for films but a range
/// such as `"2008–2013"` for series.
fn parse_year(raw: &str) -> Option<i64> {
  let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
  digits.parse().ok()
}

/// `"N/A"` means unrated; anything else must be a number.
fn parse_rating(raw: &str) -> Result<Option<f64>> {
  if raw == "N/A" {
    return Ok(None);
  }
  raw
    .parse()
    .map(Some)
    .map_err(|_| Error::Malformed(format!("bad imdbRating: {raw:?}")))
}
