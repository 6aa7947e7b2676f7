//! The `MetadataLookup` trait: an external source of movie metadata.

use std::future::Future;

/// What a metadata source knows about a title, before normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieLookup {
  /// Canonical title as reported by the source; may differ in case or
  /// punctuation from the title that was asked for.
  pub title:   String,
  pub year:    i64,
  /// `None` when the source has no rating for the title.
  pub rating:  Option<f64>,
  /// External identifier used to build a poster URL.
  pub imdb_id: Option<String>,
}

/// A remote movie database queried by title.
pub trait MetadataLookup: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch metadata for `title`. A title the source does not know is an
  /// error, not an empty success.
  fn lookup<'a>(
    &'a self,
    title: &'a str,
  ) -> impl Future<Output = Result<MovieLookup, Self::Error>> + Send + 'a;

  /// Poster image URL for an identifier previously returned by
  /// [`lookup`](Self::lookup).
  fn poster_url(&self, imdb_id: &str) -> String;
}
