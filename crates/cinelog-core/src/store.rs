//! The `CatalogStore` trait.
//!
//! Implemented by storage backends (e.g. `cinelog-store-sqlite`). The
//! operations layer in `cinelog-catalog` depends on this abstraction, not on
//! any concrete backend.

use std::future::Future;

use crate::movie::Movie;

/// Durable persistence for [`Movie`] rows, keyed by exact title.
///
/// Every method is a single atomic statement against one row (or a single
/// read of the table). Mutations on a title that does not exist are silent
/// no-ops; callers that need "not found" feedback check first.
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every movie in insertion order. Empty if the catalog is empty.
  fn list(&self) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + '_;

  /// Exact-match lookup by title.
  fn get<'a>(
    &'a self,
    title: &'a str,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + 'a;

  /// Insert `movie`, or fully replace the existing row with the same title.
  ///
  /// A replaced row is re-inserted and moves to the end of [`list`](Self::list).
  fn upsert<'a>(
    &'a self,
    movie: &'a Movie,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Set the rating of `title`, leaving every other field untouched.
  /// Does nothing if the title is absent.
  fn update_rating<'a>(
    &'a self,
    title: &'a str,
    rating: f64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Remove `title` if present. Does nothing if absent.
  fn delete<'a>(
    &'a self,
    title: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
