//! [`Catalog`] — validated verbs over a store and a metadata source.

use std::path::{Path, PathBuf};

use cinelog_core::{CatalogStore, MetadataLookup, Movie, MovieLookup};
use rand_core::{OsRng, RngCore};

use crate::{
  Error, Result,
  filter::RangeFilter,
  page, sort,
  stats::{self, Stats},
};

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// Reject ratings outside `[0, 10]`, including NaN and infinities.
pub fn validate_rating(rating: f64) -> Result<f64> {
  if rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating) {
    Ok(rating)
  } else {
    Err(Error::Validation(format!(
      "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
    )))
  }
}

/// Parse and validate a rating typed by the user.
pub fn parse_rating(raw: &str) -> Result<f64> {
  let rating: f64 = raw
    .trim()
    .parse()
    .map_err(|_| Error::Validation(format!("not a number: {:?}", raw.trim())))?;
  validate_rating(rating)
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// The movie catalog: business rules layered over a [`CatalogStore`].
///
/// Only [`add`](Self::add) talks to the [`MetadataLookup`]. Every other verb
/// is a function of the current listing and its arguments.
pub struct Catalog<S, L> {
  store:  S,
  lookup: L,
}

impl<S, L> Catalog<S, L>
where
  S: CatalogStore,
  L: MetadataLookup,
{
  pub fn new(store: S, lookup: L) -> Self { Self { store, lookup } }

  #[cfg(test)]
  pub(crate) fn store(&self) -> &S { &self.store }

  #[cfg(test)]
  pub(crate) fn lookup(&self) -> &L { &self.lookup }

  /// Every movie, in listing order.
  pub async fn list(&self) -> Result<Vec<Movie>> {
    self.store.list().await.map_err(Error::storage)
  }

  /// Fetch `title` from the metadata source and store the result, replacing
  /// any existing row with the same title.
  ///
  /// The stored title is the one the source reports, which may differ from
  /// `title`. A missing rating becomes `0.0`; a missing identifier leaves
  /// the poster empty. If the lookup fails nothing is written.
  pub async fn add(&self, title: &str) -> Result<Movie> {
    let title = title.trim();
    if title.is_empty() {
      return Err(Error::Validation("title must not be empty".into()));
    }

    let found = self.lookup.lookup(title).await.map_err(|e| {
      tracing::warn!(title, error = %e, "metadata lookup failed");
      Error::Lookup(Box::new(e))
    })?;

    let movie = self.normalize(found);
    self.store.upsert(&movie).await.map_err(Error::storage)?;

    tracing::info!(title = %movie.title, year = movie.year, "added movie");
    Ok(movie)
  }

  fn normalize(&self, found: MovieLookup) -> Movie {
    Movie {
      title:      found.title,
      year:       found.year,
      rating:     found.rating.unwrap_or(0.0),
      poster_url: found
        .imdb_id
        .filter(|id| !id.is_empty())
        .map(|id| self.lookup.poster_url(&id)),
    }
  }

  /// Remove `title`. Unlike the store, an absent title is an error here.
  pub async fn delete(&self, title: &str) -> Result<()> {
    self.require(title).await?;
    self.store.delete(title).await.map_err(Error::storage)?;
    tracing::info!(title, "deleted movie");
    Ok(())
  }

  /// Set the rating of an existing movie.
  ///
  /// The rating is validated before the store is touched; an absent title is
  /// reported as [`Error::NotFound`] and nothing changes.
  pub async fn update_rating(&self, title: &str, rating: f64) -> Result<()> {
    let rating = validate_rating(rating)?;
    self.require(title).await?;
    self
      .store
      .update_rating(title, rating)
      .await
      .map_err(Error::storage)?;
    tracing::info!(title, rating, "updated rating");
    Ok(())
  }

  async fn require(&self, title: &str) -> Result<Movie> {
    self
      .store
      .get(title)
      .await
      .map_err(Error::storage)?
      .ok_or_else(|| Error::NotFound(title.to_owned()))
  }

  /// Average, best and worst; `None` when the catalog is empty.
  pub async fn stats(&self) -> Result<Option<Stats>> {
    Ok(stats::compute(&self.list().await?))
  }

  /// A uniformly random movie, drawn with the OS random source.
  pub async fn random_pick(&self) -> Result<Movie> {
    self.random_pick_with(&mut OsRng).await
  }

  /// [`random_pick`](Self::random_pick) with a caller-supplied generator.
  pub async fn random_pick_with<R: RngCore + Send>(&self, rng: &mut R) -> Result<Movie> {
    let mut movies = self.list().await?;
    if movies.is_empty() {
      return Err(Error::EmptyCatalog);
    }
    let index = uniform_index(rng, movies.len());
    Ok(movies.swap_remove(index))
  }

  /// Movies whose title contains `term`, ignoring case.
  pub async fn search(&self, term: &str) -> Result<Vec<Movie>> {
    let needle = term.to_lowercase();
    let mut movies = self.list().await?;
    movies.retain(|m| m.title.to_lowercase().contains(&needle));
    Ok(movies)
  }

  pub async fn sorted_by_rating(&self) -> Result<Vec<Movie>> {
    Ok(sort::by_rating(self.list().await?))
  }

  pub async fn sorted_by_year(&self, latest_first: bool) -> Result<Vec<Movie>> {
    Ok(sort::by_year(self.list().await?, latest_first))
  }

  pub async fn filter(&self, filter: &RangeFilter) -> Result<Vec<Movie>> {
    Ok(filter.apply(self.list().await?))
  }

  /// Write the catalog page to `dir/file_name`; see [`page::write`].
  pub async fn export_page(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
    let movies = self.list().await?;
    page::write(&movies, dir, file_name).await
  }
}

/// Unbiased index in `0..len` by rejection sampling. `len` must be non-zero.
fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
  let len = len as u64;
  // Draws at or above the largest multiple of `len` are rejected.
  let zone = u64::MAX - (u64::MAX % len);
  loop {
    let draw = rng.next_u64();
    if draw < zone {
      return (draw % len) as usize;
    }
  }
}
