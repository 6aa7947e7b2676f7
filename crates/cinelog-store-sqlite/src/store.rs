//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use cinelog_core::{CatalogStore, Movie};

use crate::{
  encode::{MOVIE_COLUMNS, RawMovie},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A movie catalog backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The
/// connection closes when the last clone is dropped.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and make sure the `movies` table
  /// exists. Missing parent directories are created.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent)
        .await
        .map_err(|source| Error::CreateDir { path: parent.to_path_buf(), source })?;
    }

    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::debug!(path = %path.display(), "opened movie store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = Error;

  async fn list(&self) -> Result<Vec<Movie>> {
    let raws: Vec<RawMovie> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawMovie::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(raws.into_iter().map(RawMovie::into_movie).collect())
  }

  async fn get(&self, title: &str) -> Result<Option<Movie>> {
    let title = title.to_owned();

    let raw: Option<RawMovie> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE title = ?1"),
              rusqlite::params![title],
              RawMovie::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(raw.map(RawMovie::into_movie))
  }

  async fn upsert(&self, movie: &Movie) -> Result<()> {
    let title      = movie.title.clone();
    let year       = movie.year;
    let rating     = movie.rating;
    let poster_url = movie.poster_url.clone();

    tracing::debug!(title = %title, year, rating, "upserting movie");

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO movies (title, year, rating, poster_url)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![title, year, rating, poster_url],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn update_rating(&self, title: &str, rating: f64) -> Result<()> {
    let title = title.to_owned();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE movies SET rating = ?1 WHERE title = ?2",
          rusqlite::params![rating, title],
        )?)
      })
      .await?;

    tracing::debug!(changed, rating, "updated movie rating");
    Ok(())
  }

  async fn delete(&self, title: &str) -> Result<()> {
    let title = title.to_owned();

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM movies WHERE title = ?1", rusqlite::params![title])?)
      })
      .await?;

    tracing::debug!(removed, "deleted movie");
    Ok(())
  }
}
