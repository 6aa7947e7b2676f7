//! Conversion between `movies` rows and [`Movie`].
//!
//! Posters are normalised on the way out: both NULL and the empty string
//! become `None`. Writes store whatever the caller passed.

use cinelog_core::Movie;

/// Column list shared by every `SELECT` so [`RawMovie::from_row`] indices
/// stay in sync.
pub const MOVIE_COLUMNS: &str = "title, year, rating, poster_url";

/// Values read directly from a `movies` row.
pub struct RawMovie {
  pub title:      String,
  pub year:       i64,
  pub rating:     f64,
  pub poster_url: Option<String>,
}

impl RawMovie {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      title:      row.get(0)?,
      year:       row.get(1)?,
      rating:     row.get(2)?,
      poster_url: row.get(3)?,
    })
  }

  pub fn into_movie(self) -> Movie {
    Movie {
      title:      self.title,
      year:       self.year,
      rating:     self.rating,
      poster_url: self.poster_url.filter(|url| !url.is_empty()),
    }
  }
}
