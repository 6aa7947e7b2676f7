//! Movie — the single entity of the catalog.
//!
//! A movie is keyed by its exact, case-sensitive title. Everything else about
//! it (year, rating, poster) is payload that is replaced wholesale on re-add.

/// Placeholder shown wherever a movie has no poster URL.
pub const NO_POSTER: &str = "No poster available.";

/// A movie row as held by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
  pub title:      String,
  pub year:       i64,
  /// Expected to lie in `[0, 10]`; only the rating update path enforces it.
  pub rating:     f64,
  /// `None` when the row has no poster, including a stored empty string.
  pub poster_url: Option<String>,
}

impl Movie {
  pub fn new(title: impl Into<String>, year: i64, rating: f64) -> Self {
    Self {
      title: title.into(),
      year,
      rating,
      poster_url: None,
    }
  }

  pub fn with_poster(mut self, url: impl Into<String>) -> Self {
    self.poster_url = Some(url.into());
    self
  }

  /// The poster URL, or [`NO_POSTER`] if there is none.
  pub fn poster_display(&self) -> &str {
    self.poster_url.as_deref().unwrap_or(NO_POSTER)
  }

  /// The rating with at least one decimal place (`9.0`, `8.75`).
  pub fn rating_display(&self) -> String {
    if self.rating.fract() == 0.0 {
      format!("{:.1}", self.rating)
    } else {
      self.rating.to_string()
    }
  }
}
