//! Range filtering over rating and release year.
//!
//! Bounds come from free-form user input. A bound that is blank is simply
//! not supplied; a bound that does not parse is also dropped, and reported
//! back as an [`IgnoredBound`] rather than failing the whole filter.

use std::fmt;

use cinelog_core::Movie;

/// Optional bounds; a movie passes when it satisfies every supplied bound.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeFilter {
  /// Inclusive lower bound on rating.
  pub min_rating: Option<f64>,
  /// Inclusive lower bound on year.
  pub start_year: Option<i64>,
  /// Inclusive upper bound on year.
  pub end_year:   Option<i64>,
}

/// A bound whose input was present but could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredBound {
  MinRating,
  StartYear,
  EndYear,
}

impl fmt::Display for IgnoredBound {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      IgnoredBound::MinRating => "minimum rating",
      IgnoredBound::StartYear => "start year",
      IgnoredBound::EndYear => "end year",
    })
  }
}

impl RangeFilter {
  /// Build a filter from raw text inputs.
  ///
  /// Returns the filter together with every bound that was dropped because
  /// its input was malformed.
  pub fn parse(
    min_rating: &str,
    start_year: &str,
    end_year: &str,
  ) -> (Self, Vec<IgnoredBound>) {
    let mut ignored = Vec::new();

    // "nan" and "inf" parse as f64 but cannot bound anything.
    let min_rating = match parse_bound::<f64>(min_rating, IgnoredBound::MinRating, &mut ignored) {
      Some(r) if !r.is_finite() => {
        ignored.push(IgnoredBound::MinRating);
        None
      }
      other => other,
    };
    let start_year = parse_bound(start_year, IgnoredBound::StartYear, &mut ignored);
    let end_year = parse_bound(end_year, IgnoredBound::EndYear, &mut ignored);

    (Self { min_rating, start_year, end_year }, ignored)
  }

  /// Whether no bound is supplied.
  pub fn is_empty(&self) -> bool {
    self.min_rating.is_none() && self.start_year.is_none() && self.end_year.is_none()
  }

  pub fn matches(&self, movie: &Movie) -> bool {
    self.min_rating.is_none_or(|min| movie.rating >= min)
      && self.start_year.is_none_or(|start| movie.year >= start)
      && self.end_year.is_none_or(|end| movie.year <= end)
  }

  /// Keep the movies that pass, in their original order.
  pub fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
    if self.is_empty() {
      return movies;
    }
    movies.into_iter().filter(|m| self.matches(m)).collect()
  }
}

fn parse_bound<T: std::str::FromStr>(
  raw: &str,
  which: IgnoredBound,
  ignored: &mut Vec<IgnoredBound>,
) -> Option<T> {
  let raw = raw.trim();
  if raw.is_empty() {
    return None;
  }
  match raw.parse() {
    Ok(value) => Some(value),
    Err(_) => {
      ignored.push(which);
      None
    }
  }
}
