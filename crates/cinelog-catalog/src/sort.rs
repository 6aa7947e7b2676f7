//! Ordered views of a listing. Both sorts are stable: movies that compare
//! equal keep their listing order.

use cinelog_core::Movie;

/// Highest rating first.
pub fn by_rating(mut movies: Vec<Movie>) -> Vec<Movie> {
  movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
  movies
}

/// By release year, newest first when `latest_first` is set.
pub fn by_year(mut movies: Vec<Movie>, latest_first: bool) -> Vec<Movie> {
  if latest_first {
    movies.sort_by(|a, b| b.year.cmp(&a.year));
  } else {
    movies.sort_by_key(|m| m.year);
  }
  movies
}
