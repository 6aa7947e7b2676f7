//! Summary statistics over a listing.

use cinelog_core::Movie;

/// Average rating plus the best and worst entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
  pub average: f64,
  pub best:    Movie,
  pub worst:   Movie,
}

/// Compute [`Stats`] for `movies`, or `None` if there are none.
///
/// When several movies share the highest (or lowest) rating, the one that
/// comes first in `movies` wins. With a store listing that is insertion
/// order.
pub fn compute(movies: &[Movie]) -> Option<Stats> {
  let (first, rest) = movies.split_first()?;

  let mut best = first;
  let mut worst = first;
  let mut total = first.rating;
  for movie in rest {
    total += movie.rating;
    // Strict comparisons keep the earliest entry on ties.
    if movie.rating > best.rating {
      best = movie;
    }
    if movie.rating < worst.rating {
      worst = movie;
    }
  }

  Some(Stats {
    average: total / movies.len() as f64,
    best:    best.clone(),
    worst:   worst.clone(),
  })
}
