//! Static HTML page for the catalog.
//!
//! The page is a fixed template with one `<li>` per movie, in the order the
//! movies are given. No stylesheet is generated; the page links to a
//! `style.css` expected next to it.

use std::path::{Path, PathBuf};

use cinelog_core::Movie;

use crate::{Error, Result};

/// Heading and `<title>` of the generated page.
pub const PAGE_TITLE: &str = "My Movie App";

const TEMPLATE: &str = r#"<html>
<head>
    <title>__TEMPLATE_TITLE__</title>
    <link rel="stylesheet" href="style.css"/>
</head>
<body>
<div class="list-movies-title">
    <h1>__TEMPLATE_TITLE__</h1>
</div>
<div>
    <ol class="movie-grid">
__TEMPLATE_MOVIE_GRID__
    </ol>
</div>
</body>
</html>
"#;

/// Render the full page for `movies`.
pub fn render(movies: &[Movie]) -> String {
  let grid: String = movies.iter().map(render_item).collect();
  TEMPLATE
    .replace("__TEMPLATE_TITLE__", PAGE_TITLE)
    .replace("__TEMPLATE_MOVIE_GRID__", &grid)
}

fn render_item(movie: &Movie) -> String {
  let title = escape_html(&movie.title);
  let poster = escape_html(movie.poster_url.as_deref().unwrap_or_default());
  format!(
    r#"        <li>
            <div class="movie">
                <img class="movie-poster" src="{poster}" alt="{title} poster"/>
                <div class="movie-title">{title}</div>
                <div class="movie-year">{year}</div>
                <div class="movie-rating">Rating: {rating}</div>
            </div>
        </li>
"#,
    year = movie.year,
    rating = movie.rating_display(),
  )
}

/// Render `movies` and write the page to `dir/file_name`, creating `dir` if
/// needed. Any existing file is overwritten. Returns the written path.
pub async fn write(movies: &[Movie], dir: &Path, file_name: &str) -> Result<PathBuf> {
  tokio::fs::create_dir_all(dir)
    .await
    .map_err(|source| Error::Export { path: dir.to_path_buf(), source })?;

  let path = dir.join(file_name);
  tokio::fs::write(&path, render(movies))
    .await
    .map_err(|source| Error::Export { path: path.clone(), source })?;

  tracing::info!(path = %path.display(), count = movies.len(), "wrote catalog page");
  Ok(path)
}

/// Escape text for use in element content and double-quoted attributes.
fn escape_html(s: &str) -> String {
  s
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}
