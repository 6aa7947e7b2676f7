//! Runtime settings: built-in defaults, then an optional TOML file, then
//! `CINELOG_*` environment variables.

use std::path::{Path, PathBuf};

use cinelog_omdb::{DEFAULT_BASE_URL, DEFAULT_POSTER_URL};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
  /// SQLite file holding the catalog.
  pub db_path:         PathBuf,
  /// Required for adding movies; there is no default key.
  pub omdb_api_key:    Option<String>,
  pub omdb_base_url:   String,
  pub omdb_poster_url: String,
  /// Directory the catalog page is written into.
  pub output_dir:      PathBuf,
  pub output_file:     String,
}

impl Settings {
  /// Resolve settings, reading `path` if it exists.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let mut settings: Settings = Config::builder()
      .set_default("db_path", "movies.db")?
      .set_default("omdb_base_url", DEFAULT_BASE_URL)?
      .set_default("omdb_poster_url", DEFAULT_POSTER_URL)?
      .set_default("output_dir", "_static")?
      .set_default("output_file", "index_template.html")?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("CINELOG"))
      .build()?
      .try_deserialize()?;

    settings.db_path = expand_tilde(&settings.db_path);
    settings.output_dir = expand_tilde(&settings.output_dir);
    settings.omdb_api_key = settings.omdb_api_key.filter(|key| !key.trim().is_empty());
    Ok(settings)
  }
}

/// Resolve a leading `~` component against `$HOME`. Paths without one, or
/// with `HOME` unset, come back unchanged.
fn expand_tilde(path: &Path) -> PathBuf {
  match (path.strip_prefix("~"), std::env::var_os("HOME")) {
    (Ok(under_home), Some(home)) => Path::new(&home).join(under_home),
    _ => path.to_path_buf(),
  }
}
