//! `cinelog` — interactive manager for a personal movie catalog.
//!
//! # Usage
//!
//! ```text
//! cinelog                          # reads ./cinelog.toml if present
//! cinelog --config ~/.config/cinelog.toml
//! CINELOG_OMDB_API_KEY=... cinelog --db ~/movies.db
//! ```
//!
//! Set `RUST_LOG=cinelog=debug` (or similar) to see diagnostics on stderr.

mod session;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use cinelog_catalog::Catalog;
use cinelog_omdb::{OmdbClient, OmdbConfig};
use cinelog_store_sqlite::SqliteStore;
use clap::Parser;
use session::{ExportTarget, Session};
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cinelog", version, about = "Personal movie catalog")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "cinelog.toml")]
  config: PathBuf,

  /// SQLite database file; overrides `db_path` from the config.
  #[arg(long, value_name = "FILE", env = "CINELOG_DB")]
  db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Diagnostics go to stderr so they never interleave with the menu.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut settings = Settings::load(&cli.config)
    .with_context(|| format!("failed to read configuration from {}", cli.config.display()))?;
  if let Some(db) = cli.db {
    settings.db_path = db;
  }

  if settings.omdb_api_key.is_none() {
    tracing::warn!(
      "no OMDb API key configured; adding movies will fail until `omdb_api_key` \
       or CINELOG_OMDB_API_KEY is set"
    );
  }

  let store = SqliteStore::open(&settings.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.db_path))?;

  let client = OmdbClient::new(OmdbConfig {
    api_key:         settings.omdb_api_key.clone(),
    base_url:        settings.omdb_base_url.clone(),
    poster_base_url: settings.omdb_poster_url.clone(),
  })
  .context("failed to build OMDb client")?;

  tracing::info!(db = %settings.db_path.display(), "catalog ready");

  let export = ExportTarget {
    dir:       settings.output_dir,
    file_name: settings.output_file,
  };
  let input = tokio::io::BufReader::new(tokio::io::stdin());
  let mut session = Session::new(Catalog::new(store, client), export, input, std::io::stdout());
  session.run().await
}
