//! Scripted sessions: menu input in, printed transcript out.

use cinelog_catalog::Catalog;
use cinelog_core::{CatalogStore, MetadataLookup, Movie, MovieLookup};
use cinelog_omdb::{OmdbClient, OmdbConfig};
use cinelog_store_sqlite::SqliteStore;

use super::{Command, ExportTarget, Session};

/// Knows exactly one movie.
struct OneMovie(MovieLookup);

impl MetadataLookup for OneMovie {
  type Error = std::io::Error;

  async fn lookup(&self, title: &str) -> Result<MovieLookup, std::io::Error> {
    if self.0.title.eq_ignore_ascii_case(title) {
      Ok(self.0.clone())
    } else {
      Err(std::io::Error::other(format!("Movie not found: {title}")))
    }
  }

  fn poster_url(&self, imdb_id: &str) -> String {
    format!("http://img.example/?i={imdb_id}")
  }
}

fn inception() -> OneMovie {
  OneMovie(MovieLookup {
    title:   "Inception".into(),
    year:    2010,
    rating:  Some(8.8),
    imdb_id: Some("tt1375666".into()),
  })
}

/// Run `script` against a store seeded with `movies`; returns the
/// transcript and the store for inspection.
async fn run_script(
  movies: &[Movie],
  script: &str,
  export: ExportTarget,
) -> (String, SqliteStore) {
  let store = SqliteStore::open_in_memory().await.unwrap();
  for movie in movies {
    store.upsert(movie).await.unwrap();
  }

  let out = transcript(Catalog::new(store.clone(), inception()), script, export).await;
  (out, store)
}

async fn transcript<S, L>(catalog: Catalog<S, L>, script: &str, export: ExportTarget) -> String
where
  S: CatalogStore,
  L: MetadataLookup,
{
  let mut out = Vec::new();
  Session::new(catalog, export, script.as_bytes(), &mut out)
    .run()
    .await
    .unwrap();
  String::from_utf8(out).unwrap()
}

/// Every call fails, as if the database file had vanished.
struct BrokenStore;

fn disk_gone() -> std::io::Error { std::io::Error::other("disk gone") }

impl CatalogStore for BrokenStore {
  type Error = std::io::Error;

  async fn list(&self) -> Result<Vec<Movie>, std::io::Error> { Err(disk_gone()) }

  async fn get(&self, _title: &str) -> Result<Option<Movie>, std::io::Error> {
    Err(disk_gone())
  }

  async fn upsert(&self, _movie: &Movie) -> Result<(), std::io::Error> { Err(disk_gone()) }

  async fn update_rating(&self, _title: &str, _rating: f64) -> Result<(), std::io::Error> {
    Err(disk_gone())
  }

  async fn delete(&self, _title: &str) -> Result<(), std::io::Error> { Err(disk_gone()) }
}

fn no_export() -> ExportTarget {
  ExportTarget {
    dir:       std::env::temp_dir().join("cinelog-unused"),
    file_name: "index.html".into(),
  }
}

#[test]
fn menu_numbers_map_to_commands() {
  assert_eq!(Command::from_choice("0"), Some(Command::Exit));
  assert_eq!(Command::from_choice(" 7 "), Some(Command::Search));
  assert_eq!(Command::from_choice("11"), Some(Command::Export));
  assert_eq!(Command::from_choice("12"), None);
  assert_eq!(Command::from_choice("list"), None);
  assert_eq!(Command::from_choice("-1"), None);
}

#[tokio::test]
async fn invalid_choice_is_reported_and_reprompted() {
  let (out, _) = run_script(&[], "abc\n12\n0\n", no_export()).await;

  assert_eq!(out.matches("Invalid choice. Please choose from 0-11.").count(), 2);
  assert_eq!(out.matches("Enter your option (0-11): ").count(), 3);
  assert!(out.trim_end().ends_with("Bye!"));
}

#[tokio::test]
async fn end_of_input_exits() {
  let (out, _) = run_script(&[], "", no_export()).await;
  assert!(out.trim_end().ends_with("Bye!"));
}

#[tokio::test]
async fn add_then_list() {
  let (out, store) = run_script(&[], "2\nInception\n1\n0\n", no_export()).await;

  assert!(out.contains("Movie 'Inception' (2010) added with rating 8.8."));
  assert!(out.contains("1 movies in total"));
  assert!(out.contains(
    "Inception (Rating: 8.8, Year: 2010, Poster: http://img.example/?i=tt1375666)"
  ));
  assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_unknown_title_reports_lookup_error() {
  let (out, store) = run_script(&[], "2\nNope\n0\n", no_export()).await;

  assert!(out.contains("Error: lookup failed: Movie not found: Nope"));
  assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_absent_title_is_reported() {
  let seed = [Movie::new("Alien", 1979, 8.5)];
  let (out, store) = run_script(&seed, "3\nJaws\n0\n", no_export()).await;

  assert!(out.contains("Movie isn't in database."));
  assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_with_bad_rating_changes_nothing() {
  let seed = [Movie::new("Alien", 1979, 8.5)];
  let (out, store) = run_script(&seed, "4\nAlien\n11\n4\nAlien\nten\n0\n", no_export()).await;

  assert_eq!(out.matches("Error: invalid input").count(), 2);
  assert_eq!(store.get("Alien").await.unwrap().unwrap().rating, 8.5);
}

#[tokio::test]
async fn update_rating_succeeds() {
  let seed = [Movie::new("Alien", 1979, 8.5)];
  let (out, store) = run_script(&seed, "4\nAlien\n9.5\n0\n", no_export()).await;

  assert!(out.contains("Movie 'Alien' updated with new rating of 9.5."));
  assert_eq!(store.get("Alien").await.unwrap().unwrap().rating, 9.5);
}

#[tokio::test]
async fn empty_catalog_stats_and_random() {
  let (out, _) = run_script(&[], "5\n6\n8\n0\n", no_export()).await;

  assert!(out.contains("No movies in your database."));
  assert_eq!(out.matches("No movies in database.").count(), 2);
}

#[tokio::test]
async fn stats_report() {
  let seed = [
    Movie::new("Alien", 1979, 8.5),
    Movie::new("Catwoman", 2004, 3.4),
    Movie::new("Inception", 2010, 8.8),
  ];
  let (out, _) = run_script(&seed, "5\n0\n", no_export()).await;

  assert!(out.contains("Average rating: 6.90"));
  assert!(out.contains("Best movie: Inception (8.8)"));
  assert!(out.contains("Worst movie: Catwoman (3.4)"));
}

#[tokio::test]
async fn sort_by_year_latest_first() {
  let seed = [
    Movie::new("Alien", 1979, 8.5),
    Movie::new("Inception", 2010, 8.8),
  ];
  let (out, _) = run_script(&seed, "9\ny\n0\n", no_export()).await;

  let inception = out.find("Inception (Year: 2010").unwrap();
  let alien = out.find("Alien (Year: 1979").unwrap();
  assert!(inception < alien);
}

#[tokio::test]
async fn filter_reports_ignored_bounds() {
  let seed = [
    Movie::new("Alien", 1979, 8.5),
    Movie::new("Inception", 2010, 8.8),
  ];
  let (out, _) = run_script(&seed, "10\nabc\n2000\n\n0\n", no_export()).await;

  assert!(out.contains("Invalid minimum rating. Ignoring this filter."));
  assert!(out.contains("1 movies matched the filter:"));
  assert!(out.contains("Inception (Rating: 8.8, Year: 2010, Poster: No poster available.)"));
}

#[tokio::test]
async fn search_without_hits() {
  let seed = [Movie::new("Alien", 1979, 8.5)];
  let (out, _) = run_script(&seed, "7\nzebra\n7\nALI\n0\n", no_export()).await;

  assert!(out.contains("No movie found."));
  assert!(out.contains("Alien (Rating: 8.5, Year: 1979"));
}

#[tokio::test]
async fn export_writes_page() {
  let dir = tempfile::tempdir().unwrap();
  let target = ExportTarget {
    dir:       dir.path().join("_static"),
    file_name: "index_template.html".into(),
  };
  let seed = [Movie::new("Alien", 1979, 8.5)];

  let (out, _) = run_script(&seed, "11\n0\n", target.clone()).await;

  let path = target.dir.join(&target.file_name);
  assert!(out.contains("Website was generated successfully at"));
  let html = std::fs::read_to_string(path).unwrap();
  assert!(html.contains(r#"<div class="movie-title">Alien</div>"#));
}

#[tokio::test]
async fn catalog_is_usable_without_api_key() {
  let store = SqliteStore::open_in_memory().await.unwrap();
  store.upsert(&Movie::new("Alien", 1979, 8.5)).await.unwrap();
  let client = OmdbClient::new(OmdbConfig {
    api_key:         None,
    base_url:        "http://127.0.0.1:9/".into(),
    poster_base_url: "http://127.0.0.1:9/".into(),
  })
  .unwrap();

  let out = transcript(
    Catalog::new(store.clone(), client),
    "1\n2\nHeat\n7\nali\n0\n",
    no_export(),
  )
  .await;

  assert!(out.contains("1 movies in total"));
  assert!(out.contains("Error: lookup failed: no OMDb API key configured"));
  assert_eq!(out.matches("Alien (Rating: 8.5, Year: 1979").count(), 2);
  assert_eq!(store.list().await.unwrap().len(), 1);
  assert!(out.trim_end().ends_with("Bye!"));
}

#[tokio::test]
async fn storage_failure_is_reported_and_loop_continues() {
  let out = transcript(
    Catalog::new(BrokenStore, inception()),
    "1\n2\nInception\n0\n",
    no_export(),
  )
  .await;

  assert_eq!(out.matches("Error: storage unavailable: disk gone").count(), 2);
  // Prompted again after each failure, then a clean exit.
  assert_eq!(out.matches("Enter your option (0-11): ").count(), 3);
  assert!(out.trim_end().ends_with("Bye!"));
}
