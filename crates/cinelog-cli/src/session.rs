//! Interactive numbered menu over a [`Catalog`].
//!
//! One command runs to completion before the next prompt. Operation errors
//! are printed and the loop carries on; only I/O failures on the terminal
//! itself end the session.

use std::{io::Write, path::PathBuf};

use anyhow::Result;
use cinelog_catalog::{Catalog, Error, RangeFilter, parse_rating};
use cinelog_core::{CatalogStore, MetadataLookup, Movie};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

// ─── Commands ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Exit,
  List,
  Add,
  Delete,
  UpdateRating,
  Stats,
  Random,
  Search,
  SortByRating,
  SortByYear,
  Filter,
  Export,
}

impl Command {
  /// Menu order; the index is the number the user types.
  pub const ALL: [Command; 12] = [
    Command::Exit,
    Command::List,
    Command::Add,
    Command::Delete,
    Command::UpdateRating,
    Command::Stats,
    Command::Random,
    Command::Search,
    Command::SortByRating,
    Command::SortByYear,
    Command::Filter,
    Command::Export,
  ];

  pub fn from_choice(choice: &str) -> Option<Self> {
    choice
      .trim()
      .parse::<usize>()
      .ok()
      .and_then(|n| Self::ALL.get(n).copied())
  }

  fn label(self) -> &'static str {
    match self {
      Command::Exit => "Exit",
      Command::List => "List movies",
      Command::Add => "Add movie",
      Command::Delete => "Delete movie",
      Command::UpdateRating => "Update movie",
      Command::Stats => "Stats",
      Command::Random => "Random movie",
      Command::Search => "Search movie",
      Command::SortByRating => "Movies sorted by rating",
      Command::SortByYear => "Movies sorted by year",
      Command::Filter => "Filter movies",
      Command::Export => "Generate movies HTML page",
    }
  }
}

// ─── Session ──────────────────────────────────────────────────────────────────

/// Where the catalog page is written.
#[derive(Debug, Clone)]
pub struct ExportTarget {
  pub dir:       PathBuf,
  pub file_name: String,
}

/// The interactive loop: reads choices from `input`, writes to `out`.
pub struct Session<S, L, R, W> {
  catalog: Catalog<S, L>,
  export:  ExportTarget,
  input:   R,
  out:     W,
}

impl<S, L, R, W> Session<S, L, R, W>
where
  S: CatalogStore,
  L: MetadataLookup,
  R: AsyncBufRead + Unpin,
  W: Write,
{
  pub fn new(catalog: Catalog<S, L>, export: ExportTarget, input: R, out: W) -> Self {
    Self { catalog, export, input, out }
  }

  /// Run until the user exits or input ends.
  pub async fn run(&mut self) -> Result<()> {
    loop {
      self.print_menu()?;
      let last = Command::ALL.len() - 1;
      let Some(choice) = self.prompt(&format!("Enter your option (0-{last}): ")).await? else {
        writeln!(self.out, "Bye!")?;
        return Ok(());
      };
      writeln!(self.out)?;

      match Command::from_choice(&choice) {
        Some(Command::Exit) => {
          writeln!(self.out, "Bye!")?;
          return Ok(());
        }
        Some(command) => {
          if !self.dispatch(command).await? {
            writeln!(self.out, "Bye!")?;
            return Ok(());
          }
        }
        None => writeln!(self.out, "Invalid choice. Please choose from 0-{last}.")?,
      }
    }
  }

  fn print_menu(&mut self) -> Result<()> {
    writeln!(self.out)?;
    writeln!(self.out, "********** My Movies Database **********")?;
    writeln!(self.out)?;
    writeln!(self.out, "Menu:")?;
    for (n, command) in Command::ALL.iter().enumerate() {
      writeln!(self.out, "{n}. {}", command.label())?;
    }
    writeln!(self.out)?;
    Ok(())
  }

  /// Print `message` and read one line. `None` means input has ended.
  async fn prompt(&mut self, message: &str) -> Result<Option<String>> {
    write!(self.out, "{message}")?;
    self.out.flush()?;

    let mut line = String::new();
    if self.input.read_line(&mut line).await? == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
  }

  /// Run one command. Returns `false` if input ended mid-command.
  async fn dispatch(&mut self, command: Command) -> Result<bool> {
    let outcome = match command {
      Command::Exit => return Ok(false),
      Command::List => self.list().await,
      Command::Add => self.add().await,
      Command::Delete => self.delete().await,
      Command::UpdateRating => self.update_rating().await,
      Command::Stats => self.stats().await,
      Command::Random => self.random().await,
      Command::Search => self.search().await,
      Command::SortByRating => self.sort_by_rating().await,
      Command::SortByYear => self.sort_by_year().await,
      Command::Filter => self.filter().await,
      Command::Export => self.export().await,
    };

    match outcome {
      Ok(Step::Done) => Ok(true),
      Ok(Step::InputClosed) => Ok(false),
      Err(Failure::Io(e)) => Err(e),
      Err(Failure::Catalog(e)) => {
        tracing::debug!(error = ?e, ?command, "command failed");
        self.report(&e)?;
        Ok(true)
      }
    }
  }

  fn report(&mut self, err: &Error) -> Result<()> {
    match err {
      Error::NotFound(_) => writeln!(self.out, "Movie isn't in database.")?,
      Error::EmptyCatalog => writeln!(self.out, "No movies in database.")?,
      other => writeln!(self.out, "Error: {other}")?,
    }
    Ok(())
  }

  // ── Commands ────────────────────────────────────────────────────────────────

  async fn list(&mut self) -> Outcome {
    let movies = self.catalog.list().await?;
    if movies.is_empty() {
      writeln!(self.out, "No movies in your database.")?;
      return Ok(Step::Done);
    }
    writeln!(self.out, "{} movies in total", movies.len())?;
    self.print_full(&movies)?;
    Ok(Step::Done)
  }

  async fn add(&mut self) -> Outcome {
    let Some(title) = self.prompt("Which movie do you want to add?: ").await? else {
      return Ok(Step::InputClosed);
    };
    let movie = self.catalog.add(&title).await?;
    writeln!(
      self.out,
      "Movie '{}' ({}) added with rating {}.",
      movie.title,
      movie.year,
      movie.rating_display()
    )?;
    Ok(Step::Done)
  }

  async fn delete(&mut self) -> Outcome {
    let Some(title) = self.prompt("Which movie do you want to delete?: ").await? else {
      return Ok(Step::InputClosed);
    };
    self.catalog.delete(&title).await?;
    writeln!(self.out, "Movie '{title}' got deleted.")?;
    Ok(Step::Done)
  }

  async fn update_rating(&mut self) -> Outcome {
    let Some(title) = self.prompt("Which movie do you want to update?: ").await? else {
      return Ok(Step::InputClosed);
    };
    let Some(raw) = self.prompt("New rating (0-10): ").await? else {
      return Ok(Step::InputClosed);
    };
    let rating = parse_rating(&raw)?;
    self.catalog.update_rating(&title, rating).await?;
    writeln!(self.out, "Movie '{title}' updated with new rating of {rating}.")?;
    Ok(Step::Done)
  }

  async fn stats(&mut self) -> Outcome {
    let Some(stats) = self.catalog.stats().await? else {
      writeln!(self.out, "No movies in your database.")?;
      return Ok(Step::Done);
    };
    writeln!(self.out, "Average rating: {:.2}", stats.average)?;
    writeln!(
      self.out,
      "Best movie: {} ({})",
      stats.best.title,
      stats.best.rating_display()
    )?;
    writeln!(
      self.out,
      "Worst movie: {} ({})",
      stats.worst.title,
      stats.worst.rating_display()
    )?;
    Ok(Step::Done)
  }

  async fn random(&mut self) -> Outcome {
    let movie = self.catalog.random_pick().await?;
    write!(self.out, "Random movie: ")?;
    self.print_full(std::slice::from_ref(&movie))?;
    Ok(Step::Done)
  }

  async fn search(&mut self) -> Outcome {
    let Some(term) = self.prompt("Enter part of movie name: ").await? else {
      return Ok(Step::InputClosed);
    };
    let hits = self.catalog.search(&term).await?;
    if hits.is_empty() {
      writeln!(self.out, "No movie found.")?;
    } else {
      self.print_full(&hits)?;
    }
    Ok(Step::Done)
  }

  async fn sort_by_rating(&mut self) -> Outcome {
    let movies = self.catalog.sorted_by_rating().await?;
    if movies.is_empty() {
      return Err(Error::EmptyCatalog.into());
    }
    writeln!(self.out, "Movies sorted by rating:")?;
    for m in &movies {
      writeln!(self.out, "{} (Rating: {}, Year: {})", m.title, m.rating_display(), m.year)?;
    }
    Ok(Step::Done)
  }

  async fn sort_by_year(&mut self) -> Outcome {
    if self.catalog.list().await?.is_empty() {
      return Err(Error::EmptyCatalog.into());
    }
    let Some(answer) = self
      .prompt("Do you want the latest movies first? (Y/N): ")
      .await?
    else {
      return Ok(Step::InputClosed);
    };
    let latest_first = answer.trim().eq_ignore_ascii_case("y");

    let movies = self.catalog.sorted_by_year(latest_first).await?;
    writeln!(self.out, "Movies sorted by year:")?;
    for m in &movies {
      writeln!(self.out, "{} (Year: {}, Rating: {})", m.title, m.year, m.rating_display())?;
    }
    Ok(Step::Done)
  }

  async fn filter(&mut self) -> Outcome {
    writeln!(self.out, "Filter movies:")?;
    let mut inputs = Vec::with_capacity(3);
    for message in [
      "Enter minimum rating (leave blank for no minimum rating): ",
      "Enter start year (leave blank for no start year): ",
      "Enter end year (leave blank for no end year): ",
    ] {
      let Some(raw) = self.prompt(message).await? else {
        return Ok(Step::InputClosed);
      };
      inputs.push(raw);
    }

    let (filter, ignored) = RangeFilter::parse(&inputs[0], &inputs[1], &inputs[2]);
    for bound in ignored {
      writeln!(self.out, "Invalid {bound}. Ignoring this filter.")?;
    }

    let hits = self.catalog.filter(&filter).await?;
    if hits.is_empty() {
      writeln!(self.out, "No movies matched the filter.")?;
    } else {
      writeln!(self.out, "{} movies matched the filter:", hits.len())?;
      self.print_full(&hits)?;
    }
    Ok(Step::Done)
  }

  async fn export(&mut self) -> Outcome {
    let path = self
      .catalog
      .export_page(&self.export.dir, &self.export.file_name)
      .await?;
    writeln!(self.out, "Website was generated successfully at {}", path.display())?;
    Ok(Step::Done)
  }

  fn print_full(&mut self, movies: &[Movie]) -> std::io::Result<()> {
    for m in movies {
      writeln!(
        self.out,
        "{} (Rating: {}, Year: {}, Poster: {})",
        m.title,
        m.rating_display(),
        m.year,
        m.poster_display()
      )?;
    }
    Ok(())
  }
}

// ─── Command outcome ──────────────────────────────────────────────────────────

enum Step {
  Done,
  InputClosed,
}

/// Operation errors are shown to the user; terminal I/O errors end the
/// session.
enum Failure {
  Catalog(Error),
  Io(anyhow::Error),
}

type Outcome = std::result::Result<Step, Failure>;

impl From<Error> for Failure {
  fn from(e: Error) -> Self { Failure::Catalog(e) }
}

impl From<std::io::Error> for Failure {
  fn from(e: std::io::Error) -> Self { Failure::Io(e.into()) }
}

impl From<anyhow::Error> for Failure {
  fn from(e: anyhow::Error) -> Self { Failure::Io(e) }
}

#[cfg(test)]
mod tests;
