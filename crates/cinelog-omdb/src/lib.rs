//! OMDb (<https://www.omdbapi.com>) client for cinelog.
//!
//! Implements [`cinelog_core::MetadataLookup`] by querying OMDb's title
//! endpoint and reducing the response to a [`cinelog_core::MovieLookup`].

mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, DEFAULT_POSTER_URL, OmdbClient, OmdbConfig};
pub use error::{Error, Result};

#[cfg(test)]
mod tests;
