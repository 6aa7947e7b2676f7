//! Core types and trait definitions for the cinelog movie catalog.
//!
//! This crate is free of HTTP and database dependencies. The store backend
//! (`cinelog-store-sqlite`), the metadata client (`cinelog-omdb`) and the
//! operations layer (`cinelog-catalog`) all depend on it.

// Native `async fn` in traits; the `Send` bounds are spelled out on the
// returned futures instead.
#![allow(async_fn_in_trait)]

pub mod lookup;
pub mod movie;
pub mod store;

pub use lookup::{MetadataLookup, MovieLookup};
pub use movie::{Movie, NO_POSTER};
pub use store::CatalogStore;
