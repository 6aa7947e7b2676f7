//! Catalog operations: the user-facing verbs of cinelog.
//!
//! [`Catalog`] layers validation and business rules over any
//! [`CatalogStore`](cinelog_core::CatalogStore), and uses a
//! [`MetadataLookup`](cinelog_core::MetadataLookup) to enrich new entries.
//! The read-side helpers ([`stats`], [`filter`], [`sort`], [`page`]) are pure
//! functions over a listing so they can be used and tested on their own.

mod catalog;

pub mod error;
pub mod filter;
pub mod page;
pub mod sort;
pub mod stats;

pub use catalog::{Catalog, parse_rating, validate_rating};
pub use error::{Error, Result};
pub use filter::{IgnoredBound, RangeFilter};
pub use stats::Stats;
