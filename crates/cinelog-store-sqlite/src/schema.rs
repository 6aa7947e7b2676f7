//! SQL schema for the cinelog SQLite store.
//!
//! Executed every time a connection is opened. There is no migration path:
//! a changed schema needs the file to be rebuilt by hand.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS movies (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT UNIQUE NOT NULL,
    year       INTEGER NOT NULL,
    rating     REAL NOT NULL,
    poster_url TEXT              -- NULL or '' when there is no poster
);
";
