//! Bookshelf Catalog - book records and their derived statistics
//!
//! # Overview
//!
//! A [`Catalog`] owns a table of [`Book`] records and keeps two counters in
//! step with it: the number of records and the number of distinct authors.
//! It supports:
//! - Adding and removing single records (ids are unique)
//! - Looking up records by id or by author
//! - Counting records per genre
//! - Formatting per-book and whole-catalog summaries
//!
//! # Keys
//!
//! Ids are stored as text (see [`BookId`]). Lookups accept anything that
//! implements [`BookKey`], so `1285u32` and `"1285"` name the same record
//! while `"007"` and `"7"` stay distinct.
//!
//! ```text
//! library_books.csv ──loader──▶ Catalog ──▶ add / remove
//!                                   │
//!                                   └──▶ get / find_by_author / genre_counts
//!                                        summarize / describe
//! ```

mod book;
mod library;
pub mod loader;

pub use book::{Book, BookId, BookKey, LONG_BOOK_PAGES};
pub use library::{Catalog, GenreCount, GenreCounts};
