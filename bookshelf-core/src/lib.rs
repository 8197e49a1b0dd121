//! Bookshelf library exports

pub mod catalog;
pub mod config;
pub mod error;

pub use catalog::{Book, BookId, BookKey, Catalog, GenreCounts};
pub use error::{CatalogError, ErrorKind};
