//! Dataset loading
//!
//! Builds a [`Catalog`] from CSV with the columns
//! `book_id,title,author,genre,pages,published_year`. Columns are matched by
//! header name, so their order is free and extra columns are ignored.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::{Book, Catalog};

/// Load a catalog from any CSV source
pub fn from_reader(reader: impl Read) -> Result<Catalog> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut books = Vec::new();
    for (idx, row) in csv_reader.deserialize::<Book>().enumerate() {
        // Line 1 holds the header
        let line = idx + 2;
        let book = row.with_context(|| format!("Failed to parse book record on line {line}"))?;
        books.push(book);
    }
    debug!("Parsed {} book records", books.len());

    let catalog = Catalog::from_books(books).context("Dataset contains a repeated book_id")?;
    info!(
        size = catalog.size(),
        authors = catalog.distinct_authors(),
        "Loaded book catalog"
    );
    Ok(catalog)
}

/// Load a catalog from a CSV file
pub fn from_path(path: &Path) -> Result<Catalog> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;
    from_reader(file).with_context(|| format!("Failed to load dataset {}", path.display()))
}
