//! The catalog table and its derived counters

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::book::{Book, BookKey};
use crate::error::{CatalogError, Result};

/// In-memory table of books
///
/// `size` and `distinct_authors` are recomputed by every method that changes
/// the table, before it returns. Mutation needs `&mut self`, so no reader can
/// observe the table and the counters out of step.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    size: usize,
    distinct_authors: usize,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an initial set of records
    ///
    /// Fails on the first id that appears twice.
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Result<Self> {
        let books: Vec<Book> = books.into_iter().collect();

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id().as_str()) {
                return Err(CatalogError::DuplicateKey {
                    id: book.id().to_string(),
                });
            }
        }

        let mut catalog = Self {
            books,
            size: 0,
            distinct_authors: 0,
        };
        catalog.recount();
        Ok(catalog)
    }

    /// Number of records
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct author strings
    pub fn distinct_authors(&self) -> usize {
        self.distinct_authors
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All records in table order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Look up a record by key (trimmed text, integers by decimal text)
    pub fn get(&self, id: impl BookKey) -> Option<&Book> {
        self.position(&id.key_text()).map(|idx| &self.books[idx])
    }

    pub fn contains(&self, id: impl BookKey) -> bool {
        self.get(id).is_some()
    }

    /// Add a record
    ///
    /// Leaves the catalog untouched if the id is already present.
    pub fn add(&mut self, book: Book) -> Result<()> {
        if self.position(book.id().as_str()).is_some() {
            debug!(id = %book.id(), "Rejected duplicate book");
            return Err(CatalogError::DuplicateKey {
                id: book.id().to_string(),
            });
        }

        debug!(id = %book.id(), title = book.title(), "Adding book");
        self.books.push(book);
        self.recount();
        Ok(())
    }

    /// Remove the record with this id and hand it back
    pub fn remove(&mut self, id: impl BookKey) -> Result<Book> {
        let key = id.key_text();
        let idx = self
            .position(&key)
            .ok_or_else(|| CatalogError::NotFound {
                id: key.to_string(),
            })?;

        let book = self.books.remove(idx);
        self.recount();
        debug!(id = %book.id(), size = self.size, "Removed book");
        Ok(book)
    }

    /// All records whose author matches exactly, in table order
    pub fn find_by_author(&self, author: &str) -> Result<Vec<&Book>> {
        let books: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.author() == author)
            .collect();

        if books.is_empty() {
            return Err(CatalogError::AuthorNotFound {
                author: author.to_string(),
            });
        }
        Ok(books)
    }

    /// Count records per genre
    pub fn genre_counts(&self) -> GenreCounts {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for book in &self.books {
            *counts.entry(book.genre()).or_default() += 1;
        }

        let mut entries: Vec<GenreCount> = counts
            .into_iter()
            .map(|(genre, count)| GenreCount {
                genre: genre.to_string(),
                count,
            })
            .collect();

        // Largest first, then alphabetical
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));

        GenreCounts(entries)
    }

    /// Summary sentence for the record with this id
    pub fn summarize(&self, id: impl BookKey) -> Result<String> {
        let key = id.key_text();
        self.position(&key)
            .map(|idx| self.books[idx].summary())
            .ok_or_else(|| CatalogError::NoMatchingBook {
                id: key.to_string(),
            })
    }

    /// Overview of the catalog naming its oldest book
    ///
    /// Ties on publication year go to the record that comes first in the table.
    pub fn describe(&self) -> Result<String> {
        let oldest = self
            .books
            .iter()
            .min_by_key(|book| book.published_year())
            .ok_or(CatalogError::EmptyCatalog)?;

        Ok(format!(
            "There are {} books in the library by {} unique authors. The oldest book in the library is {} by {} published in {}.",
            self.size,
            self.distinct_authors,
            oldest.title(),
            oldest.author(),
            oldest.published_year()
        ))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id().as_str() == key)
    }

    fn recount(&mut self) {
        self.size = self.books.len();
        self.distinct_authors = self
            .books
            .iter()
            .map(Book::author)
            .collect::<HashSet<_>>()
            .len();
    }
}

/// Number of books in one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Per-genre counts, largest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenreCounts(Vec<GenreCount>);

impl GenreCounts {
    /// Count for one genre; `None` if no book has it
    pub fn get(&self, genre: &str) -> Option<usize> {
        self.0.iter().find(|e| e.genre == genre).map(|e| e.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenreCount> {
        self.0.iter()
    }

    /// Number of distinct genres
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts (equals the catalog size)
    pub fn total(&self) -> usize {
        self.0.iter().map(|e| e.count).sum()
    }
}

impl<'a> IntoIterator for &'a GenreCounts {
    type Item = &'a GenreCount;
    type IntoIter = std::slice::Iter<'a, GenreCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
