//! Book records and their canonical keys

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Books with more pages than this are considered long
pub const LONG_BOOK_PAGES: u32 = 300;

/// Canonical book key
///
/// Keys arrive both as text (`"1285"`) and as numbers (`1285`). `BookId`
/// stores the text form so every comparison in the catalog is a plain string
/// equality:
/// - text keys keep their characters, minus surrounding whitespace
///   (`"007"` and `"7"` are different books)
/// - numeric keys convert to their decimal text (`1285u32` is `"1285"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookId(String);

impl BookId {
    /// Parse a key, rejecting keys that are empty after trimming
    pub fn new(raw: &str) -> Result<Self, CatalogError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(CatalogError::InvalidId {
                raw: raw.to_string(),
            });
        }
        Ok(BookId(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Anything a book can be looked up by
///
/// Implemented for text keys, the numeric id types and [`BookId`]. Lookups
/// compare [`BookKey::key_text`] against stored ids, so a key that names no
/// book is a miss rather than an `InvalidId` error.
pub trait BookKey {
    /// The key in the same form [`BookId`] stores
    fn key_text(&self) -> Cow<'_, str>;
}

impl BookKey for str {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.trim())
    }
}

impl BookKey for String {
    fn key_text(&self) -> Cow<'_, str> {
        self.as_str().key_text()
    }
}

impl BookKey for BookId {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl BookKey for u32 {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl BookKey for u64 {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl BookKey for i64 {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<K: BookKey + ?Sized> BookKey for &K {
    fn key_text(&self) -> Cow<'_, str> {
        (**self).key_text()
    }
}

impl FromStr for BookId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookId::new(s)
    }
}

impl TryFrom<String> for BookId {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BookId::new(&value)
    }
}

impl From<BookId> for String {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl From<u32> for BookId {
    fn from(n: u32) -> Self {
        BookId(n.to_string())
    }
}

impl From<u64> for BookId {
    fn from(n: u64) -> Self {
        BookId(n.to_string())
    }
}

impl From<i64> for BookId {
    fn from(n: i64) -> Self {
        BookId(n.to_string())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single catalog entry
///
/// Fields are fixed at construction; the catalog only ever stores, clones
/// and drops whole records. Serialized field names match the dataset columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "book_id")]
    id: BookId,
    title: String,
    author: String,
    genre: String,
    pages: u32,
    published_year: i32,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        pages: u32,
        published_year: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            pages,
            published_year,
        }
    }

    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn published_year(&self) -> i32 {
        self.published_year
    }

    /// Years elapsed between publication and `year`
    pub fn age_at(&self, year: i32) -> i32 {
        year.saturating_sub(self.published_year)
    }

    /// Age relative to the current local calendar year
    ///
    /// Changes every new year; use [`Book::age_at`] where a stable value is needed.
    pub fn age(&self) -> i32 {
        self.age_at(chrono::Local::now().year())
    }

    pub fn is_long(&self) -> bool {
        self.pages > LONG_BOOK_PAGES
    }

    /// One-sentence description of the book
    pub fn summary(&self) -> String {
        format!(
            "Book ID {}: {} by {} has {} pages. It was first published in {} and belongs to the {} genre.",
            self.id,
            self.title,
            self.author.trim(),
            self.pages,
            self.published_year,
            self.genre
        )
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author.trim(), self.published_year)
    }
}

#[cfg(test)]
mod book_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn example_book() -> Book {
        Book::new(
            BookId::new("1310").unwrap(),
            "NewBook",
            "NewAuthor",
            "Mystery",
            270,
            2010,
        )
    }

    #[test]
    fn test_text_ids_keep_their_digits() {
        assert_eq!(BookId::new("1285").unwrap().as_str(), "1285");
        assert_eq!(BookId::new("  1285 ").unwrap().as_str(), "1285");
        assert_eq!(BookId::new("007").unwrap().as_str(), "007");
        assert_eq!(BookId::new("+42").unwrap().as_str(), "+42");
        assert_ne!(BookId::new("007").unwrap(), BookId::new("7").unwrap());
    }

    #[test]
    fn test_numeric_and_text_ids_agree() {
        assert_eq!(BookId::from(1285u32), BookId::new("1285").unwrap());
        assert_eq!(BookId::from(42i64), "42".parse::<BookId>().unwrap());
        assert_eq!(BookId::from(7u64).as_str(), "7");
    }

    #[test]
    fn test_key_text_matches_stored_form() {
        let id = BookId::new("007").unwrap();
        assert_eq!(" 007 ".key_text(), id.key_text());
        assert_eq!(String::from("007").key_text(), "007");
        assert_eq!(1285u32.key_text(), "1285");
        assert_eq!((&id).key_text(), "007");
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = BookId::new("   ").unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidId {
                raw: "   ".to_string()
            }
        );
        assert!(BookId::try_from(String::new()).is_err());
    }

    #[test]
    fn test_age_at_reference_year() {
        let book = example_book();
        assert_eq!(book.age_at(2024), 14);
        assert_eq!(book.age_at(2010), 0);
    }

    #[test]
    fn test_age_at_extreme_year_saturates() {
        let ancient = Book::new(BookId::from(1u32), "A", "B", "C", 1, i32::MIN);
        assert_eq!(ancient.age_at(2024), i32::MAX);

        let future = Book::new(BookId::from(2u32), "A", "B", "C", 1, i32::MAX);
        assert_eq!(future.age_at(-10), i32::MIN);
    }

    #[test]
    fn test_age_tracks_current_year() {
        let book = example_book();
        let year = chrono::Local::now().year();
        assert_eq!(book.age(), year - 2010);
    }

    #[test]
    fn test_is_long_boundary() {
        let at_limit = Book::new(BookId::from(1u32), "A", "B", "C", 300, 2000);
        let over_limit = Book::new(BookId::from(2u32), "A", "B", "C", 301, 2000);
        assert!(!at_limit.is_long());
        assert!(over_limit.is_long());
        assert!(!example_book().is_long());
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            example_book().summary(),
            "Book ID 1310: NewBook by NewAuthor has 270 pages. It was first published in 2010 and belongs to the Mystery genre."
        );
    }

    #[test]
    fn test_summary_trims_author() {
        let book = Book::new(
            BookId::from(1285u32),
            "Blue Fire",
            " Janice Hardy ",
            "Fantasy",
            373,
            2010,
        );
        assert_eq!(
            book.summary(),
            "Book ID 1285: Blue Fire by Janice Hardy has 373 pages. It was first published in 2010 and belongs to the Fantasy genre."
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(example_book().to_string(), "NewBook by NewAuthor (2010)");
    }
}
