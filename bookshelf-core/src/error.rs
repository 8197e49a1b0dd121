//! Catalog error types with the library's human-readable diagnostics

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors returned by catalog operations
///
/// The `Display` text of each variant is the diagnostic shown to users, so
/// callers that only need a message can simply print the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record with this id is already in the catalog
    #[error("Error: book_id {id} is already in the library.")]
    DuplicateKey { id: String },

    /// No record with this id exists (remove)
    #[error("Error: {id} is not in the library.")]
    NotFound { id: String },

    /// No record was written by this author
    #[error("No books by {author} in library")]
    AuthorNotFound { author: String },

    /// No record with this id exists (summary lookup)
    #[error("No matching book in the library.")]
    NoMatchingBook { id: String },

    /// The catalog holds no records
    #[error("The library is empty.")]
    EmptyCatalog,

    /// A key that has no canonical form (empty after trimming)
    #[error("Invalid book_id {raw:?}: a book_id must not be empty.")]
    InvalidId { raw: String },
}

/// Coarse classification of [`CatalogError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    Empty,
    Invalid,
}

impl CatalogError {
    /// Classify this error
    ///
    /// All three lookup misses (`NotFound`, `AuthorNotFound`,
    /// `NoMatchingBook`) share [`ErrorKind::NotFound`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            CatalogError::NotFound { .. }
            | CatalogError::AuthorNotFound { .. }
            | CatalogError::NoMatchingBook { .. } => ErrorKind::NotFound,
            CatalogError::EmptyCatalog => ErrorKind::Empty,
            CatalogError::InvalidId { .. } => ErrorKind::Invalid,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
