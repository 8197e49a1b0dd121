//! Bookshelf catalog CLI commands
//!
//! Every command runs against the catalog loaded for this invocation.
//! `add` and `remove` only change that in-memory copy; the dataset file is
//! never rewritten.

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::debug;

use bookshelf_core::config::BookshelfConfig;
use bookshelf_core::{Book, BookId, Catalog, CatalogError};

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Show the number of books and distinct authors
    Stats {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Describe the library and its oldest book
    Describe,

    /// Print the summary sentence for a book
    Summary {
        /// Book id
        id: String,
    },

    /// List the books written by an author (exact match)
    Author {
        /// Author name
        name: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Count the books in each genre
    Genres {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Add a book and report the updated counts
    Add {
        id: String,
        title: String,
        author: String,
        genre: String,
        pages: u32,
        year: i32,
    },

    /// Remove a book and report the updated counts
    Remove {
        /// Book id
        id: String,
    },

    /// Show how many years ago a book was published
    Age {
        /// Book id
        id: String,
    },
}

#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Pages")]
    pages: u32,
    #[tabled(rename = "Published")]
    published_year: i32,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().to_string(),
            genre: book.genre().to_string(),
            pages: book.pages(),
            published_year: book.published_year(),
        }
    }
}

#[derive(Tabled)]
struct GenreRow {
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Books")]
    count: usize,
}

#[derive(Serialize)]
struct Stats {
    size: usize,
    distinct_authors: usize,
}

impl CatalogCommand {
    pub fn execute(self, catalog: &mut Catalog, config: &BookshelfConfig) -> Result<()> {
        debug!("Executing {:?}", self);

        match self {
            CatalogCommand::Stats { json } => stats(catalog, json),
            CatalogCommand::Describe => {
                println!("{}", catalog.describe()?);
                Ok(())
            }
            CatalogCommand::Summary { id } => {
                println!("{}", catalog.summarize(&id)?);
                Ok(())
            }
            CatalogCommand::Author { name, json } => author(catalog, &name, json),
            CatalogCommand::Genres { json } => genres(catalog, json),
            CatalogCommand::Add {
                id,
                title,
                author,
                genre,
                pages,
                year,
            } => {
                let book = Book::new(BookId::new(&id)?, title, author, genre, pages, year);
                let label = book.to_string();
                catalog.add(book)?;
                println!(
                    "{label} has been added to the library. {}",
                    counts_sentence(catalog)
                );
                Ok(())
            }
            CatalogCommand::Remove { id } => {
                let book = catalog.remove(&id)?;
                println!(
                    "{book} has been removed from the library. {}",
                    counts_sentence(catalog)
                );
                Ok(())
            }
            CatalogCommand::Age { id } => {
                let book = catalog
                    .get(&id)
                    .ok_or(CatalogError::NoMatchingBook { id: id.clone() })?;
                let year = config.reference_year();
                println!("{book} is {} years old as of {year}.", book.age_at(year));
                Ok(())
            }
        }
    }
}

fn counts_sentence(catalog: &Catalog) -> String {
    format!(
        "Library now has {} books and {} unique authors.",
        catalog.size(),
        catalog.distinct_authors()
    )
}

fn stats(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let stats = Stats {
            size: catalog.size(),
            distinct_authors: catalog.distinct_authors(),
        };
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Number of books: {}", catalog.size());
        println!("Number of unique authors: {}", catalog.distinct_authors());
    }
    Ok(())
}

fn author(catalog: &Catalog, name: &str, json: bool) -> Result<()> {
    let books = catalog.find_by_author(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    let rows: Vec<BookRow> = books.into_iter().map(BookRow::from).collect();
    println!("{}", render(&rows));
    Ok(())
}

fn genres(catalog: &Catalog, json: bool) -> Result<()> {
    let counts = catalog.genre_counts();

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    let rows: Vec<GenreRow> = counts
        .iter()
        .map(|entry| GenreRow {
            genre: entry.genre.clone(),
            count: entry.count,
        })
        .collect();
    println!("{}", render(&rows));
    Ok(())
}

fn render<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}
