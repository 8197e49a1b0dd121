//! Bookshelf - query and edit a book catalog from the command line

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use bookshelf_core::catalog::loader;
use bookshelf_core::config::BookshelfConfig;

mod catalog_cli;

use catalog_cli::CatalogCommand;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "bookshelf",
    about = "Query and edit an in-memory book catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: CatalogCommand,

    /// Configuration file (defaults to $BOOKSHELF_CONFIG, then the platform config dir)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// CSV dataset to load (overrides the configured dataset)
    #[clap(long, global = true)]
    dataset: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

fn initialize_tracing(log_level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries command output only
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = BookshelfConfig::discover(cli.config.as_deref())?;
    let dataset = cli.dataset.unwrap_or_else(|| config.dataset_path());
    debug!("Loading catalog from {}", dataset.display());

    let mut catalog = loader::from_path(&dataset)
        .with_context(|| format!("Could not load the book catalog from {}", dataset.display()))?;

    cli.command.execute(&mut catalog, &config)
}

fn main() {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_command() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "add",
            "1310",
            "NewBook",
            "NewAuthor",
            "Mystery",
            "270",
            "2010",
        ])
        .unwrap();

        match cli.command {
            CatalogCommand::Add { id, pages, year, .. } => {
                assert_eq!(id, "1310");
                assert_eq!(pages, 270);
                assert_eq!(year, 2010);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bookshelf",
            "genres",
            "--json",
            "--dataset",
            "books.csv",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.dataset, Some(PathBuf::from("books.csv")));
        assert!(matches!(cli.log_level, LogLevel::Debug));
        assert!(matches!(cli.command, CatalogCommand::Genres { json: true }));
    }

    #[test]
    fn test_negative_pages_rejected() {
        let result = Cli::try_parse_from([
            "bookshelf", "add", "1", "T", "A", "G", "-3", "2000",
        ]);
        assert!(result.is_err());
    }
}
