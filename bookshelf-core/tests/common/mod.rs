//! Test helper functions for integration tests
//!
//! Shared across test files using the tests/common/ pattern.

#![allow(dead_code)]

use bookshelf_core::catalog::{loader, Catalog};
use std::path::PathBuf;
use std::sync::Once;

/// Books in the fixture dataset
pub const FIXTURE_SIZE: usize = 20;

/// Distinct authors in the fixture dataset
pub const FIXTURE_AUTHORS: usize = 10;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("library_books.csv")
}

/// Fresh catalog loaded from the fixture dataset
pub fn fixture_library() -> Catalog {
    init_test_logging();
    loader::from_path(&fixture_path()).expect("fixture dataset should load")
}
