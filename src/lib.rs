//! # Termbank - dictionary term bank importer
//!
//! Converts Yomitan-style JSON term banks (Jitendex and friends) into a
//! two-table SQLite store.
//!
//! Termbank provides:
//! - Positional term-bank entry decoding
//! - Glossary extraction from nested structured-content trees
//! - SQLite-backed storage with an explicit wipe/open split
//! - A row-count verifier for smoke-testing a populated store

pub mod config;
pub mod entry;
pub mod glossary;
pub mod importer;
pub mod storage;
pub mod ui;
pub mod verify;

use std::path::PathBuf;

// Re-exports for convenient access
pub use entry::TermEntry;
pub use glossary::{Traversal, extract_glossary, glossary_for_definitions};
pub use importer::{ImportReport, Importer};
pub use storage::{DbStats, DictionaryStore};

/// Default store file, relative to the working directory
pub const DEFAULT_DATABASE: &str = "jitendex.db";

/// Default glob for term-bank input files
pub const DEFAULT_PATTERN: &str = "term_bank_*.json";

/// Printed after `termbank init`; the store is left empty
pub const INIT_MESSAGE: &str = "Database created successfully. To populate it, place the \
term_bank_*.json files in the working directory and run `termbank import`.";

/// Result type alias for Termbank operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Termbank operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed term bank {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Unreadable input path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Store not found: {}", .0.display())]
    StoreNotFound(PathBuf),
}
