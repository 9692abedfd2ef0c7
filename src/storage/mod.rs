//! Storage Layer - SQLite-backed persistence
//!
//! The store holds two tables:
//! - terms(id, term, reading, popularity, sequence UNIQUE)
//! - definitions(id, term_id -> terms.id, definition)
//!
//! [`DictionaryStore::create`] wipes and recreates the file;
//! [`DictionaryStore::open`] only ever opens an existing one.

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, DictionaryStore, EntryOutcome, ImportBatch, TermRow};
