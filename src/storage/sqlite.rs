//! SQLite storage implementation

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use rusqlite::{Connection, OpenFlags, OptionalExtension, Transaction, params};
use crate::entry::TermEntry;
use crate::{Error, Result};
use super::schema;

/// SQLite-backed dictionary store
pub struct DictionaryStore {
    conn: Connection,
}

impl DictionaryStore {
    /// Wipe any existing store at `path` and create a fresh, empty one.
    ///
    /// Repeated calls always leave an empty schema behind. SQLite side files
    /// (`-wal`, `-shm`, `-journal`) are removed along with the database.
    pub fn create(path: &Path) -> Result<Self> {
        for stale in store_files(path) {
            match std::fs::remove_file(&stale) {
                Ok(()) => tracing::debug!("Removed {}", stale.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }

        let store = Self::configure(Connection::open(path)?)?;
        store.initialize_schema()?;
        tracing::info!("Created dictionary store at {}", path.display());
        Ok(store)
    }

    /// Open an existing store without touching its contents
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::StoreNotFound(path.to_path_buf()));
        }
        Self::configure(Connection::open(path)?)
    }

    /// Open an existing store for reading only; writes through it fail
    pub fn open_read_only(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::StoreNotFound(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Open an in-memory store with a fresh schema (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let store = Self::configure(Connection::open_in_memory()?)?;
        store.initialize_schema()?;
        Ok(store)
    }

    fn configure(conn: Connection) -> Result<Self> {
        conn.execute_batch(schema::CONNECTION_PRAGMAS)?;
        Ok(Self { conn })
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Write Operations ==========

    /// Start an import batch. Nothing is persisted until [`ImportBatch::commit`].
    pub fn batch(&mut self) -> Result<ImportBatch<'_>> {
        Ok(ImportBatch {
            tx: self.conn.transaction()?,
        })
    }

    /// Insert a single entry in its own batch
    pub fn insert_entry(&mut self, entry: &TermEntry, glossary: &[String]) -> Result<EntryOutcome> {
        let mut batch = self.batch()?;
        let outcome = batch.insert_entry(entry, glossary)?;
        batch.commit()?;
        Ok(outcome)
    }

    // ========== Read Operations ==========

    /// Look up a term by its sequence number
    pub fn find_term_by_sequence(&self, sequence: i64) -> Result<Option<TermRow>> {
        self.conn
            .query_row(
                "SELECT id, term, reading, popularity, sequence FROM terms WHERE sequence = ?1",
                [sequence],
                |row| {
                    Ok(TermRow {
                        id: row.get(0)?,
                        term: row.get(1)?,
                        reading: row.get(2)?,
                        popularity: row.get(3)?,
                        sequence: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// Glosses belonging to a term, in insertion order
    pub fn definitions_for_term(&self, term_id: i64) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT definition FROM definitions WHERE term_id = ?1 ORDER BY id"
        )?;

        let definitions = stmt
            .query_map([term_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(definitions)
    }

    /// Count all terms
    pub fn count_terms(&self) -> Result<usize> {
        let count: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM terms", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count all definitions
    pub fn count_definitions(&self) -> Result<usize> {
        let count: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM definitions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Count definitions whose term no longer exists
    pub fn count_orphaned_definitions(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            r#"
            SELECT COUNT(*) FROM definitions d
            LEFT JOIN terms t ON t.id = d.term_id
            WHERE t.id IS NULL
            "#,
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            terms: self.count_terms()?,
            definitions: self.count_definitions()?,
            orphaned_definitions: self.count_orphaned_definitions()?,
        })
    }
}

/// Database file plus the side files SQLite may leave next to it
fn store_files(path: &Path) -> Vec<PathBuf> {
    let mut files = vec![path.to_path_buf()];
    for suffix in ["-wal", "-shm", "-journal"] {
        let mut name = OsString::from(path.as_os_str());
        name.push(suffix);
        files.push(PathBuf::from(name));
    }
    files
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// A run of entry inserts sharing one transaction.
///
/// Each entry gets its own savepoint, so a rejected entry leaves no rows
/// behind. Dropping the batch without committing rolls everything back.
pub struct ImportBatch<'a> {
    tx: Transaction<'a>,
}

impl ImportBatch<'_> {
    /// Insert a term and its glosses, all or nothing.
    ///
    /// A duplicate `sequence` is reported as [`EntryOutcome::Duplicate`];
    /// every other failure is returned as an error.
    pub fn insert_entry(&mut self, entry: &TermEntry, glossary: &[String]) -> Result<EntryOutcome> {
        let sp = self.tx.savepoint()?;

        let inserted = sp.execute(
            "INSERT INTO terms (term, reading, popularity, sequence) VALUES (?1, ?2, ?3, ?4)",
            params![entry.term(), entry.reading(), entry.popularity(), entry.sequence()],
        );
        match inserted {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Ok(EntryOutcome::Duplicate {
                    sequence: entry.sequence(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        let term_id = sp.last_insert_rowid();
        {
            let mut stmt = sp.prepare_cached(
                "INSERT INTO definitions (term_id, definition) VALUES (?1, ?2)"
            )?;
            for gloss in glossary {
                stmt.execute(params![term_id, gloss])?;
            }
        }
        sp.commit()?;

        Ok(EntryOutcome::Inserted {
            term_id,
            definitions: glossary.len(),
        })
    }

    /// Persist everything inserted through this batch
    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        Ok(())
    }
}

/// Result of inserting one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Inserted { term_id: i64, definitions: usize },
    /// Rejected because a term with this sequence already exists
    Duplicate { sequence: i64, reason: String },
}

/// A stored term row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRow {
    pub id: i64,
    pub term: String,
    pub reading: String,
    pub popularity: i64,
    pub sequence: i64,
}

/// Database statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbStats {
    pub terms: usize,
    pub definitions: usize,
    pub orphaned_definitions: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of terms: {}", self.terms)?;
        write!(f, "Number of definitions: {}", self.definitions)
    }
}
