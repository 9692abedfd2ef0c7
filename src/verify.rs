//! Row-count smoke check for a populated store

use std::path::Path;
use crate::storage::{DbStats, DictionaryStore};
use crate::Result;

/// Open the store at `path` and count its rows.
///
/// The store is opened read-only and never created here; a missing file is
/// an error.
pub fn verify(path: &Path) -> Result<DbStats> {
    let store = DictionaryStore::open_read_only(path)?;
    let stats = store.stats()?;
    if stats.orphaned_definitions > 0 {
        tracing::warn!(
            "{} definition(s) reference a missing term",
            stats.orphaned_definitions
        );
    }
    Ok(stats)
}
