//! Term-bank importer
//!
//! Reads term-bank files into a [`DictionaryStore`]. A whole run shares one
//! transaction: duplicate sequences are skipped per entry, any other failure
//! aborts the run and nothing is persisted.

use std::path::{Path, PathBuf};
use crate::entry::{self, TermEntry};
use crate::glossary::{self, Traversal};
use crate::storage::{DictionaryStore, EntryOutcome, ImportBatch};
use crate::{Error, Result};

/// Imports term banks into a store
#[derive(Debug, Clone, Copy, Default)]
pub struct Importer {
    traversal: Traversal,
}

impl Importer {
    pub fn new(traversal: Traversal) -> Self {
        Self { traversal }
    }

    /// List term-bank files in `dir` matching `pattern`.
    ///
    /// Order follows the glob enumeration and is not meant to be relied on.
    /// A directory whose path is not UTF-8 cannot be globbed and is an error.
    pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let escaped = dir
            .to_str()
            .map(glob::Pattern::escape)
            .ok_or_else(|| Error::NonUtf8Path(dir.to_path_buf()))?;
        let full = format!("{}/{}", escaped.trim_end_matches('/'), pattern);

        let mut paths = Vec::new();
        for path in glob::glob(&full)? {
            let path = path?;
            if path.is_file() {
                paths.push(path);
            }
        }
        tracing::debug!("Found {} term bank(s) matching {}", paths.len(), full);
        Ok(paths)
    }

    /// Import every file in one transaction.
    ///
    /// `on_file` is called after each file is read, for progress reporting.
    pub fn import_paths<F>(
        &self,
        store: &mut DictionaryStore,
        paths: &[PathBuf],
        mut on_file: F,
    ) -> Result<ImportReport>
    where
        F: FnMut(&Path),
    {
        let mut report = ImportReport::default();
        let mut batch = store.batch()?;

        for path in paths {
            tracing::info!("Importing {}", path.display());
            let entries = entry::load_term_bank(path)?;
            self.import_entries(&mut batch, &entries, &mut report)?;
            report.files += 1;
            on_file(path);
        }

        batch.commit()?;
        tracing::info!(
            "Imported {} terms and {} definitions from {} file(s)",
            report.terms,
            report.definitions,
            report.files
        );
        Ok(report)
    }

    /// Import already-decoded entries into an open batch
    pub fn import_entries(
        &self,
        batch: &mut ImportBatch<'_>,
        entries: &[TermEntry],
        report: &mut ImportReport,
    ) -> Result<()> {
        for entry in entries {
            report.entries += 1;
            let glossary = glossary::glossary_for_definitions(entry.definitions(), self.traversal);

            match batch.insert_entry(entry, &glossary)? {
                EntryOutcome::Inserted { definitions, .. } => {
                    report.terms += 1;
                    report.definitions += definitions;
                }
                EntryOutcome::Duplicate { sequence, reason } => {
                    tracing::warn!("Error inserting entry with sequence {}: {}", sequence, reason);
                    report.skipped.push(sequence);
                }
            }
        }
        Ok(())
    }
}

/// Summary of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub files: usize,
    pub entries: usize,
    pub terms: usize,
    pub definitions: usize,
    /// Sequences rejected as duplicates, in encounter order
    pub skipped: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn structured(content: Value) -> Value {
        json!({"type": "structured-content", "content": content})
    }

    fn write_bank(dir: &Path, name: &str, entries: Value) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, entries.to_string()).unwrap();
        path
    }

    #[test]
    fn test_import_entries_counts_and_skips() {
        let mut store = DictionaryStore::open_in_memory().unwrap();
        let entries = vec![
            TermEntry::new("猫", "ねこ", 5, vec![structured(json!([{"tag": "li", "content": ["cat"]}]))], 1),
            TermEntry::new("ネコ", "ねこ", 1, vec![structured(json!([{"tag": "li", "content": "dup"}]))], 1),
            TermEntry::new("犬", "いぬ", 3, vec![json!("dog")], 2),
        ];

        let mut report = ImportReport::default();
        let mut batch = store.batch().unwrap();
        Importer::default().import_entries(&mut batch, &entries, &mut report).unwrap();
        batch.commit().unwrap();

        assert_eq!(report.entries, 3);
        assert_eq!(report.terms, 2);
        assert_eq!(report.definitions, 1);
        assert_eq!(report.skipped, vec![1]);

        let cat = store.find_term_by_sequence(1).unwrap().unwrap();
        assert_eq!(cat.term, "猫");
        assert_eq!(store.definitions_for_term(cat.id).unwrap(), vec!["cat"]);
    }

    #[test]
    fn test_traversal_mode_is_applied() {
        let nested = vec![structured(json!({"tag": "li", "content": {"tag": "li", "content": "x"}}))];
        let entries = vec![TermEntry::new("x", "x", 0, nested, 1)];

        for (traversal, expected) in [(Traversal::RevisitItems, 2), (Traversal::SingleVisit, 1)] {
            let mut store = DictionaryStore::open_in_memory().unwrap();
            let mut report = ImportReport::default();
            let mut batch = store.batch().unwrap();
            Importer::new(traversal).import_entries(&mut batch, &entries, &mut report).unwrap();
            batch.commit().unwrap();
            assert_eq!(store.count_definitions().unwrap(), expected);
        }
    }

    #[test]
    fn test_discover_matches_pattern_only() {
        let dir = tempfile::tempdir().unwrap();
        write_bank(dir.path(), "term_bank_1.json", json!([]));
        write_bank(dir.path(), "term_bank_2.json", json!([]));
        write_bank(dir.path(), "tag_bank_1.json", json!([]));
        std::fs::create_dir(dir.path().join("term_bank_dir.json")).unwrap();

        let mut found = Importer::discover(dir.path(), crate::DEFAULT_PATTERN).unwrap();
        found.sort();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["term_bank_1.json", "term_bank_2.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_rejects_non_utf8_dir() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = Path::new(OsStr::from_bytes(b"banks-\xff"));
        assert!(matches!(
            Importer::discover(dir, crate::DEFAULT_PATTERN),
            Err(Error::NonUtf8Path(p)) if p == dir
        ));
    }

    #[test]
    fn test_malformed_file_aborts_whole_run() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_bank(
            dir.path(),
            "term_bank_1.json",
            json!([["一", "いち", "", "", 0, [structured(json!({"tag": "li", "content": "one"}))], 1, ""]]),
        );
        let bad = dir.path().join("term_bank_2.json");
        std::fs::write(&bad, r#"[["二", "に"]]"#).unwrap();

        let mut store = DictionaryStore::open_in_memory().unwrap();
        let result = Importer::default().import_paths(&mut store, &[good, bad], |_| {});

        assert!(matches!(result, Err(Error::Json { .. })));
        assert_eq!(store.count_terms().unwrap(), 0);
    }

    #[test]
    fn test_import_paths_reports_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![
            write_bank(dir.path(), "term_bank_1.json", json!([["一", "いち", "", "", 0, [], 1, ""]])),
            write_bank(dir.path(), "term_bank_2.json", json!([])),
        ];

        let mut seen = Vec::new();
        let mut store = DictionaryStore::open_in_memory().unwrap();
        let report = Importer::default()
            .import_paths(&mut store, &paths, |p| seen.push(p.to_path_buf()))
            .unwrap();

        assert_eq!(seen, paths);
        assert_eq!(report.files, 2);
        assert_eq!(report.terms, 1);
        assert_eq!(report.definitions, 0);
    }
}
