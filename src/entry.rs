//! Term-bank entry decoding
//!
//! A term bank is a JSON array of fixed-arity positional entries:
//!
//! ```text
//! [term, reading, definitionTags, rules, popularity, definitions, sequence, termTags]
//! ```
//!
//! Tags and rules are carried through deserialization but never stored.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// One dictionary entry, decoded from its positional array form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermEntry(
    pub String,
    pub String,
    pub Value,
    pub Value,
    pub i64,
    pub Vec<Value>,
    pub i64,
    pub Value,
);

impl TermEntry {
    /// Create an entry with empty tags and rules
    pub fn new(
        term: impl Into<String>,
        reading: impl Into<String>,
        popularity: i64,
        definitions: Vec<Value>,
        sequence: i64,
    ) -> Self {
        Self(
            term.into(),
            reading.into(),
            Value::String(String::new()),
            Value::String(String::new()),
            popularity,
            definitions,
            sequence,
            Value::String(String::new()),
        )
    }

    /// Surface form
    pub fn term(&self) -> &str {
        &self.0
    }

    /// Kana reading (may be empty)
    pub fn reading(&self) -> &str {
        &self.1
    }

    /// Ranking score used by consumers
    pub fn popularity(&self) -> i64 {
        self.4
    }

    /// Raw definition list: plain glosses and structured-content objects
    pub fn definitions(&self) -> &[Value] {
        &self.5
    }

    /// Dictionary-wide unique sequence number
    pub fn sequence(&self) -> i64 {
        self.6
    }
}

/// Decode a whole term bank from a reader.
pub fn read_term_bank<R: Read>(reader: R) -> serde_json::Result<Vec<TermEntry>> {
    serde_json::from_reader(reader)
}

/// Decode a term bank file, tagging JSON failures with the file path.
pub fn load_term_bank(path: &Path) -> Result<Vec<TermEntry>> {
    let file = std::fs::File::open(path)?;
    read_term_bank(std::io::BufReader::new(file)).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}
