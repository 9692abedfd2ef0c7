//! Database schema definitions

/// SQL to create the terms table
pub const CREATE_TERMS_TABLE: &str = r#"
CREATE TABLE terms (
    id INTEGER PRIMARY KEY,
    term TEXT,
    reading TEXT,
    popularity INTEGER,
    sequence INTEGER UNIQUE
)
"#;

/// SQL to create the definitions table
/// One row per extracted gloss, in extraction order
pub const CREATE_DEFINITIONS_TABLE: &str = r#"
CREATE TABLE definitions (
    id INTEGER PRIMARY KEY,
    term_id INTEGER NOT NULL,
    definition TEXT,
    FOREIGN KEY (term_id) REFERENCES terms(id)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX idx_definitions_term ON definitions(term_id)",
];

/// Pragmas applied to every connection
pub const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_TERMS_TABLE, CREATE_DEFINITIONS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
