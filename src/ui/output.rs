use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::path::Path;

/// Announce an import run and where it reads from and writes to
pub fn import_banner(input: &str, database: &Path) {
    println!("{} {}", Icons::BOOK, "Importing term banks".style(theme().accent.clone()));
    println!("  {} {}", "input".style(theme().dim.clone()), input);
    println!("  {} {}", "store".style(theme().dim.clone()), database.display());
}

pub fn no_input(pattern: &str) {
    eprintln!(
        "{} {}",
        Icons::WARN,
        format!("No files match {}", pattern).style(theme().warn.clone())
    );
}

pub fn skipped(count: usize) {
    if count > 0 {
        println!(
            "{} {}",
            Icons::SKIP,
            format!("{} duplicate sequence(s) skipped", count).style(theme().warn.clone())
        );
    }
}

pub fn saved(database: &Path) {
    println!(
        "{} {} {}",
        Icons::DATABASE,
        "Database saved to".style(theme().accent.clone()),
        database.display()
    );
}
