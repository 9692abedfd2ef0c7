//! Termbank CLI - build and check a SQLite store from JSON term banks

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use termbank::config::{self, Overrides, Settings};
use termbank::ui::{self, Icons};
use termbank::{DictionaryStore, Importer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "termbank")]
#[command(version)]
#[command(about = "Import Yomitan-style JSON term banks into a SQLite dictionary store")]
#[command(long_about = r#"
Termbank converts term_bank_*.json files into a two-table SQLite store
(terms, definitions) and reports row counts for a populated store.

Running without a subcommand only creates an empty store.

Example usage:
  termbank init
  termbank import --input-dir ./jitendex
  termbank verify
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a termbank.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Wipe and recreate an empty store (default)
    Init {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Wipe the store and import every matching term bank into it
    Import {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Directory holding the term bank files
        #[arg(short, long)]
        input_dir: Option<PathBuf>,

        /// File name pattern for term banks
        #[arg(short, long)]
        pattern: Option<String>,

        /// Visit each list item once instead of re-walking its content
        #[arg(long)]
        single_visit: bool,
    },

    /// Print term and definition counts of an existing store
    Verify {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Some(path) = &cli.config {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
    }
    let file_config = config::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Init { database: None }) {
        Commands::Init { database } => {
            let settings = Settings::resolve(Overrides { database, ..Default::default() }, file_config);
            DictionaryStore::create(&settings.database)?;

            println!("{}", termbank::INIT_MESSAGE);
        }

        Commands::Import { database, input_dir, pattern, single_visit } => {
            let overrides = Overrides { database, input_dir, pattern, single_visit };
            let settings = Settings::resolve(overrides, file_config);

            let input = settings.input_dir.join(&settings.pattern);
            ui::import_banner(&input.display().to_string(), &settings.database);

            let paths = Importer::discover(&settings.input_dir, &settings.pattern)?;
            if paths.is_empty() {
                ui::no_input(&settings.pattern);
            }

            let mut store = DictionaryStore::create(&settings.database)?;
            let progress = ui::FileProgress::new(paths.len());
            let report = Importer::new(settings.traversal)
                .import_paths(&mut store, &paths, |path| progress.file_done(path))?;
            progress.finish();

            println!();
            println!("{} Import summary", Icons::STATS);
            println!("{}", ui::report_table(&report));
            ui::skipped(report.skipped.len());
            ui::saved(&settings.database);
        }

        Commands::Verify { database } => {
            let settings = Settings::resolve(Overrides { database, ..Default::default() }, file_config);
            let stats = termbank::verify::verify(&settings.database)?;

            println!("{}", stats);
        }
    }

    Ok(())
}
