use crate::ui::Icons;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Per-file progress for an import run. Hidden when stdout is not a terminal.
pub struct FileProgress {
    pb: ProgressBar,
}

impl FileProgress {
    pub fn new(total_files: usize) -> Self {
        let pb = if console::Term::stdout().is_term() {
            ProgressBar::new(total_files as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template("{prefix} [{bar:30}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("=> "));
        }
        pb.set_prefix(Icons::FILE);
        Self { pb }
    }

    pub fn file_done(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        self.pb.set_message(name);
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
