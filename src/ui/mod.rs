pub mod icons;
pub mod output;
pub mod progress;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{import_banner, no_input, saved, skipped};
pub use progress::FileProgress;
pub use table::report_table;
pub use theme::{theme, Theme};
