use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Style,
    pub warn: Style,
    pub dim: Style,
}

impl Theme {
    /// Colored on a terminal, unstyled when output is piped
    pub fn for_terminal(is_term: bool) -> Self {
        if !is_term {
            return Self {
                accent: Style::new(),
                warn: Style::new(),
                dim: Style::new(),
            };
        }
        Self {
            accent: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            dim: Style::new().dimmed(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::for_terminal(console::Term::stdout().is_term()))
}
