//! Visual theme and styling.

use console::Style;

/// Leela's visual theme.
#[derive(Debug, Clone)]
pub struct LeelaTheme {
    /// Up-to-date package names and versions (green).
    pub good: Style,
    /// Outdated package names and versions (red).
    pub bad: Style,
    /// Commands the user can run (blue).
    pub command: Style,
    /// Paths and manifest categories (cyan).
    pub location: Style,
    /// Progress lines (cyan).
    pub progress: Style,
    /// Hosts and other emphasised values (bold).
    pub highlight: Style,
    /// Errors (red).
    pub error: Style,
    /// Notes like "--Cancelled--" (bright blue).
    pub note: Style,
}

impl Default for LeelaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LeelaTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            good: Style::new().green(),
            bad: Style::new().red(),
            command: Style::new().blue(),
            location: Style::new().cyan(),
            progress: Style::new().cyan(),
            highlight: Style::new().bold(),
            error: Style::new().red(),
            note: Style::new().blue().bright(),
        }
    }

    /// Create a theme without colors (for non-TTY or NO_COLOR).
    pub fn plain() -> Self {
        Self {
            good: Style::new(),
            bad: Style::new(),
            command: Style::new(),
            location: Style::new(),
            progress: Style::new(),
            highlight: Style::new(),
            error: Style::new(),
            note: Style::new(),
        }
    }

    pub fn good(&self, text: &str) -> String {
        self.good.apply_to(text).to_string()
    }

    pub fn bad(&self, text: &str) -> String {
        self.bad.apply_to(text).to_string()
    }

    pub fn command(&self, text: &str) -> String {
        self.command.apply_to(text).to_string()
    }

    pub fn location(&self, text: &str) -> String {
        self.location.apply_to(text).to_string()
    }

    pub fn highlight(&self, text: &str) -> String {
        self.highlight.apply_to(text).to_string()
    }

    pub fn note(&self, text: &str) -> String {
        self.note.apply_to(text).to_string()
    }

    /// Format an up-to-date report line.
    pub fn format_ok(&self, msg: &str) -> String {
        format!("✔️  {}", msg)
    }

    /// Format an out-of-date report line.
    pub fn format_outdated(&self, msg: &str) -> String {
        format!("⚠️  {}", msg)
    }

    /// Format a progress line.
    pub fn format_progress(&self, msg: &str) -> String {
        self.progress.apply_to(msg).to_string()
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
