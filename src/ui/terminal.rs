//! Terminal UI.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::io::Write;

use crate::error::{LeelaError, Result};

use super::{should_use_colors, LeelaTheme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LeelaTheme,
    interactive: bool,
}

impl TerminalUI {
    /// Create a terminal UI; `interactive` enables selection prompts.
    pub fn new(interactive: bool) -> Self {
        let theme = if should_use_colors() {
            LeelaTheme::new()
        } else {
            LeelaTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            interactive,
        }
    }
}

impl UserInterface for TerminalUI {
    fn theme(&self) -> &LeelaTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn ok(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_ok(msg)).ok();
    }

    fn outdated(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_outdated(msg)).ok();
    }

    fn progress(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_progress(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn select(&mut self, question: &str, options: &[String]) -> Result<Option<usize>> {
        if !self.interactive || options.is_empty() {
            return Ok(None);
        }

        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .items(options)
            .default(0)
            .interact_on_opt(&self.out)
            .map_err(|e| LeelaError::Io(e.into()))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
