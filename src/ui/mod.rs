//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to the real terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use leela::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.ok("Global package left-pad (1.3.0) is up to date!");
//! assert!(ui.has_ok("left-pad"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LeelaTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Styling for inline values.
    fn theme(&self) -> &LeelaTheme;

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display an "up to date" report line.
    fn ok(&mut self, msg: &str);

    /// Display a "not up to date" report line.
    fn outdated(&mut self, msg: &str);

    /// Display a progress line.
    fn progress(&mut self, msg: &str);

    /// Display an error on stderr.
    fn error(&mut self, msg: &str);

    /// Ask the user to pick one of `options`.
    ///
    /// Returns `None` when the user cancels.
    fn select(&mut self, question: &str, options: &[String]) -> Result<Option<usize>>;

    /// Whether a human can answer [`select`](Self::select).
    fn is_interactive(&self) -> bool;
}
