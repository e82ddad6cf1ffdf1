//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output for
//! later assertion. Selection answers can be scripted.

use std::collections::VecDeque;

use crate::error::Result;

use super::{LeelaTheme, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    theme: LeelaTheme,
    interactive: bool,
    lines: Vec<String>,
    messages: Vec<String>,
    oks: Vec<String>,
    outdated: Vec<String>,
    progress: Vec<String>,
    errors: Vec<String>,
    selections: VecDeque<Option<usize>>,
    questions: Vec<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create a non-interactive mock with a plain theme.
    pub fn new() -> Self {
        Self {
            theme: LeelaTheme::plain(),
            interactive: false,
            lines: Vec::new(),
            messages: Vec::new(),
            oks: Vec::new(),
            outdated: Vec::new(),
            progress: Vec::new(),
            errors: Vec::new(),
            selections: VecDeque::new(),
            questions: Vec::new(),
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Queue the answer to the next `select` call (`None` = cancelled).
    pub fn queue_selection(&mut self, answer: Option<usize>) {
        self.selections.push_back(answer);
    }

    /// Every line in output order, as the terminal would show it.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The whole output joined by newlines.
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn oks(&self) -> &[String] {
        &self.oks
    }

    pub fn outdated_lines(&self) -> &[String] {
        &self.outdated
    }

    pub fn progress_lines(&self) -> &[String] {
        &self.progress
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Questions asked through `select`.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_ok(&self, msg: &str) -> bool {
        self.oks.iter().any(|m| m.contains(msg))
    }

    pub fn has_outdated(&self, msg: &str) -> bool {
        self.outdated.iter().any(|m| m.contains(msg))
    }

    pub fn has_progress(&self, msg: &str) -> bool {
        self.progress.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn theme(&self) -> &LeelaTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.messages.push(msg.to_string());
    }

    fn ok(&mut self, msg: &str) {
        self.lines.push(self.theme.format_ok(msg));
        self.oks.push(msg.to_string());
    }

    fn outdated(&mut self, msg: &str) {
        self.lines.push(self.theme.format_outdated(msg));
        self.outdated.push(msg.to_string());
    }

    fn progress(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.progress.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
        self.errors.push(msg.to_string());
    }

    fn select(&mut self, question: &str, _options: &[String]) -> Result<Option<usize>> {
        self.questions.push(question.to_string());
        Ok(self.selections.pop_front().flatten())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
