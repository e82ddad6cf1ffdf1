//! Recording process runner for tests.
//!
//! `RecordingRunner` implements [`ProcessRunner`] without spawning anything.
//! It records every invocation and answers with scripted results.
//!
//! # Example
//!
//! ```
//! use leela::shell::{CommandResult, Invocation, ProcessRunner, RecordingRunner};
//!
//! let runner = RecordingRunner::new();
//! runner.respond("git stash", CommandResult::success("No local changes to save\n", ""));
//!
//! let result = runner.run(&Invocation::new("git", ["stash"]).captured()).unwrap();
//! assert!(result.stdout.contains("No local changes"));
//! assert_eq!(runner.commands(), vec!["git stash".to_string()]);
//! ```

use std::cell::RefCell;

use crate::error::Result;

use super::command::{CommandResult, Invocation, ProcessRunner};

/// Process runner that records invocations and replays scripted results.
///
/// Responses are matched by command-line prefix, most recently added first.
/// Unmatched invocations succeed with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    responses: RefCell<Vec<(String, CommandResult)>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer invocations whose command line starts with `prefix`.
    pub fn respond(&self, prefix: &str, result: CommandResult) {
        self.responses
            .borrow_mut()
            .push((prefix.to_string(), result));
    }

    /// All invocations, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Command lines of all invocations, in order.
    pub fn commands(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(Invocation::display)
            .collect()
    }

    /// Whether any invocation's command line starts with `prefix`.
    pub fn ran(&self, prefix: &str) -> bool {
        self.commands().iter().any(|c| c.starts_with(prefix))
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.invocations.borrow_mut().push(invocation.clone());
        let line = invocation.display();
        let result = self
            .responses
            .borrow()
            .iter()
            .rev()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, r)| r.clone())
            .unwrap_or_else(|| CommandResult::success("", ""));
        Ok(result)
    }
}
