//! External command execution.
//!
//! Every tool Leela drives (`npm`, `git`, `ssh`, `scp`, `tar`, `ln`) is run
//! through a [`ProcessRunner`], so callers can be exercised against a
//! recording runner in tests.

use crate::error::{LeelaError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// How a child's stdio is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdioMode {
    /// Child shares the terminal; nothing is captured.
    #[default]
    Inherit,
    /// stdout and stderr are captured; stdin is closed.
    Capture,
}

/// A program invocation: program, arguments, working directory, stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub stdio: StdioMode,
}

impl Invocation {
    /// Create an invocation that inherits the terminal.
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            stdio: StdioMode::Inherit,
        }
    }

    /// Run in the given directory.
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Capture stdout/stderr instead of inheriting them.
    pub fn captured(mut self) -> Self {
        self.stdio = StdioMode::Capture;
        self
    }

    /// The command line as a user would type it.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output (empty when inherited).
    pub stdout: String,

    /// Captured standard error (empty when inherited).
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// stdout followed by stderr.
    pub fn combined_output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }

    /// Turn a non-zero exit into [`LeelaError::CommandFailed`].
    pub fn check(self, invocation: &Invocation) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(LeelaError::CommandFailed {
                command: invocation.display(),
                code: self.exit_code,
            })
        }
    }
}

/// Runs external programs.
pub trait ProcessRunner {
    /// Run the invocation to completion.
    ///
    /// A non-zero exit is reported in the returned [`CommandResult`], not as
    /// an error. Errors mean the program could not be started.
    fn run(&self, invocation: &Invocation) -> Result<CommandResult>;
}

/// Runs programs directly with `std::process`, without a shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        let cwd = match &invocation.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        tracing::debug!(
            "RUN: Running {} in {}",
            invocation.display(),
            std::path::absolute(&cwd).unwrap_or_else(|_| cwd.clone()).display()
        );

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        cmd.current_dir(&cwd);

        match invocation.stdio {
            StdioMode::Inherit => {
                cmd.stdin(Stdio::inherit());
                cmd.stdout(Stdio::inherit());
                cmd.stderr(Stdio::inherit());
            }
            StdioMode::Capture => {
                cmd.stdin(Stdio::null());
                cmd.stdout(Stdio::piped());
                cmd.stderr(Stdio::piped());
            }
        }

        let output = cmd.output().map_err(|e| LeelaError::Spawn {
            command: invocation.display(),
            message: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if output.status.success() {
            Ok(CommandResult::success(stdout, stderr))
        } else {
            tracing::debug!(
                "{} exited with {:?}",
                invocation.display(),
                output.status.code()
            );
            Ok(CommandResult::failure(output.status.code(), stdout, stderr))
        }
    }
}
