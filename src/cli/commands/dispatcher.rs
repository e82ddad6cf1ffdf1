//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::{Cli, Commands, DeployArgs, ModArgs};
use crate::config::LeelaConfig;
use crate::error::Result;
use crate::shell::{ProcessRunner, DEFAULT_TOOL_NAME};
use crate::ui::UserInterface;

use super::alias::AliasCommand;
use super::deploy::DeployCommand;
use super::doctor::DoctorCommand;
use super::info::{InitCommand, VersionCommand};
use super::mods::ModCommand;
use super::npm::NpmCommand;
use super::proxy::ProxyCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Mirror a delegated process's exit status.
    pub fn from_exit(result: &crate::shell::CommandResult) -> Self {
        if result.success {
            Self::success()
        } else {
            Self::failure(result.exit_code.unwrap_or(1))
        }
    }
}

/// What every command runs against.
pub struct CommandEnv<'a> {
    /// Directory the tool was invoked in.
    pub project_root: PathBuf,
    /// Name the tool was invoked as, used in remediation hints.
    pub tool_name: String,
    /// Path of the running executable.
    pub executable: PathBuf,
    pub config: LeelaConfig,
    pub runner: &'a dyn ProcessRunner,
}

impl CommandEnv<'_> {
    /// How far `node_modules` may trail the lockfile.
    pub fn lock_window(&self) -> Duration {
        Duration::from_millis(self.config.lock_window_ms)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    env: CommandEnv<'a>,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            env: CommandEnv {
                project_root,
                tool_name: DEFAULT_TOOL_NAME.to_string(),
                executable: PathBuf::from(DEFAULT_TOOL_NAME),
                config: LeelaConfig::default(),
                runner,
            },
        }
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.env.tool_name = tool_name.into();
        self
    }

    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.env.executable = executable.into();
        self
    }

    pub fn with_config(mut self, config: LeelaConfig) -> Self {
        self.env.config = config;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.env.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Built-ins are matched first; everything else, including no command
    /// at all, goes through npm.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = &self.env;
        match &cli.command {
            Some(Commands::Yarn(args)) => NpmCommand::new(env, args.args.clone()).execute(ui),
            Some(Commands::Version) => VersionCommand.execute(ui),
            Some(Commands::Init) => InitCommand::new(env).execute(ui),
            Some(Commands::Doctor(args)) => DoctorCommand::new(env, args.into()).execute(ui),
            Some(Commands::Alias(args)) => AliasCommand::new(env, args.name.clone()).execute(ui),
            Some(Commands::Proxy(args)) => ProxyCommand::new(env, args.args.clone()).execute(ui),
            Some(Commands::Npm(args)) => NpmCommand::new(env, args.clone()).execute(ui),
            None => NpmCommand::new(env, Vec::new()).execute(ui),
        }
    }

    /// Run the mod named on the `leela-mod` command line.
    pub fn dispatch_mod(&self, args: &ModArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ModCommand::new(&self.env, args.clone()).execute(ui)
    }

    /// Run the deploy named on the `leela-deploy` command line.
    pub fn dispatch_deploy(
        &self,
        args: &DeployArgs,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        DeployCommand::new(&self.env, args.target.into()).execute(ui)
    }
}
