//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Anything that isn't a
//! built-in subcommand is handed to npm, so the built-in vocabulary stays
//! small. Mods and deploys have their own binaries, parsed by [`ModArgs`]
//! and [`DeployArgs`].

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::deploy::DeployTarget;
use crate::doctor::DoctorOptions;

/// Leela - npm with guard rails and a version doctor.
#[derive(Debug, Parser)]
#[command(name = "leela")]
#[command(author, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install dependencies, or run npm with the given arguments
    #[command(disable_help_flag = true)]
    Yarn(PassthroughArgs),

    /// Print Leela's version
    Version,

    /// Scaffold a project (not yet implemented)
    Init,

    /// Check that tracked packages and the localproxy server are up to date
    Doctor(DoctorArgs),

    /// Create a symlink to Leela under another name
    Alias(AliasArgs),

    /// Run the localproxy CLI
    #[command(disable_help_flag = true)]
    Proxy(PassthroughArgs),

    /// Any other command is forwarded to npm
    #[command(external_subcommand)]
    Npm(Vec<String>),
}

/// Arguments forwarded verbatim.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PassthroughArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DoctorArgs {
    /// Attempt to fix outdated packages
    #[arg(long)]
    pub fix: bool,

    /// Commit fixes made in git repositories
    #[arg(long)]
    pub commit: bool,

    /// Push fix commits
    #[arg(long)]
    pub push: bool,

    /// Pull each repository before checking it
    #[arg(long)]
    pub pull: bool,

    /// Also check projects under this directory
    pub root: Option<PathBuf>,
}

impl From<&DoctorArgs> for DoctorOptions {
    fn from(args: &DoctorArgs) -> Self {
        Self {
            fix: args.fix,
            commit: args.commit,
            push: args.push,
            pull: args.pull,
            root: args.root.clone(),
        }
    }
}

/// Arguments for the `alias` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AliasArgs {
    /// Name of the alias to create
    pub name: Option<String>,
}

/// Leela mod runner - repository maintenance jobs.
#[derive(Debug, Clone, Parser)]
#[command(name = "leela-mod")]
#[command(author, version, about, long_about = None)]
pub struct ModArgs {
    /// Mod to run (npm-use-latest, npm-use-latest-global, npm-audit, pin-dependencies)
    pub name: String,

    /// Apply changes instead of reporting them
    #[arg(long)]
    pub fix: bool,

    /// Mod arguments
    pub args: Vec<String>,
}

/// Leela deploy - build and ship the project to a remote host.
#[derive(Debug, Clone, Parser)]
#[command(name = "leela-deploy")]
#[command(author, version, about, long_about = None)]
pub struct DeployArgs {
    /// Where to deploy
    #[arg(value_enum)]
    pub target: DeployTargetArg,
}

/// Deploy targets accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeployTargetArg {
    /// Use the `ec2-deploy` manifest section
    Ec2,
    /// Use the `ssh-deploy` manifest section
    Ssh,
}

impl From<DeployTargetArg> for DeployTarget {
    fn from(arg: DeployTargetArg) -> Self {
        match arg {
            DeployTargetArg::Ec2 => DeployTarget::Ec2,
            DeployTargetArg::Ssh => DeployTarget::Ssh,
        }
    }
}
