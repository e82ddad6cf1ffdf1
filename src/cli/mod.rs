//! Command-line interface for Leela.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`runtime`] - Logging and dispatcher setup shared by the binaries

pub mod args;
pub mod commands;
pub mod runtime;

pub use args::{AliasArgs, Cli, Commands, DeployArgs, DoctorArgs, ModArgs, PassthroughArgs};
pub use commands::{Command, CommandDispatcher, CommandEnv, CommandResult};
