//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command receives the same
//! [`CommandEnv`]: project root, invoked name, executable path, config and
//! process runner.

pub mod alias;
pub mod deploy;
pub mod dispatcher;
pub mod doctor;
pub mod info;
pub mod mods;
pub mod npm;
pub mod proxy;

pub use dispatcher::{Command, CommandDispatcher, CommandEnv, CommandResult};
