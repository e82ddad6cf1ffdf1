//! Leela - npm with guard rails for localproxy projects.
//!
//! Leela forwards everyday commands to npm, refusing to start a project
//! whose `node_modules` are out of date, and bundles a few maintenance
//! tools around it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Tool configuration loading
//! - [`deploy`] - Build, archive, and ship to EC2 or SSH hosts
//! - [`doctor`] - Version checks for tracked packages and the localproxy server
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - package.json reading and discovery
//! - [`mods`] - Repository maintenance jobs
//! - [`npm`] - npm argument building, dependency guard, start location
//! - [`shell`] - External process execution
//! - [`ui`] - Terminal output and selection prompts
//!
//! # Example
//!
//! ```
//! use leela::npm::build_npm_args;
//!
//! let args = vec!["build".to_string()];
//! assert_eq!(build_npm_args(&args), vec!["run", "build"]);
//! assert_eq!(build_npm_args(&[]), vec!["install"]);
//! ```

pub mod cli;
pub mod config;
pub mod deploy;
pub mod doctor;
pub mod error;
pub mod manifest;
pub mod mods;
pub mod npm;
pub mod shell;
pub mod ui;

pub use error::{LeelaError, Result};
