//! Error types for Leela operations.
//!
//! This module defines [`LeelaError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LeelaError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LeelaError::Other`) for unexpected errors
//! - Delegated processes report their own failures on the inherited terminal;
//!   only their exit status is turned into [`LeelaError::CommandFailed`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Leela operations.
#[derive(Debug, Error)]
pub enum LeelaError {
    /// A package.json that an operation requires does not exist.
    #[error("missing package.json: {path}")]
    ManifestNotFound { path: PathBuf },

    /// A package.json exists but is not valid JSON.
    #[error("Failed to parse {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// The manifest has no deploy block for the requested target.
    #[error("package.json is missing {section} section")]
    MissingDeploySection { section: String },

    /// `node_modules` does not match the lockfile.
    #[error("Dependencies are stale: {reason}")]
    StaleDependencies { reason: String },

    /// No mod is registered under this name.
    #[error("Unrecognized mod: {name}")]
    UnrecognizedMod { name: String },

    /// A required positional argument was not given.
    #[error("Missing argument '{name}'. Usage: {usage}")]
    MissingArgument { name: String, usage: String },

    /// An external command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// An external command could not be started at all.
    #[error("Failed to run '{command}': {message}")]
    Spawn { command: String, message: String },

    /// An HTTP request failed or returned an unusable body.
    #[error("HTTP request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// The tool configuration file is malformed.
    #[error("Invalid configuration at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Leela operations.
pub type Result<T> = std::result::Result<T, LeelaError>;
