//! Tool configuration.
//!
//! - Schema and defaults in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Configuration File Locations
//!
//! 1. `$LEELA_CONFIG`, when set
//! 2. User config (`~/.leela/config.yml`)
//! 3. Built-in defaults

pub mod loader;
pub mod schema;

pub use loader::{find_config_path, load_config, load_config_file, parse_config, CONFIG_ENV_VAR};
pub use schema::LeelaConfig;
