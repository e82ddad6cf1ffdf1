//! npm delegation: command vocabulary, dependency guard, start location.

pub mod commands;
pub mod guard;
pub mod start;

pub use commands::{
    build_npm_args, is_guarded, is_npm_command, is_start, GUARDED_COMMANDS, NPM_COMMANDS,
};
pub use guard::{LOCKFILE, NODE_MODULES};
pub use start::{choose_start_location, start_candidates};
