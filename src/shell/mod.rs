//! External process execution and invocation environment.

pub mod command;
pub mod platform;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use command::{CommandResult, Invocation, ProcessRunner, StdioMode, SystemRunner};
pub use platform::{debug_enabled, debug_env_var, invoked_name, is_ci, DEFAULT_TOOL_NAME};
#[cfg(any(test, feature = "test-util"))]
pub use testing::RecordingRunner;
